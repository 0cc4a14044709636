//! MatterOS Normalize - untrusted payloads into the canonical data model
//!
//! The upstream API is not treated as authoritative about its own shape:
//! every payload arrives as a raw [`serde_json::Value`] and is coerced field
//! by field. The rules, applied uniformly across record types:
//!
//! - Field synonyms (camelCase and snake_case variants, legacy names) are
//!   resolved in a fixed priority order; the first populated alternative wins.
//! - Numbers accept numeric or numeric-string input and fall back to a
//!   default on anything non-finite. Coercion never fails.
//! - Exposure states outside the closed set become `Monitoring`.
//! - A record missing its identifier (or, for matters, its title) is dropped
//!   from the collection entirely rather than admitted with blank fields.
//! - A list payload may be a bare array or `{ "items": [...] }`; anything
//!   else fails normalization of the whole slice, which callers treat as
//!   "use fallback data", never as an error.
//!
//! Every function is a pure transformation; `now` is injected where a
//! required timestamp needs a default.

#![deny(unsafe_code)]

mod dashboard;
mod event;
mod matter;
mod snapshot;
mod value;

pub use dashboard::normalize_dashboard;
pub use event::{normalize_event, normalize_event_list};
pub use matter::{
    normalize_at_risk_list, normalize_at_risk_matter, normalize_matter, normalize_matter_list,
};
pub use snapshot::{normalize_snapshot, normalize_snapshot_list};
