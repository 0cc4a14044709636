//! MatterOS Bridge - derivations behind the command bridge view
//!
//! One-way pipeline over a single immutable snapshot of dashboard and matter
//! data:
//!
//! - **Posture classifier**: counters and deadlines into one of three
//!   operational postures, strict precedence, first match wins.
//! - **Risk ranker**: matters ordered by severity then urgency, bounded to
//!   the six rows of the exposure window.
//! - **Docket builder**: the 48-hour execution horizon, with a relaxed
//!   fallback selection when nothing lands inside it.
//! - **Exposure ring**: risk counts into contiguous percentage segments for
//!   the radial summary.
//!
//! Every derivation is a pure function and takes the current instant as an
//! explicit `now` parameter; nothing in this crate reads a clock.

#![deny(unsafe_code)]

mod docket;
mod posture;
mod rank;
mod ring;
mod text;
mod time;

pub use docket::{build_docket, next_action, DocketItem};
pub use posture::classify_posture;
pub use rank::{at_risk_count, rank_matters, row_status, MatterRowStatus, EXPOSURE_WINDOW_LIMIT};
pub use ring::{exposure_ring, ExposureRing};
pub use text::{compact_matter_type, compact_title};
pub use time::{format_countdown, format_last_evaluated, hours_until};
