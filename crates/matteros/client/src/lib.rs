//! MatterOS Client - the async fetch layer
//!
//! Fetches dashboard, matter, event, and policy snapshot slices from the
//! configured API, normalizes each payload, and substitutes the bundled
//! fallback dataset for any slice that cannot be fetched or normalized.
//! Provenance (`live` vs `fallback`) is tracked per slice, so a partially
//! degraded render is visible rather than silent.
//!
//! # Key Concepts
//!
//! - **One attempt, short timeout**: each slice gets a single request with
//!   a 1.8 second budget. Rendering stale-but-plausible fallback data beats
//!   blocking the view on a slow upstream.
//! - **Per-slice degradation**: a failed dashboard fetch does not take the
//!   at-risk list down with it.
//! - **Not-found is not degradation**: an id absent from both live and
//!   fallback data is a [`ClientError::NotFound`], a real answer about a
//!   specific resource rather than a transport problem.

#![deny(unsafe_code)]

mod client;
mod config;
mod error;

pub use client::MatterosClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, ENDPOINT_ENV};
pub use error::{ClientError, ClientResult};
