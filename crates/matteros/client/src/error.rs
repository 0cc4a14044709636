//! Client error types

use thiserror::Error;

/// Fetch layer error types. Deliberately small: transport and payload
/// failures degrade a slice to fallback data instead of erroring, so the
/// only failures callers ever see are client construction and a genuinely
/// missing record.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type for fetch operations
pub type ClientResult<T> = Result<T, ClientError>;
