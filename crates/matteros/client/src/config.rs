//! Client configuration

use std::time::Duration;

/// Environment variable naming the API base URL.
pub const ENDPOINT_ENV: &str = "MATTEROS_API_BASE_URL";

/// Per-request timeout applied to every slice fetch. Slices degrade to the
/// bundled dataset instead of blocking a render on a slow upstream.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1800);

/// Fetch layer configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL. `None` means no upstream is configured and every
    /// slice renders from the bundled dataset.
    pub base_url: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration with an explicit endpoint. A trailing slash is
    /// trimmed so paths can be appended verbatim; an empty string is
    /// treated as unconfigured.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            base_url: normalize_endpoint(endpoint),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configuration from the `MATTEROS_API_BASE_URL` environment variable.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENDPOINT_ENV)
            .ok()
            .and_then(|value| normalize_endpoint(&value));
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn normalize_endpoint(endpoint: &str) -> Option<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
