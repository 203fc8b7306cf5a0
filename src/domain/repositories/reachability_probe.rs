//! Outbound check used to decide whether a URL is live.

use async_trait::async_trait;

/// Transport-level failure of a probe request.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),
}

/// Issues a single request against a URL and reports the response status.
///
/// Implementations make exactly one attempt and never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpReachabilityProbe`] - `reqwest`-backed probe
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Fetches `url` and returns the final HTTP status code.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when no response was received (DNS failure,
    /// refused connection, timeout).
    async fn fetch_status(&self, url: &str) -> Result<u16, ProbeError>;
}
