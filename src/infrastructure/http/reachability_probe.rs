//! `reqwest`-backed implementation of [`ReachabilityProbe`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::repositories::{ProbeError, ReachabilityProbe};

/// Probes URLs with a single `GET` request.
///
/// Redirects are followed with the client's default policy; the reported
/// status is that of the final response. Every request is bounded by the
/// configured timeout, so a hung upstream surfaces as [`ProbeError::Timeout`]
/// instead of blocking the caller.
#[derive(Debug, Clone)]
pub struct HttpReachabilityProbe {
    client: Client,
}

impl HttpReachabilityProbe {
    /// Builds a probe whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpReachabilityProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16, ProbeError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::Timeout
            } else {
                ProbeError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        debug!(url, status, "Reachability probe completed");

        Ok(status)
    }
}
