//! Candidate URL validation.

use std::sync::Arc;

use tracing::warn;
use url::Url;

use crate::domain::repositories::ReachabilityProbe;
use crate::error::AppError;

/// Decides whether a URL may be shortened.
///
/// Runs two checks in order:
///
/// 1. **Syntax**: the value parses as an absolute URL with an `http` or
///    `https` scheme.
/// 2. **Reachability**: one request through the injected
///    [`ReachabilityProbe`] returns a status in `[200, 400)`.
///
/// The probe is never called for a value that fails the syntax check.
pub struct UrlValidator {
    probe: Arc<dyn ReachabilityProbe>,
}

impl UrlValidator {
    pub fn new(probe: Arc<dyn ReachabilityProbe>) -> Self {
        Self { probe }
    }

    /// Validates `candidate`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedUrl`] if the syntax check fails, and
    /// [`AppError::UnreachableUrl`] if the probe fails or reports a status
    /// outside `[200, 400)`.
    pub async fn validate(&self, candidate: &str) -> Result<(), AppError> {
        check_syntax(candidate)?;

        let status = self.probe.fetch_status(candidate).await.map_err(|e| {
            warn!(url = candidate, error = %e, "Reachability probe failed");
            AppError::UnreachableUrl { status: None }
        })?;

        if !(200..400).contains(&status) {
            warn!(url = candidate, status, "URL responded with a rejected status");
            return Err(AppError::UnreachableUrl {
                status: Some(status),
            });
        }

        Ok(())
    }
}

/// Requires an absolute `http`/`https` URL.
///
/// Control characters are refused outright: the parser drops tabs and
/// newlines, but the candidate is stored as submitted and must stay a valid
/// `Location` header value.
fn check_syntax(candidate: &str) -> Result<(), AppError> {
    if candidate.chars().any(|c| c.is_ascii_control()) {
        return Err(AppError::MalformedUrl);
    }

    let url = Url::parse(candidate).map_err(|_| AppError::MalformedUrl)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AppError::MalformedUrl),
    }
}
