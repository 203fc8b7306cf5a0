//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request body carrying the URL to shorten.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub original_url: String,
}

/// Optional query parameters of the shorten endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenQuery {
    /// Short code requested by the caller instead of a generated one.
    pub short_url: Option<String>,
}

/// Response carrying the assigned short code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
}
