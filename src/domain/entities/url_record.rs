//! Mapping between a short code and its original URL.

use serde::Serialize;

/// A stored short code mapping.
///
/// `original_url` is kept exactly as submitted; both fields are immutable
/// once the record is in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
}

impl UrlRecord {
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
        }
    }
}
