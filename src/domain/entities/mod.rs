//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`]: the mapping between a
//! short code and the URL it redirects to. Records are created once and
//! never updated or removed.

pub mod url_record;

pub use url_record::UrlRecord;
