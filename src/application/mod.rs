//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a small API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Syntax and reachability checks
//! - [`services::link_service::LinkService`] - Short code assignment and lookup

pub mod services;
