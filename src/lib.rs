//! # URL Library
//!
//! A small URL shortening service built with Axum. Links are checked for
//! reachability before they are stored, and mappings live in memory for the
//! lifetime of the process.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `UrlRecord` entity and capability traits
//! - **Application Layer** ([`application`]) - URL validation and short code assignment
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and HTTP probe
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8000"   # Optional
//! cargo run
//!
//! curl -X POST 'http://127.0.0.1:8000/shorten_url?short_url=docs' \
//!      -H 'content-type: application/json' \
//!      -d '{"original_url": "https://www.rust-lang.org"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, UrlValidator};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{LinkRepository, ProbeError, ReachabilityProbe};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
