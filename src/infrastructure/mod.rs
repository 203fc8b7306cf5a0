//! Infrastructure layer for storage and outbound integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - `reqwest`-backed reachability probe
//! - [`persistence`] - In-memory repository implementation

pub mod http;
pub mod persistence;
