//! Capability trait definitions for the domain layer.
//!
//! These traits abstract the two collaborators the services depend on and are
//! implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for storage and outbound checks
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Traits
//!
//! - [`LinkRepository`] - Short code mapping storage
//! - [`ReachabilityProbe`] - Outbound HTTP status check for candidate URLs

pub mod link_repository;
pub mod reachability_probe;

pub use link_repository::LinkRepository;
pub use reachability_probe::{ProbeError, ReachabilityProbe};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use reachability_probe::MockReachabilityProbe;
