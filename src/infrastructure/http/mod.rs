//! Outbound HTTP integrations.

mod reachability_probe;

pub use reachability_probe::HttpReachabilityProbe;
