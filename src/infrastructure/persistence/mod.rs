//! Repository implementations.
//!
//! Mappings live only as long as the process; nothing is written to disk.

mod in_memory_link_repository;

pub use in_memory_link_repository::InMemoryLinkRepository;
