//! Infrastructure adapters for Summon.
//!
//! This crate implements the ports defined in
//! `summon-core::application::ports`. Both adapters are in-memory and
//! lock-based; a manifest-backed catalog or a scoped service registry
//! would slot in beside them without touching the core.

pub mod catalog;
pub mod services;

// Re-export commonly used adapters
pub use catalog::InMemoryTypeCatalog;
pub use services::{EmptyServiceLookup, InMemoryServiceRegistry};
