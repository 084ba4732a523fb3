//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `summon-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TypeCatalog`: Type spec storage/introspection
//!   - `ServiceLookup`: Parameter resolution for unfilled slots
//!
//! - **Driving (Input) Ports**: Called by the embedding application,
//!   implemented by `Instantiator` itself

pub mod output;

pub use output::{ServiceLookup, TypeCatalog};

#[cfg(test)]
pub use output::MockServiceLookup;
