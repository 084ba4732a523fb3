//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the instantiator needs from the outside world.
//! The `summon-adapters` crate provides implementations.

use std::sync::Arc;

use crate::domain::{ParamType, TypeKey, TypeSpec, Value};

/// Port for type introspection: the "type → constructor candidates"
/// capability.
///
/// Implemented by:
/// - `summon_adapters::catalog::InMemoryTypeCatalog` (production)
/// - test stubs wrapping a handful of specs
///
/// ## Design Notes
///
/// - Queried exactly once per `new_instance` call
/// - Returns `Arc` so a call holds the spec without cloning constructors
/// - Absence is not an error here; the service layer classifies it
pub trait TypeCatalog: Send + Sync {
    /// Describe a type, or report that it is unknown.
    fn describe(&self, key: &TypeKey) -> Option<Arc<TypeSpec>>;
}

/// Port for resolving constructor parameters that were not supplied
/// explicitly.
///
/// Implemented by:
/// - `summon_adapters::services::InMemoryServiceRegistry` (production)
/// - `summon_adapters::services::EmptyServiceLookup` (testing)
///
/// ## Contract
///
/// - Called at most once per unresolved slot per `new_instance` call
/// - Must be safe to call repeatedly and concurrently from independent
///   calls
/// - A returned value must be assignable to the requested type; the
///   resolver re-checks and rejects misbehaving lookups
#[cfg_attr(test, mockall::automock)]
pub trait ServiceLookup: Send + Sync {
    /// Locate a value for the given parameter type, or report absence.
    fn find(&self, ty: &ParamType) -> Option<Value>;
}
