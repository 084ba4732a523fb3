//! In-memory service registry and the always-absent test double.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use summon_core::{
    application::{ApplicationError, ports::ServiceLookup},
    domain::{Instance, ParamType, Value, capabilities},
    error::SummonResult,
};

/// Thread-safe in-memory service registry.
///
/// Values are registered under the parameter type they satisfy; lookups
/// are exact-key. Primitive and boxed keys are distinct registrations on
/// purpose (a value serving `int` slots says nothing about `Integer`
/// slots unless registered for both).
#[derive(Clone)]
pub struct InMemoryServiceRegistry {
    inner: Arc<RwLock<HashMap<ParamType, Value>>>,
}

impl InMemoryServiceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a value for a parameter type, replacing any previous one.
    ///
    /// # Errors
    ///
    /// `IncompatibleService` when the value is null or not assignable to
    /// the type it is being registered under — a registry must only hand
    /// out values the resolver will accept.
    pub fn register(&self, ty: ParamType, value: Value) -> SummonResult<()> {
        if value.is_null() || !capabilities::value_assignable(&value, &ty) {
            return Err(ApplicationError::IncompatibleService {
                ty: ty.to_string(),
                value: value.to_string(),
            }
            .into());
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RegistryLockError)?;

        debug!(ty = %ty, "service registered");
        inner.insert(ty, value);
        Ok(())
    }

    /// Register an instance under its own key and every key it conforms to.
    pub fn register_instance(&self, instance: Instance) -> SummonResult<()> {
        let mut keys = vec![instance.key().clone()];
        keys.extend(instance.conforms().iter().cloned());

        for key in keys {
            self.register(ParamType::Object(key), Value::Object(instance.clone()))?;
        }
        Ok(())
    }

    /// Get the number of registered services.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all services.
    pub fn clear(&self) -> SummonResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RegistryLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceLookup for InMemoryServiceRegistry {
    fn find(&self, ty: &ParamType) -> Option<Value> {
        self.inner.read().ok()?.get(ty).cloned()
    }
}

/// The empty lookup: every slot is unresolvable.
///
/// Useful wherever a test needs "no services available" without standing
/// up a registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyServiceLookup;

impl ServiceLookup for EmptyServiceLookup {
    fn find(&self, _ty: &ParamType) -> Option<Value> {
        None
    }
}
