//! In-memory type catalog.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use summon_core::{
    application::ports::TypeCatalog,
    domain::{DomainValidator as validator, TypeKey, TypeSpec},
    error::SummonResult,
};

/// Thread-safe in-memory type catalog.
#[derive(Clone)]
pub struct InMemoryTypeCatalog {
    inner: Arc<RwLock<HashMap<TypeKey, Arc<TypeSpec>>>>,
}

impl InMemoryTypeCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog pre-loaded with the given specs.
    pub fn with_specs(specs: impl IntoIterator<Item = TypeSpec>) -> SummonResult<Self> {
        let catalog = Self::new();
        for spec in specs {
            catalog.insert(spec)?;
        }
        Ok(catalog)
    }

    /// Insert or replace a type spec.
    pub fn insert(&self, spec: TypeSpec) -> SummonResult<()> {
        // Validate before insertion
        validator::validate_type_spec(&spec)
            .map_err(summon_core::error::SummonError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| summon_core::application::ApplicationError::RegistryLockError)?;

        debug!(key = %spec.key(), constructors = spec.constructors().len(), "type spec registered");
        inner.insert(spec.key().clone(), Arc::new(spec));
        Ok(())
    }

    /// Get a spec by key.
    pub fn get(&self, key: &TypeKey) -> SummonResult<Arc<TypeSpec>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| summon_core::application::ApplicationError::RegistryLockError)?;

        inner.get(key).cloned().ok_or_else(|| {
            summon_core::application::ApplicationError::TypeNotRegistered { key: key.clone() }
                .into()
        })
    }

    /// Remove a spec.
    pub fn remove(&self, key: &TypeKey) -> SummonResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| summon_core::application::ApplicationError::RegistryLockError)?;

        inner.remove(key).map(|_| ()).ok_or_else(|| {
            summon_core::application::ApplicationError::TypeNotRegistered { key: key.clone() }
                .into()
        })
    }

    /// Get the number of registered types.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all specs.
    pub fn clear(&self) -> SummonResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| summon_core::application::ApplicationError::RegistryLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCatalog for InMemoryTypeCatalog {
    fn describe(&self, key: &TypeKey) -> Option<Arc<TypeSpec>> {
        self.inner.read().ok()?.get(key).cloned()
    }
}
