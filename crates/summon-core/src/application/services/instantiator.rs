//! Instantiator - main application orchestrator.
//!
//! This service coordinates the whole construction workflow:
//! 1. Describe the target type via the catalog
//! 2. Select a constructor and resolve its arguments
//! 3. Invoke the factory and stamp the payload into an `Instance`
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). Every failure leaves the call with the single outer
//! instantiation classification; the specific cause rides along as the
//! source.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ServiceLookup, TypeCatalog},
        services::selector::{ConstructorSelector, LenientConstructorSelector},
    },
    domain::{Instance, TypeKey, Value},
    error::{SummonError, SummonResult},
};

/// Main instantiation service.
///
/// Holds only immutable configuration — catalog, service lookup, and the
/// selection strategy — so one instantiator is safe to share across
/// threads; every call's state is stack-local and a failed call mutates
/// nothing.
pub struct Instantiator {
    catalog: Arc<dyn TypeCatalog>,
    services: Arc<dyn ServiceLookup>,
    selector: Arc<dyn ConstructorSelector>,
}

impl Instantiator {
    /// Create an instantiator with the lenient selection strategy.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use summon_core::application::Instantiator;
    ///
    /// # fn demo(catalog: Arc<dyn summon_core::application::ports::TypeCatalog>,
    /// #         services: Arc<dyn summon_core::application::ports::ServiceLookup>) {
    /// let instantiator = Instantiator::new(catalog, services);
    /// # }
    /// ```
    pub fn new(catalog: Arc<dyn TypeCatalog>, services: Arc<dyn ServiceLookup>) -> Self {
        Self::with_selector(catalog, services, Arc::new(LenientConstructorSelector))
    }

    /// Create an instantiator with a custom selection strategy.
    pub fn with_selector(
        catalog: Arc<dyn TypeCatalog>,
        services: Arc<dyn ServiceLookup>,
        selector: Arc<dyn ConstructorSelector>,
    ) -> Self {
        Self {
            catalog,
            services,
            selector,
        }
    }

    /// Construct a new instance of `key` from the explicit parameters.
    ///
    /// This is the main use case. Synchronous: the call either returns an
    /// instance or fails with a classified error; nothing is retried
    /// internally and a failed attempt has no side effects.
    #[instrument(skip_all, fields(target = %key, explicit = explicit.len()))]
    pub fn new_instance(&self, key: &TypeKey, explicit: &[Value]) -> SummonResult<Instance> {
        // 1. Describe the type (one catalog query per call)
        let Some(spec) = self.catalog.describe(key) else {
            return Err(SummonError::instantiation(
                key.as_str(),
                ApplicationError::TypeNotRegistered { key: key.clone() },
            ));
        };

        // 2. Select a constructor and resolve the argument list
        let call = self
            .selector
            .select(&spec, explicit, self.services.as_ref())
            .map_err(|cause| {
                warn!(%cause, "constructor selection failed");
                SummonError::instantiation(key.as_str(), cause)
            })?;

        // 3. Run the factory and stamp identity onto the payload
        let payload = (call.factory)(&call.arguments).map_err(|source| {
            warn!(%source, "constructor body failed");
            SummonError::instantiation(
                key.as_str(),
                ApplicationError::ConstructionFailed {
                    type_name: key.to_string(),
                    source,
                },
            )
        })?;

        debug!("instance constructed");
        Ok(Instance::new(
            spec.key().clone(),
            spec.conforms().to_vec(),
            payload,
        ))
    }
}
