//! Summon Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Summon
//! dependency-injecting instantiator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        embedding application            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (Instantiator, LenientCtorSelector)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TypeCatalog, ServiceLookup)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    summon-adapters (Infrastructure)     │
//! │ (InMemoryTypeCatalog, ServiceRegistry)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (TypeSpec, Value, planning, coercion)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use summon_core::{
//!     application::Instantiator,
//!     domain::{TypeKey, Value},
//! };
//!
//! # fn demo(catalog: Arc<dyn summon_core::application::ports::TypeCatalog>,
//! #         services: Arc<dyn summon_core::application::ports::ServiceLookup>) {
//! // 1. Build the instantiator over a catalog and a service lookup
//! let instantiator = Instantiator::new(catalog, services);
//!
//! // 2. Construct instances per call
//! let bean = instantiator
//!     .new_instance(&TypeKey::new("Bean"), &[Value::from("string"), Value::Int(12)])
//!     .unwrap();
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConstructorSelector, Instantiator, LenientConstructorSelector,
        ports::{ServiceLookup, TypeCatalog},
    };
    pub use crate::domain::{
        ConstructError, Instance, ParamType, TypeKey, TypeSpec, TypeSpecBuilder, Value,
    };
    pub use crate::error::{SummonError, SummonResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
