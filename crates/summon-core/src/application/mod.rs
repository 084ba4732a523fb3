//! Application layer for Summon.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Instantiator) and selection
//!   strategies (LenientConstructorSelector)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! matching rules itself. Argument planning and assignability live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ConstructorSelector,
    Instantiator,
    LenientConstructorSelector,
    ResolvedCall, // selection outcome DTO
};

// Re-export port traits (for adapter implementation)
pub use ports::{ServiceLookup, TypeCatalog};

pub use error::ApplicationError;
