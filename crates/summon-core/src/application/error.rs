//! Application layer errors.
//!
//! These errors represent failures in orchestration, not selection logic.
//! Selection and spec-validation errors are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::domain::{ConstructError, TypeKey};
use crate::error::ErrorCategory;

/// Errors that occur during instantiation orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The requested type has no spec in the catalog.
    #[error("type {key} is not registered in the catalog")]
    TypeNotRegistered { key: TypeKey },

    /// Registry access failed (lock poisoned, etc.).
    #[error("type registry error")]
    RegistryLockError,

    /// A value offered to a service registry does not fit the type it was
    /// registered under.
    #[error("service value {value} is not assignable to service type {ty}")]
    IncompatibleService { ty: String, value: String },

    /// The selected constructor body itself failed. The cause is preserved,
    /// not reclassified.
    #[error("constructor of type {type_name} failed")]
    ConstructionFailed {
        type_name: String,
        #[source]
        source: ConstructError,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TypeNotRegistered { key } => vec![
                format!("No type spec registered under '{}'", key),
                "Insert a TypeSpec into the catalog before constructing".into(),
            ],
            Self::RegistryLockError => vec![
                "The registry lock is poisoned".into(),
                "A writer panicked; rebuild the registry".into(),
            ],
            Self::IncompatibleService { ty, .. } => vec![
                format!("The registered value cannot fill '{}' slots", ty),
                "Register the value under the type it actually satisfies".into(),
            ],
            Self::ConstructionFailed { .. } => vec![
                "The constructor body raised an error; see the cause below".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeNotRegistered { .. } => ErrorCategory::NotFound,
            Self::RegistryLockError => ErrorCategory::Internal,
            Self::IncompatibleService { .. } => ErrorCategory::Validation,
            Self::ConstructionFailed { .. } => ErrorCategory::Internal,
        }
    }
}
