//! Unified error handling for Summon Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, plus the single outer instantiation classification
//! every `new_instance` failure is surfaced as.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Summon Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// summon-core, providing a unified interface for error handling.
#[derive(Debug, Error)]
pub enum SummonError {
    /// Errors from the domain layer (selection and spec validation).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// The outer classification for every failed `new_instance` call. The
    /// specific cause rides along as the source.
    #[error("could not create instance of type {type_name}")]
    Instantiation {
        type_name: String,
        #[source]
        cause: Box<SummonError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SummonError {
    /// Wrap a cause in the outer instantiation classification.
    pub fn instantiation(type_name: impl Into<String>, cause: impl Into<SummonError>) -> Self {
        Self::Instantiation {
            type_name: type_name.into(),
            cause: Box::new(cause.into()),
        }
    }

    /// The underlying domain error, if this failure has one, looking
    /// through the instantiation wrapper.
    pub fn domain_cause(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Instantiation { cause, .. } => cause.domain_cause(),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Instantiation { cause, .. } => cause.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Summon".into(),
                "Please report this issue at: https://github.com/cosecruz/summon/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Selection => ErrorCategory::Selection,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Instantiation { cause, .. } => cause.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type SummonResult<T> = Result<T, SummonError>;
