// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for caller display)
/// - Actionable (provides suggestions)
///
/// The message wording is a contract: callers and tooling match on these
/// strings, parameter indices are 1-based, and type names are rendered with
/// the exact `ParamType` display names.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Selection Errors
    // ========================================================================
    #[error("no constructors of type {type_name} match parameters: {params}")]
    NoMatchingConstructor { type_name: String, params: String },

    #[error("multiple constructors of type {type_name} match parameters: {params}")]
    AmbiguousConstructor { type_name: String, params: String },

    #[error("unable to determine constructor argument #{index}: value {value} is not assignable to type {expected}")]
    ArgumentMismatch {
        index: usize,
        value: String,
        expected: String,
    },

    #[error("unable to determine constructor argument #{index}: null is not assignable to primitive type {expected}")]
    NullToPrimitive { index: usize, expected: String },

    #[error("unable to determine constructor argument #{index}: no value provided and no service of type {expected} available")]
    UnresolvedParameter { index: usize, expected: String },

    #[error("type {type_name} is a non-static inner type of {enclosing}: pass the enclosing instance as the first parameter")]
    MissingEnclosingInstance {
        type_name: String,
        enclosing: String,
    },

    // ========================================================================
    // Spec Validation Errors
    // ========================================================================
    #[error("invalid type spec: {0}")]
    InvalidTypeSpec(String),

    #[error("type {type_name} declares constructor {signature} more than once")]
    DuplicateConstructor {
        type_name: String,
        signature: String,
    },

    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoMatchingConstructor { type_name, .. } => vec![
                format!("Check the constructors declared for '{}'", type_name),
                "Explicit values bind formal parameters in order; a value that fits no slot rejects the candidate".into(),
            ],
            Self::AmbiguousConstructor { .. } => vec![
                "More than one constructor can accept these parameters".into(),
                "Pass more explicit values to pin down a single constructor".into(),
            ],
            Self::NullToPrimitive { expected, .. } => vec![
                "Primitive slots never accept null".into(),
                format!("Declare the parameter as the boxed counterpart of '{}' if null must be allowed", expected),
            ],
            Self::UnresolvedParameter { expected, .. } => vec![
                format!("Register a service of type '{}' or pass the value explicitly", expected),
            ],
            Self::MissingEnclosingInstance { enclosing, .. } => vec![
                format!("Construct an instance of '{}' first and pass it as the first parameter", enclosing),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for caller display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoMatchingConstructor { .. }
            | Self::AmbiguousConstructor { .. }
            | Self::ArgumentMismatch { .. }
            | Self::NullToPrimitive { .. }
            | Self::UnresolvedParameter { .. }
            | Self::MissingEnclosingInstance { .. } => ErrorCategory::Selection,
            Self::InvalidTypeSpec(_)
            | Self::DuplicateConstructor { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Validation,
}
