use crate::domain::{entities::TypeSpec, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_type_spec(spec: &TypeSpec) -> Result<(), DomainError> {
        spec.validate()
    }
}
