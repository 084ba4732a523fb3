pub mod instance;
pub mod type_spec;

pub use crate::domain::DomainError;
pub use instance::Instance;
pub use type_spec::{ConstructError, ConstructFn, ConstructorSpec, TypeSpec, TypeSpecBuilder};
