//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "construct an instance of this type from these
//! parameters".

pub mod instantiator;
pub mod selector;

pub use instantiator::Instantiator;
pub use selector::{ConstructorSelector, LenientConstructorSelector, ResolvedCall};
