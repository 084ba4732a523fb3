pub mod memory;

pub use memory::{EmptyServiceLookup, InMemoryServiceRegistry};
