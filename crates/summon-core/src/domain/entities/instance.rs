//! Constructed object handles with per-instance identity.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::TypeKey;

/// A constructed instance of a cataloged type.
///
/// ## Identity vs equality
///
/// The [`TypeKey`] identifies the *type* (`Bean`). The UUID identifies the
/// *instance* (this particular `Bean` built by this particular call). Two
/// instances of the same type are never equal; a clone of a handle is equal
/// to the handle it was cloned from and shares the same payload.
///
/// This distinction is what the enclosing-instance tests lean on: the value
/// stored by an inner type must be *the same object* that was passed in,
/// not merely an equal one.
///
/// ## Payload access
///
/// The payload is the raw value returned by the constructor factory.
/// Callers recover it with [`Instance::downcast_ref`].
#[derive(Clone)]
pub struct Instance {
    /// Unique instance identifier (never nil except in error states)
    uuid: Uuid,
    /// The type this instance was constructed as
    key: TypeKey,
    /// Keys this instance is assignable to, stamped from its spec
    conforms: Arc<[TypeKey]>,
    /// The constructed value itself
    payload: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap a freshly constructed payload with a random instance id.
    pub fn new(key: TypeKey, conforms: Vec<TypeKey>, payload: Box<dyn Any + Send + Sync>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            key,
            conforms: conforms.into(),
            payload: Arc::from(payload),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Keys this instance may stand in for, beyond its own.
    pub fn conforms(&self) -> &[TypeKey] {
        &self.conforms
    }

    /// Whether this instance is assignable to a slot declared as `key`.
    pub fn conforms_to(&self, key: &TypeKey) -> bool {
        self.key == *key || self.conforms.contains(key)
    }

    /// Borrow the payload as a concrete type, if it is one.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Whether the payload is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.payload.is::<T>()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Instance {}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("uuid", &self.uuid)
            .field("key", &self.key)
            .field("conforms", &self.conforms)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Instance {
    /// Rendered as `Key#<uuid prefix>` in diagnostics and parameter lists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.uuid.simple().to_string();
        write!(f, "{}#{}", self.key, &id[..8])
    }
}
