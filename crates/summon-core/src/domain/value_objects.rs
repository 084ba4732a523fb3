//! Domain value objects: TypeKey and ParamType.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. They hold
//! NO assignability logic. All coercion and compatibility rules live in
//! `capabilities.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Parameter Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `Display` arm and the `FromStr` arm here
//! 3. Add an assignability entry in `capabilities.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TypeKey ──────────────────────────────────────────────────────────────────

/// Identity of a registered type.
///
/// ## Format
///
/// A plain, case-sensitive name (e.g. `Bean`, `Database`). The key is how
/// callers ask the instantiator for an instance, how specs are stored in a
/// catalog, and how object parameter types are declared.
///
/// ## Constraints
///
/// - Name cannot be empty (enforced by `assert!` in the constructor)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeKey(String);

impl TypeKey {
    /// Create a new type key.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty. This is a programming error (an
    /// unnameable type), not a runtime error.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Type key cannot be empty");
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── ParamType ────────────────────────────────────────────────────────────────

/// The declared type of one constructor parameter slot.
///
/// A closed set of semantic kinds: primitive slots reject null, boxed and
/// reference slots accept it. The `Display` names below are part of the
/// diagnostic contract — error messages quote them verbatim.
///
/// | Variant      | Rendered   | Null allowed |
/// |--------------|------------|--------------|
/// | `Int`        | `int`      | no           |
/// | `Bool`       | `boolean`  | no           |
/// | `BoxedInt`   | `Integer`  | yes          |
/// | `BoxedBool`  | `Boolean`  | yes          |
/// | `Str`        | `String`   | yes          |
/// | `Object(k)`  | the key    | yes          |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "boolean")]
    Bool,
    #[serde(rename = "Integer")]
    BoxedInt,
    #[serde(rename = "Boolean")]
    BoxedBool,
    #[serde(rename = "String")]
    Str,
    #[serde(rename = "object")]
    Object(TypeKey),
}

impl ParamType {
    /// Whether this slot is primitive (never accepts null, from explicit
    /// input or from a service resolution).
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Int | Self::Bool)
    }

    /// Convenience constructor for object-typed slots.
    pub fn object(key: impl Into<TypeKey>) -> Self {
        Self::Object(key.into())
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Bool => f.write_str("boolean"),
            Self::BoxedInt => f.write_str("Integer"),
            Self::BoxedBool => f.write_str("Boolean"),
            Self::Str => f.write_str("String"),
            Self::Object(key) => write!(f, "{key}"),
        }
    }
}

impl FromStr for ParamType {
    type Err = DomainError;

    /// Parse a parameter type from its rendered name.
    ///
    /// Unrecognised non-empty names parse as `Object` keys, so manifest
    /// entries can reference cataloged types without extra syntax.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(DomainError::InvalidTypeSpec(
                "parameter type cannot be empty".into(),
            )),
            "int" => Ok(Self::Int),
            "boolean" => Ok(Self::Bool),
            "Integer" => Ok(Self::BoxedInt),
            "Boolean" => Ok(Self::BoxedBool),
            "String" => Ok(Self::Str),
            other => Ok(Self::Object(TypeKey::new(other))),
        }
    }
}
