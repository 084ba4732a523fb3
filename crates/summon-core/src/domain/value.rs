//! Dynamic parameter values.
//!
//! A [`Value`] is what callers pass to `new_instance`, what service lookups
//! return, and what constructor factories receive. The set of kinds is
//! closed on purpose: assignability is a total function over
//! `(Value, ParamType)` pairs (see `capabilities.rs`), not an open-ended
//! reflective subtype walk.

use std::fmt;

use crate::domain::entities::instance::Instance;

/// A dynamically typed parameter value.
#[derive(Debug, Clone)]
pub enum Value {
    /// The null reference. Assignable to any non-primitive slot.
    Null,
    /// Integer; satisfies both the primitive `int` and boxed `Integer` slot.
    Int(i64),
    /// Boolean; satisfies both `boolean` and `Boolean`.
    Bool(bool),
    Str(String),
    /// An instance of a cataloged type.
    Object(Instance),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Instance> {
        match self {
            Self::Object(instance) => Some(instance),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The diagnostic rendering. Strings are rendered bare (no quotes) so a
    /// rejected value reads the way the caller wrote it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::Object(instance) => write!(f, "{instance}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Object(instance)
    }
}

/// Render an explicit parameter list for a diagnostic: `[a, 12, null]`.
///
/// Every no-match and ambiguity message embeds this, so the rendering must
/// be stable across repeated calls with the same values.
pub fn render_param_list(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
