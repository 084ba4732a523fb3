//! Assignability rules over the closed value / parameter-type kinds.
//!
//! All coercion and compatibility logic lives here; entities and the
//! selection walk delegate instead of matching on kinds themselves. The
//! rules form a total predicate over `(Value, ParamType)`:
//!
//! | Value        | `int` | `boolean` | `Integer` | `Boolean` | `String` | `Object(k)`        |
//! |--------------|-------|-----------|-----------|-----------|----------|--------------------|
//! | `Null`       | no    | no        | yes       | yes       | yes      | yes                |
//! | `Int(_)`     | yes   | no        | yes       | no        | no       | no                 |
//! | `Bool(_)`    | no    | yes       | no        | yes       | no       | no                 |
//! | `Str(_)`     | no    | no        | no        | no        | yes      | no                 |
//! | `Object(o)`  | no    | no        | no        | no        | no       | `o` conforms to `k`|
//!
//! Null against a primitive slot is the one rejection that gets its own
//! diagnostic (`NullToPrimitive`) rather than a plain mismatch; callers
//! check `ParamType::is_primitive` alongside this predicate for that.

use crate::domain::{
    value::Value,
    value_objects::{ParamType, TypeKey},
};

/// Whether `value` may fill a slot declared as `target`.
///
/// Primitive slots accept the corresponding bare kind (an `Int` value
/// satisfies both `int` and `Integer` — box/unbox alignment is inherent in
/// the closed kinds). Object assignability follows the conforms set
/// stamped on the instance at construction.
pub fn value_assignable(value: &Value, target: &ParamType) -> bool {
    match (value, target) {
        (Value::Null, target) => !target.is_primitive(),
        (Value::Int(_), ParamType::Int | ParamType::BoxedInt) => true,
        (Value::Bool(_), ParamType::Bool | ParamType::BoxedBool) => true,
        (Value::Str(_), ParamType::Str) => true,
        (Value::Object(instance), ParamType::Object(key)) => instance.conforms_to(key),
        _ => false,
    }
}

/// Whether `value` may serve as the enclosing instance of an inner type
/// whose parent is `enclosing`.
///
/// Stricter than plain assignability: null never stands in for the
/// enclosing instance.
pub fn enclosing_assignable(value: &Value, enclosing: &TypeKey) -> bool {
    !value.is_null() && value_assignable(value, &ParamType::Object(enclosing.clone()))
}
