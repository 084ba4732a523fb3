//! Argument planning: matching explicit values onto one candidate's
//! formal parameters.
//!
//! This is the pure half of constructor selection. Given one candidate's
//! formal list and the caller's explicit values, `plan_arguments` either
//! produces an [`ArgumentPlan`] — which slot takes which explicit value,
//! which slots are left for service resolution — or rejects the candidate
//! with a structured reason. Policy (which candidate wins, how rejections
//! become diagnostics) lives in the application layer's selector.
//!
//! ## The walk
//!
//! Formals are visited left to right with a cursor over the unconsumed
//! explicit values. At each formal, with `e` values and `f` formals
//! remaining, the position is *forced* when `e == f`: every remaining
//! formal must take an explicit value, so there is no slack left to defer
//! a slot to the service lookup.
//!
//! - no values remain → service slot
//! - next value is non-null and assignable → bind it
//! - next value is null → bind unless the formal is primitive; a forced
//!   null against a primitive formal rejects the candidate
//! - otherwise → reject if forced, else service slot
//!
//! The `e <= f` invariant (established by the arity check, preserved
//! because forced positions always bind or reject) guarantees the walk
//! ends with every explicit value consumed. Service availability is never
//! consulted here: a candidate that is shape-viable stays viable even
//! against an empty lookup, which is what makes under-supplied calls
//! ambiguous rather than mismatched when several candidates could apply.

use crate::domain::{capabilities, value::Value, value_objects::ParamType};

/// Where one resolved argument slot gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    /// The explicit value at this index in the caller's list.
    Explicit(usize),
    /// Resolved from the service lookup against the winning candidate.
    Service,
}

/// A viable mapping of explicit values onto one candidate's formals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentPlan {
    slots: Vec<SlotSource>,
}

impl ArgumentPlan {
    pub fn slots(&self) -> &[SlotSource] {
        &self.slots
    }

    /// How many slots will be filled from the service lookup.
    pub fn service_slot_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, SlotSource::Service))
            .count()
    }
}

/// Why a candidate cannot accept the explicit values.
///
/// Slot and value indices are 0-based here; the selector converts to the
/// 1-based indices the diagnostic contract requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRejection {
    /// More explicit values than formal parameters.
    TooManyValues { supplied: usize, arity: usize },
    /// A forced position where the value is not assignable to the formal.
    Mismatch { slot: usize, value_index: usize },
    /// A forced null against a primitive formal.
    NullToPrimitive { slot: usize },
}

/// Match `explicit` onto `formals`, producing a plan or a rejection.
pub fn plan_arguments(
    formals: &[ParamType],
    explicit: &[Value],
) -> Result<ArgumentPlan, PlanRejection> {
    if explicit.len() > formals.len() {
        return Err(PlanRejection::TooManyValues {
            supplied: explicit.len(),
            arity: formals.len(),
        });
    }

    let mut slots = Vec::with_capacity(formals.len());
    let mut next = 0;

    for (i, formal) in formals.iter().enumerate() {
        let values_remaining = explicit.len() - next;
        if values_remaining == 0 {
            slots.push(SlotSource::Service);
            continue;
        }
        let forced = values_remaining == formals.len() - i;

        let value = &explicit[next];
        if value.is_null() {
            if formal.is_primitive() {
                if forced {
                    return Err(PlanRejection::NullToPrimitive { slot: i });
                }
                slots.push(SlotSource::Service);
            } else {
                slots.push(SlotSource::Explicit(next));
                next += 1;
            }
        } else if capabilities::value_assignable(value, formal) {
            slots.push(SlotSource::Explicit(next));
            next += 1;
        } else if forced {
            return Err(PlanRejection::Mismatch {
                slot: i,
                value_index: next,
            });
        } else {
            slots.push(SlotSource::Service);
        }
    }

    debug_assert_eq!(next, explicit.len(), "walk must consume every explicit value");
    Ok(ArgumentPlan { slots })
}
