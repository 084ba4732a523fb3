//! Constructor selection strategies.
//!
//! A [`ConstructorSelector`] turns a type spec plus the caller's explicit
//! values into exactly one resolved call — factory and full argument list
//! — or a precise `DomainError`. The shipped strategy is lenient: explicit
//! values bind formals greedily (see `domain::selection`), ambiguity is
//! always fatal, and service resolution runs only against the committed
//! winner, once per unresolved slot.

use std::fmt;

use tracing::debug;

use crate::{
    application::ports::ServiceLookup,
    domain::{
        ConstructFn, ConstructorSpec, DomainError, PlanRejection, SlotSource, TypeSpec, Value,
        capabilities, plan_arguments, render_param_list,
        selection::ArgumentPlan,
    },
};

/// The outcome of selection: the winning factory and its fully resolved
/// argument list, ready to invoke.
pub struct ResolvedCall {
    pub factory: ConstructFn,
    pub arguments: Vec<Value>,
}

impl fmt::Debug for ResolvedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCall")
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Strategy port for picking one constructor among a type's candidates.
///
/// The instantiator holds a selector as immutable configuration; custom
/// strategies (e.g. a strict positional selector) slot in through
/// `Instantiator::with_selector`.
pub trait ConstructorSelector: Send + Sync {
    /// Pick exactly one constructor and resolve its argument list.
    fn select(
        &self,
        spec: &TypeSpec,
        explicit: &[Value],
        services: &dyn ServiceLookup,
    ) -> Result<ResolvedCall, DomainError>;
}

/// The default, lenient strategy.
///
/// ## Decision by candidate count
///
/// | Candidates | Outcome                                                  |
/// |------------|----------------------------------------------------------|
/// | 0          | default factory for empty calls, else no-match           |
/// | 1          | slot-precise diagnostics (mismatch / null-to-primitive)  |
/// | n > 1      | 0 viable → no-match, 1 → commit, >1 → ambiguous          |
///
/// There is deliberately no specificity tie-break: more than one viable
/// candidate always fails, so an unintended overload is never picked
/// silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientConstructorSelector;

impl ConstructorSelector for LenientConstructorSelector {
    fn select(
        &self,
        spec: &TypeSpec,
        explicit: &[Value],
        services: &dyn ServiceLookup,
    ) -> Result<ResolvedCall, DomainError> {
        // Inner types: the enclosing-instance check is type-level and runs
        // before any candidate is scored.
        if let Some(enclosing) = spec.enclosing() {
            let supplied = explicit
                .first()
                .is_some_and(|v| capabilities::enclosing_assignable(v, enclosing));
            if !supplied {
                return Err(DomainError::MissingEnclosingInstance {
                    type_name: spec.key().to_string(),
                    enclosing: enclosing.to_string(),
                });
            }
        }

        let candidates = spec.constructors();

        if candidates.is_empty() {
            if explicit.is_empty() {
                if let Some(factory) = spec.default_factory() {
                    debug!(target_type = %spec.key(), "synthetic no-argument construction");
                    return Ok(ResolvedCall {
                        factory: factory.clone(),
                        arguments: Vec::new(),
                    });
                }
            }
            return Err(no_match(spec, explicit));
        }

        // A single declared constructor reports slot-precise diagnostics;
        // with several, failures aggregate to no-match/ambiguous.
        if let [only] = candidates {
            let plan = plan_arguments(only.params(), explicit).map_err(|rejection| {
                match rejection {
                    PlanRejection::TooManyValues { .. } => no_match(spec, explicit),
                    PlanRejection::Mismatch { slot, value_index } => {
                        DomainError::ArgumentMismatch {
                            index: slot + 1,
                            value: explicit[value_index].to_string(),
                            expected: only.params()[slot].to_string(),
                        }
                    }
                    PlanRejection::NullToPrimitive { slot } => DomainError::NullToPrimitive {
                        index: slot + 1,
                        expected: only.params()[slot].to_string(),
                    },
                }
            })?;
            return materialize(only, &plan, explicit, services);
        }

        let mut viable = Vec::new();
        for candidate in candidates {
            if let Ok(plan) = plan_arguments(candidate.params(), explicit) {
                viable.push((candidate, plan));
            }
        }

        match viable.as_slice() {
            [] => Err(no_match(spec, explicit)),
            [(winner, plan)] => {
                debug!(
                    target_type = %spec.key(),
                    signature = %winner.signature(),
                    "constructor selected"
                );
                materialize(*winner, plan, explicit, services)
            }
            _ => Err(DomainError::AmbiguousConstructor {
                type_name: spec.key().to_string(),
                params: render_param_list(explicit),
            }),
        }
    }
}

fn no_match(spec: &TypeSpec, explicit: &[Value]) -> DomainError {
    DomainError::NoMatchingConstructor {
        type_name: spec.key().to_string(),
        params: render_param_list(explicit),
    }
}

/// Fill the committed candidate's argument list: explicit slots pass
/// through, service slots hit the lookup exactly once each.
fn materialize(
    ctor: &ConstructorSpec,
    plan: &ArgumentPlan,
    explicit: &[Value],
    services: &dyn ServiceLookup,
) -> Result<ResolvedCall, DomainError> {
    let mut arguments = Vec::with_capacity(ctor.arity());

    for (i, (slot, formal)) in plan.slots().iter().zip(ctor.params()).enumerate() {
        let index = i + 1;
        match slot {
            SlotSource::Explicit(value_index) => {
                let value = explicit[*value_index].clone();
                // Planning rejects forced nulls already; a plan produced by
                // a custom strategy must not smuggle null into a primitive.
                if value.is_null() && formal.is_primitive() {
                    return Err(DomainError::NullToPrimitive {
                        index,
                        expected: formal.to_string(),
                    });
                }
                arguments.push(value);
            }
            SlotSource::Service => match services.find(formal) {
                Some(value) if !value.is_null() => {
                    if !capabilities::value_assignable(&value, formal) {
                        return Err(DomainError::ArgumentMismatch {
                            index,
                            value: value.to_string(),
                            expected: formal.to_string(),
                        });
                    }
                    arguments.push(value);
                }
                _ if formal.is_primitive() => {
                    return Err(DomainError::NullToPrimitive {
                        index,
                        expected: formal.to_string(),
                    });
                }
                _ => {
                    return Err(DomainError::UnresolvedParameter {
                        index,
                        expected: formal.to_string(),
                    });
                }
            },
        }
    }

    Ok(ResolvedCall {
        factory: ctor.factory().clone(),
        arguments,
    })
}
