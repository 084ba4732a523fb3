// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Summon.
//!
//! This module contains pure construction logic with ZERO external I/O.
//! Type catalogs and service lookups are reached via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Specs and values are never mutated by a call
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod selection;
pub mod value;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    instance::Instance,
    type_spec::{ConstructError, ConstructFn, ConstructorSpec, TypeSpec, TypeSpecBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use selection::{ArgumentPlan, PlanRejection, SlotSource, plan_arguments};
pub use value::{Value, render_param_list};
pub use value_objects::{ParamType, TypeKey};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn leaf_instance(key: &str) -> Instance {
        Instance::new(TypeKey::new(key), Vec::new(), Box::new(()))
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn param_type_parses_correctly() {
        assert_eq!(ParamType::from_str("int").unwrap(), ParamType::Int);
        assert_eq!(ParamType::from_str("boolean").unwrap(), ParamType::Bool);
        assert_eq!(ParamType::from_str("Integer").unwrap(), ParamType::BoxedInt);
        assert_eq!(ParamType::from_str("Boolean").unwrap(), ParamType::BoxedBool);
        assert_eq!(ParamType::from_str("String").unwrap(), ParamType::Str);
        assert_eq!(
            ParamType::from_str("Bean").unwrap(),
            ParamType::object("Bean")
        );
        assert!(ParamType::from_str("").is_err());
    }

    #[test]
    fn param_type_display_is_the_diagnostic_contract() {
        assert_eq!(ParamType::Int.to_string(), "int");
        assert_eq!(ParamType::Bool.to_string(), "boolean");
        assert_eq!(ParamType::BoxedInt.to_string(), "Integer");
        assert_eq!(ParamType::BoxedBool.to_string(), "Boolean");
        assert_eq!(ParamType::Str.to_string(), "String");
        assert_eq!(ParamType::object("Bean").to_string(), "Bean");
    }

    #[test]
    fn param_type_serde_round_trip() {
        for ty in [
            ParamType::Int,
            ParamType::Bool,
            ParamType::BoxedInt,
            ParamType::BoxedBool,
            ParamType::Str,
            ParamType::object("Bean"),
        ] {
            let json = serde_json::to_string(&ty).unwrap();
            let back: ParamType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn param_type_primitiveness() {
        assert!(ParamType::Int.is_primitive());
        assert!(ParamType::Bool.is_primitive());
        assert!(!ParamType::BoxedInt.is_primitive());
        assert!(!ParamType::BoxedBool.is_primitive());
        assert!(!ParamType::Str.is_primitive());
        assert!(!ParamType::object("Bean").is_primitive());
    }

    #[test]
    #[should_panic]
    fn type_key_rejects_empty_name() {
        TypeKey::new("");
    }

    // ========================================================================
    // Value Tests
    // ========================================================================

    #[test]
    fn value_rendering() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Int(12).to_string(), "12");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("string").to_string(), "string");
    }

    #[test]
    fn param_list_rendering() {
        assert_eq!(
            render_param_list(&[Value::from("a"), Value::Int(12), Value::Null]),
            "[a, 12, null]"
        );
        assert_eq!(render_param_list(&[]), "[]");
    }

    #[test]
    fn value_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Null.is_null());
        assert_eq!(Value::from("x").as_int(), None);
    }

    #[test]
    fn object_values_compare_by_identity() {
        let a = leaf_instance("Bean");
        let b = leaf_instance("Bean");
        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    // ========================================================================
    // Assignability Tests
    // ========================================================================

    #[test]
    fn null_is_assignable_to_references_only() {
        assert!(!capabilities::value_assignable(&Value::Null, &ParamType::Int));
        assert!(!capabilities::value_assignable(&Value::Null, &ParamType::Bool));
        assert!(capabilities::value_assignable(&Value::Null, &ParamType::BoxedInt));
        assert!(capabilities::value_assignable(&Value::Null, &ParamType::Str));
        assert!(capabilities::value_assignable(
            &Value::Null,
            &ParamType::object("Bean")
        ));
    }

    #[test]
    fn primitives_accept_their_boxed_counterpart() {
        assert!(capabilities::value_assignable(&Value::Int(1), &ParamType::Int));
        assert!(capabilities::value_assignable(&Value::Int(1), &ParamType::BoxedInt));
        assert!(capabilities::value_assignable(&Value::Bool(true), &ParamType::Bool));
        assert!(capabilities::value_assignable(&Value::Bool(true), &ParamType::BoxedBool));
        assert!(!capabilities::value_assignable(&Value::Int(1), &ParamType::Bool));
        assert!(!capabilities::value_assignable(&Value::Bool(true), &ParamType::BoxedInt));
    }

    #[test]
    fn strings_only_fill_string_slots() {
        assert!(capabilities::value_assignable(&Value::from("a"), &ParamType::Str));
        assert!(!capabilities::value_assignable(&Value::from("a"), &ParamType::BoxedInt));
        assert!(!capabilities::value_assignable(
            &Value::from("a"),
            &ParamType::object("Bean")
        ));
    }

    #[test]
    fn object_assignability_follows_conforms_set() {
        let exact = leaf_instance("Bean");
        assert!(capabilities::value_assignable(
            &Value::Object(exact.clone()),
            &ParamType::object("Bean")
        ));
        assert!(!capabilities::value_assignable(
            &Value::Object(exact),
            &ParamType::object("Other")
        ));

        let conforming = Instance::new(
            TypeKey::new("PostgresPool"),
            vec![TypeKey::new("Database")],
            Box::new(()),
        );
        assert!(capabilities::value_assignable(
            &Value::Object(conforming),
            &ParamType::object("Database")
        ));
    }

    #[test]
    fn enclosing_assignability_rejects_null() {
        let parent = leaf_instance("Outer");
        assert!(capabilities::enclosing_assignable(
            &Value::Object(parent),
            &TypeKey::new("Outer")
        ));
        assert!(!capabilities::enclosing_assignable(
            &Value::Null,
            &TypeKey::new("Outer")
        ));
        assert!(!capabilities::enclosing_assignable(
            &Value::Int(1),
            &TypeKey::new("Outer")
        ));
    }

    // ========================================================================
    // Instance Tests
    // ========================================================================

    #[test]
    fn instance_identity_and_downcast() {
        let instance = Instance::new(TypeKey::new("Bean"), Vec::new(), Box::new(41_i64));
        let clone = instance.clone();

        assert_eq!(instance, clone);
        assert_eq!(instance.uuid(), clone.uuid());
        assert!(instance.is::<i64>());
        assert_eq!(instance.downcast_ref::<i64>(), Some(&41));
        assert_eq!(instance.downcast_ref::<String>(), None);
    }

    #[test]
    fn instance_display_names_the_type() {
        let instance = leaf_instance("Bean");
        assert!(instance.to_string().starts_with("Bean#"));
    }

    // ========================================================================
    // TypeSpec Builder Tests
    // ========================================================================

    #[test]
    fn type_spec_builder_success() {
        let spec = TypeSpec::builder("Bean")
            .constructor(vec![ParamType::Str, ParamType::BoxedInt], |_| {
                Ok(Box::new(()))
            })
            .build()
            .unwrap();

        assert_eq!(spec.key().as_str(), "Bean");
        assert_eq!(spec.constructors().len(), 1);
        assert_eq!(spec.constructors()[0].signature(), "(String, Integer)");
        assert!(!spec.is_inner());
    }

    #[test]
    fn type_spec_requires_a_construction_path() {
        let result = TypeSpec::builder("Bean").build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::MissingRequiredField {
                field: "constructor"
            }
        );
    }

    #[test]
    fn type_spec_rejects_constructor_and_default_factory_together() {
        let result = TypeSpec::builder("Bean")
            .constructor(vec![ParamType::Str], |_| Ok(Box::new(())))
            .default_factory(|| Ok(Box::new(())))
            .build();
        assert!(matches!(result, Err(DomainError::InvalidTypeSpec(_))));
    }

    #[test]
    fn type_spec_rejects_duplicate_signatures() {
        let result = TypeSpec::builder("Bean")
            .constructor(vec![ParamType::Str], |_| Ok(Box::new(())))
            .constructor(vec![ParamType::Str], |_| Ok(Box::new(())))
            .build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateConstructor {
                type_name: "Bean".into(),
                signature: "(String)".into(),
            }
        );
    }

    #[test]
    fn inner_type_constructors_must_lead_with_the_enclosing_type() {
        let result = TypeSpec::builder("Inner")
            .enclosing("Outer")
            .constructor(vec![ParamType::Str], |_| Ok(Box::new(())))
            .build();
        assert!(matches!(result, Err(DomainError::InvalidTypeSpec(_))));

        let ok = TypeSpec::builder("Inner")
            .enclosing("Outer")
            .constructor(vec![ParamType::object("Outer"), ParamType::Str], |_| {
                Ok(Box::new(()))
            })
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn inner_type_cannot_use_a_default_factory() {
        let result = TypeSpec::builder("Inner")
            .enclosing("Outer")
            .default_factory(|| Ok(Box::new(())))
            .build();
        assert!(matches!(result, Err(DomainError::InvalidTypeSpec(_))));
    }

    #[test]
    fn validator_delegates_to_spec() {
        let spec = TypeSpec::builder("Bean")
            .default_factory(|| Ok(Box::new(())))
            .build()
            .unwrap();
        assert!(DomainValidator::validate_type_spec(&spec).is_ok());
    }

    // ========================================================================
    // Argument Planning Tests
    // ========================================================================

    #[test]
    fn plan_binds_all_explicit_values_in_order() {
        let plan = plan_arguments(
            &[ParamType::Str, ParamType::BoxedInt],
            &[Value::from("string"), Value::Int(12)],
        )
        .unwrap();
        assert_eq!(
            plan.slots(),
            &[SlotSource::Explicit(0), SlotSource::Explicit(1)]
        );
        assert_eq!(plan.service_slot_count(), 0);
    }

    #[test]
    fn plan_defers_leading_slot_to_services() {
        // 12 cannot fill the String slot, so the slack position is left for
        // the lookup and 12 binds the Integer slot.
        let plan = plan_arguments(&[ParamType::Str, ParamType::BoxedInt], &[Value::Int(12)]).unwrap();
        assert_eq!(plan.slots(), &[SlotSource::Service, SlotSource::Explicit(0)]);
    }

    #[test]
    fn plan_defers_trailing_slot_to_services() {
        let plan = plan_arguments(&[ParamType::Str, ParamType::BoxedInt], &[Value::from("a")]).unwrap();
        assert_eq!(plan.slots(), &[SlotSource::Explicit(0), SlotSource::Service]);
    }

    #[test]
    fn plan_rejects_forced_mismatch() {
        let rejection = plan_arguments(
            &[ParamType::Str, ParamType::BoxedInt],
            &[Value::from("a"), Value::from("b")],
        )
        .unwrap_err();
        assert_eq!(
            rejection,
            PlanRejection::Mismatch {
                slot: 1,
                value_index: 1
            }
        );
    }

    #[test]
    fn plan_rejects_forced_null_against_primitive() {
        let rejection = plan_arguments(
            &[ParamType::Int, ParamType::Bool],
            &[Value::Int(12), Value::Null],
        )
        .unwrap_err();
        assert_eq!(rejection, PlanRejection::NullToPrimitive { slot: 1 });
    }

    #[test]
    fn plan_null_with_slack_skips_primitive_slots() {
        // Null cannot fill the leading int slot, so it rides to the boxed
        // slot and the primitive is left for the lookup.
        let plan = plan_arguments(&[ParamType::Int, ParamType::BoxedBool], &[Value::Null]).unwrap();
        assert_eq!(plan.slots(), &[SlotSource::Service, SlotSource::Explicit(0)]);
    }

    #[test]
    fn plan_binds_null_to_first_reference_slot() {
        let plan = plan_arguments(&[ParamType::Str, ParamType::BoxedInt], &[Value::Null]).unwrap();
        assert_eq!(plan.slots(), &[SlotSource::Explicit(0), SlotSource::Service]);
    }

    #[test]
    fn plan_rejects_oversupplied_calls() {
        let rejection =
            plan_arguments(&[ParamType::Str], &[Value::from("a"), Value::from("b")]).unwrap_err();
        assert_eq!(
            rejection,
            PlanRejection::TooManyValues {
                supplied: 2,
                arity: 1
            }
        );
    }

    #[test]
    fn plan_for_empty_call_is_all_service_slots() {
        let plan = plan_arguments(&[ParamType::Str, ParamType::object("Db")], &[]).unwrap();
        assert_eq!(plan.slots(), &[SlotSource::Service, SlotSource::Service]);
        assert_eq!(plan.service_slot_count(), 2);
    }
}
