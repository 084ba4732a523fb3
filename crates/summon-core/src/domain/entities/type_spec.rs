//! The `TypeSpec` aggregate and its builder.
//!
//! A `TypeSpec` is the declarative description of one instantiable type:
//! its identity, the types it is assignable to, its enclosing type (for
//! non-static inner types), and the constructors the selector may choose
//! among. Constructor bodies are factory closures, so the set of candidates
//! is a fixed, enumerable property of the type — queried once per call,
//! never discovered reflectively.
//!
//! ## Invariants (enforced by `validate()`)
//!
//! 1. At least one constructor, or a default factory — never both
//! 2. No two constructors with identical formal signatures
//! 3. Every constructor of an inner type takes the enclosing type as its
//!    first formal parameter
//! 4. An inner type cannot use the default-factory path (it always needs
//!    the enclosing instance)
//!
//! ## Lifecycle
//!
//! 1. **Definition:** built via `TypeSpecBuilder`
//! 2. **Validation:** `build()` runs `validate()`; catalogs re-validate on
//!    insert
//! 3. **Selection:** a `ConstructorSelector` scores `constructors()`
//!    against explicit parameters
//! 4. **Construction:** the winning factory runs and the instantiator
//!    stamps the payload into an [`Instance`](super::instance::Instance)

use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::{
    error::DomainError,
    value::Value,
    value_objects::{ParamType, TypeKey},
};

/// Opaque error raised by a constructor body.
///
/// Preserved as the cause of a construction failure, never reclassified.
pub type ConstructError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A constructor body: receives the fully resolved argument list (enclosing
/// instance first for inner types) and returns the raw payload.
pub type ConstructFn =
    Arc<dyn Fn(&[Value]) -> Result<Box<dyn Any + Send + Sync>, ConstructError> + Send + Sync>;

// ============================================================================
// Constructor candidates
// ============================================================================

/// One declared constructor: an ordered formal parameter list plus the
/// factory that runs once the selector commits to this candidate.
#[derive(Clone)]
pub struct ConstructorSpec {
    params: Vec<ParamType>,
    factory: ConstructFn,
}

impl ConstructorSpec {
    pub fn new(
        params: Vec<ParamType>,
        factory: impl Fn(&[Value]) -> Result<Box<dyn Any + Send + Sync>, ConstructError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            params,
            factory: Arc::new(factory),
        }
    }

    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn factory(&self) -> &ConstructFn {
        &self.factory
    }

    /// Rendered formal signature: `(String, int)`. Used by duplicate
    /// detection and diagnostics.
    pub fn signature(&self) -> String {
        let rendered: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        format!("({})", rendered.join(", "))
    }
}

impl fmt::Debug for ConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Core TypeSpec aggregate
// ============================================================================

/// The central domain aggregate: everything the instantiator knows about
/// one constructible type.
#[derive(Clone)]
pub struct TypeSpec {
    /// Type identity (e.g. `Bean`)
    key: TypeKey,

    /// For non-static inner types: the enclosing type whose instance must
    /// be supplied as the first explicit parameter
    enclosing: Option<TypeKey>,

    /// Keys this type is assignable to, beyond its own
    conforms: Vec<TypeKey>,

    /// Declared constructor candidates, in declaration order
    constructors: Vec<ConstructorSpec>,

    /// Synthetic no-argument path, used only when no constructors are
    /// declared and the explicit parameter list is empty
    default_factory: Option<ConstructFn>,
}

impl TypeSpec {
    /// Start the builder pattern for fluent construction.
    ///
    /// # Example
    /// ```rust,ignore
    /// let spec = TypeSpec::builder("Bean")
    ///     .constructor(vec![ParamType::Str, ParamType::BoxedInt], |args| {
    ///         Ok(Box::new(Bean::from_args(args)))
    ///     })
    ///     .build()?;
    /// ```
    pub fn builder(key: impl Into<TypeKey>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(key.into())
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn enclosing(&self) -> Option<&TypeKey> {
        self.enclosing.as_ref()
    }

    /// Whether this type needs an enclosing instance to be constructed.
    pub fn is_inner(&self) -> bool {
        self.enclosing.is_some()
    }

    pub fn conforms(&self) -> &[TypeKey] {
        &self.conforms
    }

    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.constructors
    }

    pub fn default_factory(&self) -> Option<&ConstructFn> {
        self.default_factory.as_ref()
    }

    /// Validate all invariants.
    ///
    /// `build()` calls this; catalog adapters call it again at insert time
    /// so externally constructed specs cannot bypass it.
    pub fn validate(&self) -> Result<(), DomainError> {
        // Invariant 1: the type must be constructible somehow, one way only
        if self.constructors.is_empty() && self.default_factory.is_none() {
            return Err(DomainError::MissingRequiredField {
                field: "constructor",
            });
        }
        if !self.constructors.is_empty() && self.default_factory.is_some() {
            return Err(DomainError::InvalidTypeSpec(format!(
                "type {} declares both constructors and a default factory",
                self.key
            )));
        }

        // Invariant 2: no duplicate formal signatures (the selector could
        // never disambiguate them)
        let mut seen = HashSet::new();
        for ctor in &self.constructors {
            let signature = ctor.signature();
            if !seen.insert(signature.clone()) {
                return Err(DomainError::DuplicateConstructor {
                    type_name: self.key.to_string(),
                    signature,
                });
            }
        }

        // Invariants 3 and 4: inner types always lead with the enclosing
        // instance
        if let Some(enclosing) = &self.enclosing {
            if self.default_factory.is_some() {
                return Err(DomainError::InvalidTypeSpec(format!(
                    "inner type {} cannot use a default factory",
                    self.key
                )));
            }
            for ctor in &self.constructors {
                let leads_with_enclosing =
                    ctor.params.first() == Some(&ParamType::Object(enclosing.clone()));
                if !leads_with_enclosing {
                    return Err(DomainError::InvalidTypeSpec(format!(
                        "constructor {} of inner type {} must take {} as its first parameter",
                        ctor.signature(),
                        self.key,
                        enclosing
                    )));
                }
            }
        }

        Ok(())
    }
}

// Factory closures are opaque; render the declarative parts only.
impl fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSpec")
            .field("key", &self.key)
            .field("enclosing", &self.enclosing)
            .field("conforms", &self.conforms)
            .field("constructors", &self.constructors)
            .field("default_factory", &self.default_factory.is_some())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing type specs with validation.
///
/// All fields are optional during construction; `build()` enforces the
/// aggregate invariants in one place instead of scattering checks across
/// setters.
pub struct TypeSpecBuilder {
    key: TypeKey,
    enclosing: Option<TypeKey>,
    conforms: Vec<TypeKey>,
    constructors: Vec<ConstructorSpec>,
    default_factory: Option<ConstructFn>,
}

impl TypeSpecBuilder {
    fn new(key: TypeKey) -> Self {
        Self {
            key,
            enclosing: None,
            conforms: Vec::new(),
            constructors: Vec::new(),
            default_factory: None,
        }
    }

    /// Mark this type as a non-static inner type of `parent`.
    pub fn enclosing(mut self, parent: impl Into<TypeKey>) -> Self {
        self.enclosing = Some(parent.into());
        self
    }

    /// Declare that instances are also assignable to `key` (accumulates).
    pub fn conforms(mut self, key: impl Into<TypeKey>) -> Self {
        self.conforms.push(key.into());
        self
    }

    /// Declare a constructor candidate (accumulates, in call order).
    pub fn constructor(
        mut self,
        params: Vec<ParamType>,
        factory: impl Fn(&[Value]) -> Result<Box<dyn Any + Send + Sync>, ConstructError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.constructors.push(ConstructorSpec::new(params, factory));
        self
    }

    /// Declare the synthetic no-argument path for a type with no declared
    /// constructors.
    pub fn default_factory(
        mut self,
        factory: impl Fn() -> Result<Box<dyn Any + Send + Sync>, ConstructError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.default_factory = Some(Arc::new(move |_args: &[Value]| factory()));
        self
    }

    /// Consume builder and construct a validated `TypeSpec`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if no constructor and no default factory
    /// - `DuplicateConstructor` for repeated formal signatures
    /// - `InvalidTypeSpec` for inner-type violations
    pub fn build(self) -> Result<TypeSpec, DomainError> {
        let spec = TypeSpec {
            key: self.key,
            enclosing: self.enclosing,
            conforms: self.conforms,
            constructors: self.constructors,
            default_factory: self.default_factory,
        };
        spec.validate()?;
        Ok(spec)
    }
}
