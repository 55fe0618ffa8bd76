//! # modelguard-core — Declarative Schema Rules & Compiled Validation
//!
//! Attach an ordered set of named constraints (required, length bounds,
//! numeric range, pattern, default, description, item-count bounds) to the
//! properties of a model type, once, at process startup. The same
//! declarations then serve two independent consumers: a documentation
//! generator that writes them onto schema nodes, and a request validator
//! that checks concrete instances and reports structured failures.
//!
//! ## Key Design Principles
//!
//! 1. **Rules and validators are decoupled.** A rule is a documentation
//!    fact; a validator is a runtime predicate. The registration step
//!    associates them — a binding may carry zero or one validator, and
//!    metadata rules never carry one.
//!
//! 2. **Resolve accessors once.** Property accessors are registered at
//!    declaration time and cached into the compiled validator; a
//!    `validate` call is pure computation over cached closures, with no
//!    lookup work per instance.
//!
//! 3. **Fail closed.** A predicate that observes a value of an unexpected
//!    kind reports a violation instead of passing silently; mistyped
//!    declarations surface in tests, not in production.
//!
//! 4. **Sealed registry.** Registration is a distinct startup phase:
//!    [`RegistryBuilder`] is consumed by `build()`, and the resulting
//!    [`SchemaRegistry`] is read-only and lock-free to share.
//!
//! ## Declaring a schema
//!
//! ```
//! use modelguard_core::{
//!     ModelSchema, Observe, SchemaDefinition, SchemaError, SchemaRegistry,
//! };
//!
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! struct PersonRules;
//!
//! impl SchemaDefinition for PersonRules {
//!     type Model = Person;
//!
//!     fn define(schema: &mut ModelSchema<Person>) -> Result<(), SchemaError> {
//!         schema
//!             .property("name", |p: &Person| p.name.observe())
//!             .required()
//!             .min_length(2)
//!             .max_length(50);
//!         schema
//!             .property("age", |p: &Person| p.age.observe())
//!             .range(0.0, 150.0)?;
//!         Ok(())
//!     }
//! }
//!
//! let registry = SchemaRegistry::builder().define::<PersonRules>()?.build();
//!
//! let person = Person { name: "John Doe".into(), age: 25 };
//! let result = registry.validator::<Person>().unwrap().validate(Some(&person));
//! assert!(result.is_valid());
//! # Ok::<(), SchemaError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Everything shared after startup is `Send + Sync` without locking.

pub mod compiled;
pub mod descriptor;
pub mod error;
pub mod literal;
pub mod node;
pub mod registry;
pub mod rule;
pub mod schema;
pub mod validator;
pub mod value;

pub use compiled::{CompiledValidator, Failure, ValidationResult, INSTANCE_PROPERTY};
pub use descriptor::{BindingRef, SchemaDescriptor};
pub use error::SchemaError;
pub use literal::literal;
pub use node::{PropertyNode, SchemaObject};
pub use registry::{ErasedSchema, RegistryBuilder, SchemaDefinition, SchemaRegistry};
pub use rule::{Bounds, CountBounds, Pattern, Rule};
pub use schema::{Accessor, ModelSchema, PropertyRuleBuilder};
pub use validator::Validator;
pub use value::{Observe, ObservedValue};
