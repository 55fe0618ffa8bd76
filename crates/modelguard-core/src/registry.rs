//! # Schema Registry — Process-Wide, Sealed After Startup
//!
//! The registry is the join point for the two consumers of declared
//! schemas: the documentation generator and the request validator. It is
//! populated once at startup from the full set of schema definitions and
//! read-only afterwards.
//!
//! ## Two-Phase Lifecycle
//!
//! Registration and serving are separate phases with a single transition:
//! [`RegistryBuilder`] is the open phase, and [`RegistryBuilder::build`]
//! *consumes* it to produce the sealed [`SchemaRegistry`]. Registering
//! after the seal is unrepresentable rather than checked at runtime.
//!
//! Compiled validators are built eagerly at registration, so the
//! per-type compilation cost is paid at startup, not on first request.
//!
//! ## Lookups
//!
//! `schema::<T>()` and `validator::<T>()` return `None` for unregistered
//! types. That is not an error: both consumers treat it as "nothing to
//! annotate, nothing to validate."

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::compiled::CompiledValidator;
use crate::error::SchemaError;
use crate::node::SchemaObject;
use crate::schema::ModelSchema;

/// A self-registering schema definition for one model type.
///
/// Implementations declare their rules in `define`; the registry builder
/// instantiates the schema and registers it under `Model`.
pub trait SchemaDefinition {
    /// The model type the schema describes.
    type Model: Send + Sync + 'static;

    /// Declare the model's rules.
    fn define(schema: &mut ModelSchema<Self::Model>) -> Result<(), SchemaError>;
}

/// Type-erased view of a registered schema, for consumers that walk every
/// registration (the documentation generator) without knowing the model
/// types.
pub trait ErasedSchema: Send + Sync {
    /// The model's full type name.
    fn type_name(&self) -> &'static str;

    /// Apply every rule to `object`, in declaration order.
    fn apply_to(&self, object: &mut SchemaObject);
}

struct ErasedEntry<T> {
    type_name: &'static str,
    schema: Arc<ModelSchema<T>>,
}

impl<T: Send + Sync + 'static> ErasedSchema for ErasedEntry<T> {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn apply_to(&self, object: &mut SchemaObject) {
        self.schema.apply_to(object);
    }
}

struct RegistryEntry {
    type_id: TypeId,
    schema: Arc<dyn Any + Send + Sync>,
    validator: Arc<dyn Any + Send + Sync>,
    erased: Arc<dyn ErasedSchema>,
}

/// The open, registering phase of the registry lifecycle.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a schema definition and register the result.
    pub fn define<D: SchemaDefinition>(self) -> Result<Self, SchemaError> {
        let mut schema = ModelSchema::new();
        D::define(&mut schema)?;
        Ok(self.add_schema(schema))
    }

    /// Register a finished schema, eagerly compiling its validator.
    ///
    /// Registering the same model type again replaces the earlier entry.
    pub fn add_schema<T: Send + Sync + 'static>(mut self, schema: ModelSchema<T>) -> Self {
        let validator = CompiledValidator::compile(&schema.descriptor());
        let schema = Arc::new(schema);
        let entry = RegistryEntry {
            type_id: TypeId::of::<T>(),
            schema: schema.clone() as Arc<dyn Any + Send + Sync>,
            validator: Arc::new(validator) as Arc<dyn Any + Send + Sync>,
            erased: Arc::new(ErasedEntry {
                type_name: std::any::type_name::<T>(),
                schema,
            }),
        };
        match self.entries.iter_mut().find(|e| e.type_id == entry.type_id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Seal the registry. No registration is possible afterwards.
    pub fn build(self) -> SchemaRegistry {
        let index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.type_id, i))
            .collect();
        SchemaRegistry { entries: self.entries, index }
    }
}

/// The sealed, serving phase: read-only, shareable across threads.
pub struct SchemaRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<TypeId, usize>,
}

impl SchemaRegistry {
    /// Start the registering phase.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registered schema for `T`, if any.
    pub fn schema<T: 'static>(&self) -> Option<&ModelSchema<T>> {
        self.entry::<T>()?.schema.downcast_ref()
    }

    /// The compiled validator for `T`, if any.
    pub fn validator<T: 'static>(&self) -> Option<&CompiledValidator<T>> {
        self.entry::<T>()?.validator.downcast_ref()
    }

    /// Whether `T` has a registered schema.
    pub fn contains<T: 'static>(&self) -> bool {
        self.index.contains_key(&TypeId::of::<T>())
    }

    /// Every registered schema, type-erased, in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &dyn ErasedSchema> {
        self.entries.iter().map(|entry| entry.erased.as_ref())
    }

    /// Number of registered model types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry<T: 'static>(&self) -> Option<&RegistryEntry> {
        let index = *self.index.get(&TypeId::of::<T>())?;
        self.entries.get(index)
    }
}
