//! # Schema Descriptors — Read-Only Projections
//!
//! A descriptor is a borrowing view over a [`ModelSchema`] serving its two
//! consumers: the documentation path reads rules with validators stripped,
//! and the compilation path reads the full (property, accessor, rule,
//! validator) bindings. No apply or validate logic lives here.

use crate::node::SchemaObject;
use crate::rule::Rule;
use crate::schema::{Accessor, ModelSchema};
use crate::validator::Validator;

/// Read-only projection of a schema at a point in time.
pub struct SchemaDescriptor<'a, T> {
    schema: &'a ModelSchema<T>,
}

/// One (property, accessor, rule, validator) binding, borrowed from the
/// owning schema.
pub struct BindingRef<'a, T> {
    /// The property name.
    pub property: &'a str,
    /// The registered accessor, if the row declared one.
    pub accessor: Option<&'a Accessor<T>>,
    /// The bound rule.
    pub rule: &'a Rule,
    /// The attached validator, if any.
    pub validator: Option<&'a Validator>,
}

impl<'a, T> SchemaDescriptor<'a, T> {
    pub(crate) fn new(schema: &'a ModelSchema<T>) -> Self {
        Self { schema }
    }

    /// Every property with its ordered rules, validators stripped.
    pub fn rules_by_property(&self) -> Vec<(&'a str, Vec<&'a Rule>)> {
        self.schema
            .entries()
            .iter()
            .map(|entry| {
                let rules = entry.bindings.iter().map(|b| &b.rule).collect();
                (entry.name.as_str(), rules)
            })
            .collect()
    }

    /// Every binding, in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = BindingRef<'a, T>> {
        self.schema.entries().iter().flat_map(|entry| {
            entry.bindings.iter().map(move |binding| BindingRef {
                property: entry.name.as_str(),
                accessor: entry.accessor.as_ref(),
                rule: &binding.rule,
                validator: binding.validator.as_ref(),
            })
        })
    }

    /// Apply every rule to `object`, in declaration order.
    pub fn apply_to(&self, object: &mut SchemaObject) {
        for (property, rules) in self.rules_by_property() {
            for rule in rules {
                rule.apply(property, object);
            }
        }
    }
}
