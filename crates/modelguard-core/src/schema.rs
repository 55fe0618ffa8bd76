//! # Model Schemas — Per-Type Rule Tables
//!
//! A [`ModelSchema<T>`] owns the ordered rule table for one model type:
//! property rows in declaration order, each carrying a registered value
//! accessor and an ordered list of (rule, optional validator) bindings.
//!
//! ## Accessors
//!
//! Rust has no runtime member lookup, so the schema author supplies each
//! property's accessor (`Fn(&T) -> ObservedValue`) when the row is
//! declared. The engine resolves the accessor from the table exactly once
//! per (type, property) when the compiled validator is built and reuses
//! it for every subsequent validation; per-instance work is one closure
//! call.
//!
//! ## Two-Step Binding Protocol
//!
//! [`ModelSchema::add_rule`] appends a binding with no validator;
//! [`ModelSchema::attach_validator`] gives the *most recently appended*
//! binding for that property its runtime check. The fluent
//! [`PropertyRuleBuilder`] drives both so one call chain can express
//! "add this constraint, and optionally give it a runtime check" without
//! forcing every rule to pair with a validator. Attaching with no prior
//! binding for the property is a no-op.

use std::sync::Arc;

use serde::Serialize;

use crate::descriptor::SchemaDescriptor;
use crate::error::SchemaError;
use crate::literal::literal;
use crate::node::SchemaObject;
use crate::rule::{Bounds, CountBounds, Pattern, Rule};
use crate::validator::Validator;
use crate::value::ObservedValue;

/// A shared, reusable property accessor.
pub type Accessor<T> = Arc<dyn Fn(&T) -> ObservedValue + Send + Sync>;

/// One (rule, optional validator) binding for a property.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    pub(crate) rule: Rule,
    pub(crate) validator: Option<Validator>,
}

/// One property row: name, accessor, ordered bindings.
pub(crate) struct PropertyEntry<T> {
    pub(crate) name: String,
    pub(crate) accessor: Option<Accessor<T>>,
    pub(crate) bindings: Vec<Binding>,
}

/// The ordered rule table for one model type.
pub struct ModelSchema<T> {
    properties: Vec<PropertyEntry<T>>,
}

impl<T> Default for ModelSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ModelSchema<T> {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self { properties: Vec::new() }
    }

    /// Declare a property row and return its fluent rule builder.
    ///
    /// The accessor reads the property's value from an instance. Declaring
    /// the same property again replaces its accessor and continues
    /// appending to its existing binding list.
    pub fn property<F>(&mut self, name: impl Into<String>, accessor: F) -> PropertyRuleBuilder<'_, T>
    where
        F: Fn(&T) -> ObservedValue + Send + Sync + 'static,
    {
        let index = self.entry_index(name.into());
        self.properties[index].accessor = Some(Arc::new(accessor));
        PropertyRuleBuilder { schema: self, index, appended: false }
    }

    /// Append a binding with no validator for `property`.
    pub fn add_rule(&mut self, property: impl Into<String>, rule: Rule) {
        let index = self.entry_index(property.into());
        self.properties[index].bindings.push(Binding { rule, validator: None });
    }

    /// Attach a validator to the most recently appended binding for
    /// `property`. No-op when the property has no bindings.
    pub fn attach_validator(&mut self, property: &str, validator: Validator) {
        let Some(entry) = self.properties.iter_mut().find(|e| e.name == property) else {
            return;
        };
        if let Some(binding) = entry.bindings.last_mut() {
            binding.validator = Some(validator);
        }
    }

    /// A read-only projection of this schema.
    pub fn descriptor(&self) -> SchemaDescriptor<'_, T> {
        SchemaDescriptor::new(self)
    }

    /// Apply every rule to `object`, in declaration order.
    ///
    /// This is the documentation path; validators are not consulted.
    pub fn apply_to(&self, object: &mut SchemaObject) {
        self.descriptor().apply_to(object);
    }

    pub(crate) fn entries(&self) -> &[PropertyEntry<T>] {
        &self.properties
    }

    fn entry_index(&mut self, name: String) -> usize {
        if let Some(index) = self.properties.iter().position(|e| e.name == name) {
            return index;
        }
        self.properties.push(PropertyEntry { name, accessor: None, bindings: Vec::new() });
        self.properties.len() - 1
    }
}

/// Fluent rule builder for one property.
///
/// Short-lived: holds the owning schema, the property row index, and
/// whether this builder has appended a rule yet (the target of
/// `with_validation`). It never holds a reference into a rule value.
pub struct PropertyRuleBuilder<'s, T> {
    schema: &'s mut ModelSchema<T>,
    index: usize,
    appended: bool,
}

impl<'s, T> PropertyRuleBuilder<'s, T> {
    /// Append a rule with no validator.
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.schema.properties[self.index].bindings.push(Binding { rule, validator: None });
        self.appended = true;
        self
    }

    /// Attach a validator to the rule this builder appended last.
    /// No-op if no rule has been appended yet.
    pub fn with_validation(self, validator: Validator) -> Self {
        if self.appended {
            if let Some(binding) = self.schema.properties[self.index].bindings.last_mut() {
                binding.validator = Some(validator);
            }
        }
        self
    }

    /// The property must be present.
    pub fn required(self) -> Self {
        self.add_rule(Rule::Required).with_validation(Validator::Required)
    }

    /// Attach a description. Metadata only.
    pub fn description(self, text: impl Into<String>) -> Self {
        self.add_rule(Rule::Description(text.into()))
    }

    /// Attach a default value. Metadata only.
    pub fn default_value<V: Serialize>(self, value: &V) -> Result<Self, SchemaError> {
        Ok(self.add_rule(Rule::Default(literal(value)?)))
    }

    /// Attach a format hint. Metadata only.
    pub fn format(self, name: impl Into<String>) -> Self {
        self.add_rule(Rule::Format(name.into()))
    }

    /// Inclusive numeric bounds, checked at validation time.
    pub fn range(self, min: f64, max: f64) -> Result<Self, SchemaError> {
        let bounds = Bounds::new(min, max)?;
        Ok(self.add_rule(Rule::Range(bounds)).with_validation(Validator::Range(bounds)))
    }

    /// Inclusive element-count bounds, checked at validation time.
    pub fn items_range(self, min: usize, max: usize) -> Result<Self, SchemaError> {
        let counts = CountBounds::new(min, max)?;
        Ok(self.add_rule(Rule::ItemsRange(counts)).with_validation(Validator::ItemsRange(counts)))
    }

    /// Inclusive string-length lower bound, checked at validation time.
    pub fn min_length(self, min: usize) -> Self {
        self.add_rule(Rule::MinLength(min)).with_validation(Validator::MinLength(min))
    }

    /// Inclusive string-length upper bound, checked at validation time.
    pub fn max_length(self, max: usize) -> Self {
        self.add_rule(Rule::MaxLength(max)).with_validation(Validator::MaxLength(max))
    }

    /// Element-count lower bound. Documentation only.
    pub fn items_min_length(self, min: usize) -> Self {
        self.add_rule(Rule::ItemsMinLength(min))
    }

    /// Element-count upper bound. Documentation only.
    pub fn items_max_length(self, max: usize) -> Self {
        self.add_rule(Rule::ItemsMaxLength(max))
    }

    /// Regular-expression constraint, checked at validation time.
    pub fn pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let pattern = Pattern::new(pattern)?;
        Ok(self
            .add_rule(Rule::Pattern(pattern.clone()))
            .with_validation(Validator::Pattern(pattern)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Observe;

    struct Person {
        name: String,
    }

    #[test]
    fn test_bindings_preserve_insertion_order() {
        let mut schema = ModelSchema::<Person>::new();
        schema
            .property("name", |p: &Person| p.name.observe())
            .required()
            .min_length(2)
            .max_length(50);

        let entry = &schema.entries()[0];
        assert_eq!(entry.name, "name");
        assert_eq!(entry.bindings.len(), 3);
        assert!(matches!(entry.bindings[0].rule, Rule::Required));
        assert!(matches!(entry.bindings[1].rule, Rule::MinLength(2)));
        assert!(matches!(entry.bindings[2].rule, Rule::MaxLength(50)));
    }

    #[test]
    fn test_validator_attaches_to_last_appended_rule() {
        let mut schema = ModelSchema::<Person>::new();
        schema.add_rule("name", Rule::MinLength(2));
        schema.add_rule("name", Rule::MaxLength(50));
        schema.attach_validator("name", Validator::MaxLength(50));

        let entry = &schema.entries()[0];
        assert!(entry.bindings[0].validator.is_none());
        assert!(matches!(entry.bindings[1].validator, Some(Validator::MaxLength(50))));
    }

    #[test]
    fn test_attach_without_binding_is_noop() {
        let mut schema = ModelSchema::<Person>::new();
        schema.attach_validator("name", Validator::Required);
        assert!(schema.entries().is_empty());

        // A declared row with no bindings is equally untouched.
        schema.property("name", |p: &Person| p.name.observe());
        schema.attach_validator("name", Validator::Required);
        assert!(schema.entries()[0].bindings.is_empty());
    }

    #[test]
    fn test_metadata_rules_carry_no_validator() {
        let mut schema = ModelSchema::<Person>::new();
        schema
            .property("name", |p: &Person| p.name.observe())
            .description("Display name")
            .default_value(&"anonymous")
            .unwrap()
            .format("display")
            .items_min_length(1);

        for binding in &schema.entries()[0].bindings {
            assert!(binding.validator.is_none());
        }
    }

    #[test]
    fn test_same_rule_variant_may_bind_twice() {
        let mut schema = ModelSchema::<Person>::new();
        schema
            .property("name", |p: &Person| p.name.observe())
            .pattern("^[a-z]+$")
            .unwrap()
            .pattern("[aeiou]")
            .unwrap();

        let entry = &schema.entries()[0];
        assert_eq!(entry.bindings.len(), 2);
        assert!(entry.bindings.iter().all(|b| b.validator.is_some()));
    }

    #[test]
    fn test_invalid_parameters_are_rejected_by_builder() {
        let mut schema = ModelSchema::<Person>::new();
        assert!(schema
            .property("name", |p: &Person| p.name.observe())
            .range(10.0, 1.0)
            .is_err());
        assert!(schema
            .property("name", |p: &Person| p.name.observe())
            .pattern("(")
            .is_err());
    }
}
