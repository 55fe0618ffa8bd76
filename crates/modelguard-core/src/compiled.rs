//! # Compiled Validation — Pre-Resolved Predicates
//!
//! A [`CompiledValidator<T>`] is built once per model type from a schema
//! descriptor. For every binding with a validator it resolves the
//! property's accessor from the table and caches (property, accessor,
//! validator) as a [`CompiledEntry`]; accessor resolution happens at
//! build time, never per instance.
//!
//! `validate` evaluates every entry independently and unconditionally:
//! there is no short-circuit on first failure and no ordering dependency
//! between properties, so the result surfaces *all* violated constraints.
//! One property may contribute several failures (too short *and* invalid
//! format); that is the contract, not an accident.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::SchemaDescriptor;
use crate::schema::Accessor;
use crate::validator::Validator;
use crate::value::ObservedValue;

/// Sentinel property name reported when the validated instance itself is
/// absent.
pub const INSTANCE_PROPERTY: &str = "instance";

struct CompiledEntry<T> {
    property: String,
    accessor: Accessor<T>,
    validator: Validator,
}

/// Pre-resolved validation entries for one model type.
pub struct CompiledValidator<T> {
    entries: Vec<CompiledEntry<T>>,
}

impl<T> CompiledValidator<T> {
    /// Build the compiled entry list from a descriptor.
    ///
    /// Bindings without a validator (description, default, format and the
    /// other metadata rules) are not compiled and can never produce a
    /// failure. A validator bound through the raw rule API to a property
    /// with no registered accessor observes the value as absent.
    pub fn compile(descriptor: &SchemaDescriptor<'_, T>) -> Self {
        let entries = descriptor
            .bindings()
            .filter_map(|binding| {
                let validator = binding.validator?.clone();
                let accessor = binding
                    .accessor
                    .cloned()
                    .unwrap_or_else(|| Arc::new(|_: &T| ObservedValue::Absent));
                Some(CompiledEntry {
                    property: binding.property.to_string(),
                    accessor,
                    validator,
                })
            })
            .collect();
        Self { entries }
    }

    /// Number of compiled entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no constraint has a runtime check.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate a possibly-absent instance.
    ///
    /// An absent instance yields exactly one failure on
    /// [`INSTANCE_PROPERTY`] and evaluates nothing else. Otherwise every
    /// entry is evaluated and each violation appends one failure, in
    /// declaration order.
    pub fn validate(&self, instance: Option<&T>) -> ValidationResult {
        let Some(instance) = instance else {
            return ValidationResult::new(vec![Failure::new(
                INSTANCE_PROPERTY,
                "instance cannot be null",
            )]);
        };

        let mut failures = Vec::new();
        for entry in &self.entries {
            let value = (entry.accessor)(instance);
            if entry.validator.is_violation(&value) {
                failures.push(Failure {
                    property: entry.property.clone(),
                    message: entry.validator.error_message(&entry.property),
                });
            }
        }
        ValidationResult::new(failures)
    }
}

/// One validation failure: the property and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The violating property ([`INSTANCE_PROPERTY`] for an absent
    /// instance).
    pub property: String,
    /// The validator's rendered message.
    pub message: String,
}

impl Failure {
    fn new(property: &str, message: &str) -> Self {
        Self { property: property.to_string(), message: message.to_string() }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.message)
    }
}

/// The outcome of one `validate` call. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    failures: Vec<Failure>,
}

impl ValidationResult {
    fn new(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// Whether no constraint was violated.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// All failures, in evaluation order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consume the result, returning the failures.
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    /// Failures grouped by property.
    ///
    /// Properties appear in first-failure order; messages within a
    /// property keep evaluation order.
    pub fn failure_map(&self) -> Vec<(String, Vec<String>)> {
        let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
        for failure in &self.failures {
            match grouped.iter_mut().find(|(property, _)| *property == failure.property) {
                Some((_, messages)) => messages.push(failure.message.clone()),
                None => grouped.push((failure.property.clone(), vec![failure.message.clone()])),
            }
        }
        grouped
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "valid");
        }
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ModelSchema;
    use crate::value::Observe;

    struct Person {
        name: String,
        age: i64,
        email: Option<String>,
    }

    fn compiled() -> CompiledValidator<Person> {
        let mut schema = ModelSchema::new();
        schema
            .property("name", |p: &Person| p.name.observe())
            .required()
            .pattern("^[a-zA-Z\\s]+$")
            .unwrap()
            .min_length(2)
            .max_length(50);
        schema
            .property("age", |p: &Person| p.age.observe())
            .range(0.0, 150.0)
            .unwrap();
        schema
            .property("email", |p: &Person| p.email.observe())
            .required()
            .description("Contact address");
        CompiledValidator::compile(&schema.descriptor())
    }

    #[test]
    fn test_metadata_bindings_are_not_compiled() {
        // Six validator-bearing bindings; the description is skipped.
        assert_eq!(compiled().len(), 6);
    }

    #[test]
    fn test_valid_instance_has_empty_failures() {
        let person = Person {
            name: "John Doe".into(),
            age: 25,
            email: Some("a@b.com".into()),
        };
        let result = compiled().validate(Some(&person));
        assert!(result.is_valid());
        assert!(result.failures().is_empty());
    }

    #[test]
    fn test_all_violations_surface_without_short_circuit() {
        let person = Person { name: "1".into(), age: 200, email: None };
        let result = compiled().validate(Some(&person));
        assert!(!result.is_valid());

        let failures: Vec<(&str, &str)> = result
            .failures()
            .iter()
            .map(|f| (f.property.as_str(), f.message.as_str()))
            .collect();
        assert_eq!(
            failures,
            [
                ("name", "name has invalid format"),
                ("name", "name must be at least 2 characters"),
                ("age", "age must be between 0 and 150"),
                ("email", "email cannot be null"),
            ]
        );
    }

    #[test]
    fn test_absent_instance_yields_single_sentinel_failure() {
        let result = compiled().validate(None);
        assert!(!result.is_valid());
        assert_eq!(result.failures().len(), 1);
        assert_eq!(result.failures()[0].property, INSTANCE_PROPERTY);
        assert_eq!(result.failures()[0].message, "instance cannot be null");
    }

    #[test]
    fn test_failure_map_groups_in_first_seen_order() {
        let person = Person { name: "1".into(), age: 200, email: None };
        let map = compiled().validate(Some(&person)).failure_map();
        let properties: Vec<&str> = map.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(properties, ["name", "age", "email"]);
        assert_eq!(map[0].1.len(), 2);
        assert_eq!(map[1].1.len(), 1);
    }

    #[test]
    fn test_display_lists_failures_line_per_entry() {
        let person = Person { name: "Jo".into(), age: 200, email: Some("x".into()) };
        let result = compiled().validate(Some(&person));
        assert_eq!(format!("{result}"), "age: age must be between 0 and 150");
    }
}
