//! # Validator Catalog — Runtime Predicates
//!
//! A validator is an immutable runtime predicate paired with an
//! error-message template. Validators are independent of rules: the two
//! are associated by the registration step, and only constraints with
//! runtime-checkable semantics have a validator at all (description,
//! default, and format never do).
//!
//! ## Predicate Convention
//!
//! [`Validator::is_violation`] names the *failure* condition: `true` means
//! the constraint is violated. Predicates operate on [`ObservedValue`]
//! because compiled entries are built without compile-time knowledge of
//! the property type.
//!
//! ## Fail-Closed
//!
//! A validator that observes a value of an unexpected kind (a range check
//! over text, an item count over an integer) reports a violation rather
//! than silently passing. Mistyped declarations surface as validation
//! failures during testing instead of passing unnoticed. The exception is
//! deliberate: length and pattern checks never fail an absent string,
//! because absence is the required rule's contract.

use crate::rule::{Bounds, CountBounds, Pattern};
use crate::value::ObservedValue;

/// The closed catalog of runtime validators.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Fails when the value is absent.
    Required,
    /// Fails when the numeric value is outside the bounds, or the value
    /// is not numeric.
    Range(Bounds),
    /// Fails when the element count is outside the bounds, or the value
    /// is not a sequence.
    ItemsRange(CountBounds),
    /// Fails when a present string is shorter than the bound.
    MinLength(usize),
    /// Fails when a present string is longer than the bound.
    MaxLength(usize),
    /// Fails when a present string does not match the pattern.
    Pattern(Pattern),
}

impl Validator {
    /// Whether `value` violates this constraint.
    pub fn is_violation(&self, value: &ObservedValue) -> bool {
        match self {
            Validator::Required => value.is_absent(),
            Validator::Range(bounds) => match value.as_number() {
                Some(number) => !bounds.contains(number),
                // Non-numeric (including absent): fail closed.
                None => true,
            },
            Validator::ItemsRange(counts) => match value {
                ObservedValue::Sequence(items) => !counts.contains(items.len()),
                // Non-sequence (including absent): fail closed.
                _ => true,
            },
            Validator::MinLength(min) => match value {
                ObservedValue::Text(text) => text.chars().count() < *min,
                ObservedValue::Absent => false,
                _ => true,
            },
            Validator::MaxLength(max) => match value {
                ObservedValue::Text(text) => text.chars().count() > *max,
                ObservedValue::Absent => false,
                _ => true,
            },
            Validator::Pattern(pattern) => match value {
                ObservedValue::Text(text) => !pattern.is_match(text),
                ObservedValue::Absent => false,
                _ => true,
            },
        }
    }

    /// The failure message for `property`.
    pub fn error_message(&self, property: &str) -> String {
        match self {
            Validator::Required => format!("{property} cannot be null"),
            Validator::Range(bounds) => {
                format!("{property} must be between {} and {}", bounds.min(), bounds.max())
            }
            Validator::ItemsRange(counts) => {
                format!("{property} length must be between {} and {}", counts.min(), counts.max())
            }
            Validator::MinLength(min) => {
                format!("{property} must be at least {min} characters")
            }
            Validator::MaxLength(max) => {
                format!("{property} must not exceed {max} characters")
            }
            Validator::Pattern(_) => format!("{property} has invalid format"),
        }
    }
}
