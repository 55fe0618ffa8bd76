//! # Rule Catalog — Declarative Property Constraints
//!
//! A rule is an immutable description of one constraint or metadata fact
//! attached to a property. Rules never reference a schema or a model type;
//! they are reusable values with a single side-effecting operation:
//! [`Rule::apply`], which writes the rule onto a schema node for
//! documentation.
//!
//! Parameters are validated when the rule is built. An inverted range or a
//! malformed pattern is rejected by the carrier constructors ([`Bounds`],
//! [`CountBounds`], [`Pattern`]), so `apply` itself cannot fail.

use regex::Regex;

use crate::error::SchemaError;
use crate::node::SchemaObject;

/// Inclusive numeric bounds for a range rule.
///
/// Construction rejects `min > max` (and non-ordered values such as NaN);
/// an instance always holds a valid interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Build bounds, rejecting inverted intervals.
    pub fn new(min: f64, max: f64) -> Result<Self, SchemaError> {
        if !(min <= max) {
            return Err(SchemaError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// The inclusive lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies within the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive element-count bounds for a sequence-valued property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    min: usize,
    max: usize,
}

impl CountBounds {
    /// Build count bounds, rejecting inverted intervals.
    pub fn new(min: usize, max: usize) -> Result<Self, SchemaError> {
        if min > max {
            return Err(SchemaError::InvalidItemBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// The inclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether `count` lies within the interval.
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// A compiled regular-expression constraint.
///
/// The expression is compiled once at declaration time; a malformed
/// pattern is a configuration error, never a runtime one.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern, rejecting malformed expressions.
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        Ok(Self { regex: Regex::new(pattern)? })
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern matches anywhere in `text`.
    ///
    /// Unanchored, like the schema `pattern` keyword; anchor with `^...$`
    /// to require a full match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// The closed catalog of property rules.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The property must be present. Applies to the *object-level*
    /// required list, not the property node.
    Required,
    /// Human-readable description. Metadata only.
    Description(String),
    /// Default literal. Metadata only.
    Default(serde_json::Value),
    /// Format hint. Metadata only.
    Format(String),
    /// Inclusive numeric bounds on a scalar property.
    Range(Bounds),
    /// Inclusive bounds on the element count of a sequence property.
    ItemsRange(CountBounds),
    /// Inclusive lower bound on string length.
    MinLength(usize),
    /// Inclusive upper bound on string length.
    MaxLength(usize),
    /// Lower bound on element count. Documentation only.
    ItemsMinLength(usize),
    /// Upper bound on element count. Documentation only.
    ItemsMaxLength(usize),
    /// Regular-expression constraint on a string property.
    Pattern(Pattern),
}

impl Rule {
    /// Write this rule onto the schema node for `property`.
    ///
    /// Each arm writes exactly the fields of its own constraint. The
    /// required rule is the asymmetric case: required properties are an
    /// object-level declaration, so it writes the parent's required list
    /// and needs the owning property's name for it.
    pub fn apply(&self, property: &str, object: &mut SchemaObject) {
        match self {
            Rule::Required => object.require(property),
            Rule::Description(text) => {
                object.property_node(property).description = Some(text.clone());
            }
            Rule::Default(value) => {
                object.property_node(property).default = Some(value.clone());
            }
            Rule::Format(name) => {
                object.property_node(property).format = Some(name.clone());
            }
            Rule::Range(bounds) => {
                let node = object.property_node(property);
                node.minimum = Some(bounds.min());
                node.maximum = Some(bounds.max());
            }
            Rule::ItemsRange(counts) => {
                let node = object.property_node(property);
                node.min_items = Some(counts.min());
                node.max_items = Some(counts.max());
            }
            Rule::MinLength(n) => {
                object.property_node(property).min_length = Some(*n);
            }
            Rule::MaxLength(n) => {
                object.property_node(property).max_length = Some(*n);
            }
            Rule::ItemsMinLength(n) => {
                object.property_node(property).min_items = Some(*n);
            }
            Rule::ItemsMaxLength(n) => {
                object.property_node(property).max_items = Some(*n);
            }
            Rule::Pattern(pattern) => {
                object.property_node(property).pattern = Some(pattern.as_str().to_string());
            }
        }
    }
}
