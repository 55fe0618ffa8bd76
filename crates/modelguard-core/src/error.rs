//! # Error Types — Configuration-Time Rejection
//!
//! Errors raised while *declaring* schemas. Rule parameters are checked at
//! construction (inverted bounds, malformed patterns, unconvertible default
//! literals) and rejected immediately rather than clamped.
//!
//! Validation-time violations are not errors: an invalid instance is an
//! expected, frequent outcome and is reported as ordinary data in
//! [`ValidationResult`](crate::compiled::ValidationResult).

use thiserror::Error;

/// Error raised while declaring a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A numeric range was declared with `min > max`.
    #[error("invalid range bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// The declared lower bound.
        min: f64,
        /// The declared upper bound.
        max: f64,
    },

    /// An item-count range was declared with `min > max`.
    #[error("invalid item bounds: min {min} is greater than max {max}")]
    InvalidItemBounds {
        /// The declared lower bound.
        min: usize,
        /// The declared upper bound.
        max: usize,
    },

    /// A pattern rule was declared with a malformed regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A default value could not be converted to a schema literal.
    #[error("default value is not representable as a schema literal: {0}")]
    Literal(#[from] serde_json::Error),
}
