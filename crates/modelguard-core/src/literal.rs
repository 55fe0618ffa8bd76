//! Default-value literals.
//!
//! A default value declared on a property must be representable in the
//! documentation output. Serde does the recursive walk over public
//! members, so strings, numbers, bools, arrays, and nested composite
//! types all convert without per-type code here.

use serde::Serialize;

use crate::error::SchemaError;

/// Convert a value to a schema-representable JSON literal.
pub fn literal<V: Serialize + ?Sized>(value: &V) -> Result<serde_json::Value, SchemaError> {
    Ok(serde_json::to_value(value)?)
}
