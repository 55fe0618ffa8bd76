//! # Schema Documents
//!
//! Assembles the documentation view of a registry: every registered
//! model's rules applied onto a fresh schema node, keyed by the model's
//! short type name. The output is plain JSON for an external
//! documentation generator to merge into its API description.

use modelguard_core::{SchemaObject, SchemaRegistry};

/// Render every registered schema as a JSON document.
///
/// Shape: `{"schemas": {"Person": {"type": "object", ...}, ...}}`.
pub fn schema_document(registry: &SchemaRegistry) -> serde_json::Value {
    let mut schemas = serde_json::Map::new();
    for schema in registry.schemas() {
        let mut object = SchemaObject::new();
        schema.apply_to(&mut object);
        schemas.insert(short_name(schema.type_name()).to_string(), object.to_json());
    }
    serde_json::json!({ "schemas": schemas })
}

/// The last path segment of a full type name.
fn short_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}
