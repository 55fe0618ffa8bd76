//! # Schema Nodes — The Documentation Target
//!
//! The mutable object rules write onto when a schema is rendered for
//! documentation. The required-property set lives on the object node, not
//! the property node: that is where OpenAPI/JSON-Schema declare it, and
//! the required rule preserves that asymmetry.
//!
//! Serialization follows the OpenAPI spelling (`minLength`, `maxItems`,
//! ...) and omits unset fields.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The object-level schema node for one model type.
///
/// Owns the required-property list and one [`PropertyNode`] per annotated
/// property, both in first-write order.
#[derive(Debug, Clone, Default)]
pub struct SchemaObject {
    required: Vec<String>,
    properties: Vec<(String, PropertyNode)>,
}

impl SchemaObject {
    /// Create an empty object node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a property as required.
    ///
    /// Idempotent: re-applying the same rule does not duplicate the entry.
    pub fn require(&mut self, property: &str) {
        if !self.required.iter().any(|p| p == property) {
            self.required.push(property.to_string());
        }
    }

    /// The required-property list, in first-declaration order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// The mutable property node for `property`, created on first access.
    pub fn property_node(&mut self, property: &str) -> &mut PropertyNode {
        if let Some(index) = self.properties.iter().position(|(name, _)| name == property) {
            return &mut self.properties[index].1;
        }
        self.properties.push((property.to_string(), PropertyNode::default()));
        let last = self.properties.len() - 1;
        &mut self.properties[last].1
    }

    /// The property node for `property`, if any rule has written to it.
    pub fn get(&self, property: &str) -> Option<&PropertyNode> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, node)| node)
    }

    /// All property nodes, in first-write order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyNode)> {
        self.properties.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Render the node as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for SchemaObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "object")?;
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        if !self.properties.is_empty() {
            map.serialize_entry("properties", &PropertyMap(&self.properties))?;
        }
        map.end()
    }
}

struct PropertyMap<'a>(&'a [(String, PropertyNode)]);

impl Serialize for PropertyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, node) in self.0 {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

/// The per-property schema node.
///
/// Each field corresponds to one constraint or metadata fact; a rule
/// writes exactly the fields of its own constraint and leaves the rest
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyNode {
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Format hint (`date-time`, `email`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Inclusive numeric lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive numeric upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Inclusive string-length lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive string-length upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Inclusive element-count lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    /// Inclusive element-count upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Regular-expression constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_is_idempotent() {
        let mut object = SchemaObject::new();
        object.require("name");
        object.require("email");
        object.require("name");
        assert_eq!(object.required(), ["name", "email"]);
    }

    #[test]
    fn test_property_node_created_on_first_access() {
        let mut object = SchemaObject::new();
        assert!(object.get("name").is_none());
        object.property_node("name").min_length = Some(2);
        assert_eq!(object.get("name").unwrap().min_length, Some(2));
    }

    #[test]
    fn test_serialization_uses_openapi_spelling() {
        let mut object = SchemaObject::new();
        object.require("name");
        let node = object.property_node("name");
        node.min_length = Some(2);
        node.max_length = Some(50);
        node.pattern = Some("^[a-z]+$".into());

        let json = serde_json::to_string(&object).unwrap();
        assert!(json.contains("\"required\":[\"name\"]"));
        assert!(json.contains("\"minLength\":2"));
        assert!(json.contains("\"maxLength\":50"));
        assert!(json.contains("\"pattern\":\"^[a-z]+$\""));
        // Unset fields are omitted entirely.
        assert!(!json.contains("minimum"));
        assert!(!json.contains("format"));
    }

    #[test]
    fn test_empty_object_serializes_to_bare_type() {
        let object = SchemaObject::new();
        assert_eq!(serde_json::to_string(&object).unwrap(), "{\"type\":\"object\"}");
    }
}
