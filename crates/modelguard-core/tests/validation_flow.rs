//! Integration test: declare a schema once, then exercise both consumers
//! of the registry — documentation annotation and instance validation —
//! against the same declarations.

use modelguard_core::{
    ModelSchema, Observe, SchemaDefinition, SchemaError, SchemaObject, SchemaRegistry,
    INSTANCE_PROPERTY,
};
use proptest::prelude::*;

struct Person {
    name: String,
    age: i64,
    email: Option<String>,
}

struct PersonRules;

impl SchemaDefinition for PersonRules {
    type Model = Person;

    fn define(schema: &mut ModelSchema<Person>) -> Result<(), SchemaError> {
        schema
            .property("name", |p: &Person| p.name.observe())
            .required()
            .pattern("^[a-zA-Z\\s]+$")?
            .min_length(2)
            .max_length(50);
        schema
            .property("age", |p: &Person| p.age.observe())
            .range(0.0, 150.0)?;
        schema
            .property("email", |p: &Person| p.email.observe())
            .required()
            .description("Contact address")
            .format("email");
        Ok(())
    }
}

struct Unregistered;

fn registry() -> SchemaRegistry {
    SchemaRegistry::builder()
        .define::<PersonRules>()
        .expect("person schema must declare")
        .build()
}

#[test]
fn test_unregistered_type_has_no_schema_and_no_validator() {
    let registry = registry();
    assert!(registry.schema::<Unregistered>().is_none());
    assert!(registry.validator::<Unregistered>().is_none());
}

#[test]
fn test_valid_instance_passes() {
    let registry = registry();
    let person = Person {
        name: "John Doe".into(),
        age: 25,
        email: Some("a@b.com".into()),
    };
    let result = registry.validator::<Person>().unwrap().validate(Some(&person));
    assert!(result.is_valid());
    assert!(result.failures().is_empty());
}

#[test]
fn test_invalid_instance_reports_every_violation() {
    let registry = registry();
    let person = Person { name: "1".into(), age: 200, email: None };
    let result = registry.validator::<Person>().unwrap().validate(Some(&person));

    assert!(!result.is_valid());
    assert_eq!(result.failures().len(), 4);

    let mut found: Vec<(&str, &str)> = result
        .failures()
        .iter()
        .map(|f| (f.property.as_str(), f.message.as_str()))
        .collect();
    found.sort();
    assert_eq!(
        found,
        [
            ("age", "age must be between 0 and 150"),
            ("email", "email cannot be null"),
            ("name", "name has invalid format"),
            ("name", "name must be at least 2 characters"),
        ]
    );
}

#[test]
fn test_absent_instance_is_one_sentinel_failure() {
    let registry = registry();
    let result = registry.validator::<Person>().unwrap().validate(None);
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].property, INSTANCE_PROPERTY);
}

#[test]
fn test_documentation_round_trip() {
    let registry = registry();
    let mut object = SchemaObject::new();
    registry.schema::<Person>().unwrap().apply_to(&mut object);

    assert_eq!(object.required(), ["name", "email"]);

    let name = object.get("name").unwrap();
    assert_eq!(name.pattern.as_deref(), Some("^[a-zA-Z\\s]+$"));
    assert_eq!(name.min_length, Some(2));
    assert_eq!(name.max_length, Some(50));

    let age = object.get("age").unwrap();
    assert_eq!(age.minimum, Some(0.0));
    assert_eq!(age.maximum, Some(150.0));

    let email = object.get("email").unwrap();
    assert_eq!(email.description.as_deref(), Some("Contact address"));
    assert_eq!(email.format.as_deref(), Some("email"));

    // Metadata-only rules never surface as validation failures.
    let person = Person {
        name: "John Doe".into(),
        age: 25,
        email: Some("not even shaped like an address".into()),
    };
    let result = registry.validator::<Person>().unwrap().validate(Some(&person));
    assert!(result.is_valid());
}

#[test]
fn test_failure_map_shape() {
    let registry = registry();
    let person = Person { name: "1".into(), age: 200, email: None };
    let map = registry
        .validator::<Person>()
        .unwrap()
        .validate(Some(&person))
        .failure_map();

    assert_eq!(map.len(), 3);
    assert_eq!(map[0].0, "name");
    assert_eq!(
        map[0].1,
        ["name has invalid format", "name must be at least 2 characters"]
    );
    assert_eq!(map[1].0, "age");
    assert_eq!(map[2].0, "email");
}

proptest! {
    #[test]
    fn prop_range_accepts_exactly_the_interval(
        lo in -1000.0f64..1000.0,
        hi in -1000.0f64..1000.0,
        value in -2000i64..2000,
    ) {
        prop_assume!(lo <= hi);

        struct Sample {
            value: i64,
        }

        let mut schema = ModelSchema::<Sample>::new();
        schema
            .property("value", |s: &Sample| s.value.observe())
            .range(lo, hi)
            .expect("ordered bounds must be accepted");
        let compiled = modelguard_core::CompiledValidator::compile(&schema.descriptor());

        let result = compiled.validate(Some(&Sample { value }));
        let in_range = (value as f64) >= lo && (value as f64) <= hi;
        prop_assert_eq!(result.is_valid(), in_range);
    }
}
