//! Integration tests for the tenum facade.
//!
//! These exercise the public surface end to end:
//! - Declaring a type and introspecting its constants
//! - Constructing instances by value and by name
//! - Deriving child types without touching the parent
//! - Sharing sealed types across threads

use indexmap::IndexMap;
use rayon::prelude::*;
use tenum::{EnumErrorKind, EnumType, InstanceAdditions, StaticAdditions, Value};

fn status() -> EnumType {
    EnumType::builder()
        .name("Status")
        .constant("OK", "200")
        .constant("NOT_FOUND", "404")
        .build()
}

fn constants(entries: &[(&str, &str)]) -> IndexMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), Value::from(*value)))
        .collect()
}

#[test]
fn test_status_scenario() {
    tenum::init_tracing();
    let status = status();

    assert!(status.has(&Value::from("200")));
    assert_eq!(status.make("OK").expect("OK is declared").value(), &Value::from("200"));

    let err = status.construct("999").expect_err("999 is not declared");
    assert_eq!(err.kind(), EnumErrorKind::UnknownValue);
    assert_eq!(err.name(), "EnumError");

    let child = status.extend(
        StaticAdditions::new().constant("CREATED", "201"),
        InstanceAdditions::new(),
    );
    assert_eq!(
        child.values(),
        constants(&[("OK", "200"), ("NOT_FOUND", "404"), ("CREATED", "201")])
    );
    assert_eq!(
        status.values(),
        constants(&[("OK", "200"), ("NOT_FOUND", "404")])
    );
}

#[test]
fn test_every_declared_value_round_trips() {
    let status = status();
    for (key, value) in status.values() {
        let instance = status.construct(value.clone()).expect("declared value");
        assert_eq!(instance.value(), &value);
        assert_eq!(instance.key(), key);
        assert_eq!(status.key_of(&value), Some(key.as_str()));
        assert_eq!(status.make(&key).expect("declared key"), instance);
    }
}

#[test]
fn test_undeclared_values_and_keys_fail() {
    let status = status();
    for value in [Value::from(200), Value::from("201"), Value::Null, Value::from(true)] {
        assert!(!status.has(&value));
        assert_eq!(status.key_of(&value), None);
        let err = status.construct(value).expect_err("undeclared value");
        assert_eq!(err.kind(), EnumErrorKind::UnknownValue);
    }

    let err = status.make("CREATED").expect_err("undeclared key");
    assert_eq!(err.kind(), EnumErrorKind::UnknownKey);
}

#[test]
fn test_equal_enum_contract() {
    let status = status();
    let a = status.make("OK").expect("declared");
    let b = status.construct("200").expect("declared");

    assert!(a.equal_enum(&Value::from(b)).expect("instance argument"));
    let err = a.equal_enum(&Value::from("200")).expect_err("raw value is not an instance");
    assert_eq!(err.kind(), EnumErrorKind::NotAnInstance);
}

#[test]
fn test_reflection_helpers_are_reexported() {
    let declared = status().values();
    assert_eq!(
        tenum::common::find_key_by_value(&Value::from("404"), &declared).map(String::as_str),
        Some("NOT_FOUND")
    );
}

#[test]
fn test_sealed_types_shared_across_threads() {
    let status = status();
    let child = status.extend(
        StaticAdditions::new().constant("CREATED", "201"),
        InstanceAdditions::new().name("ExtendedStatus"),
    );

    let keys: Vec<String> = (0..256)
        .into_par_iter()
        .map(|i| {
            let code = ["200", "404", "201"][i % 3];
            child
                .construct(code)
                .map(|instance| instance.key().to_string())
                .expect("declared on child")
        })
        .collect();

    assert_eq!(keys.len(), 256);
    assert_eq!(keys[0], "OK");
    assert_eq!(keys[1], "NOT_FOUND");
    assert_eq!(keys[2], "CREATED");

    let parent_hits = (0..256)
        .into_par_iter()
        .filter(|i| status.has(&Value::from(["200", "201"][i % 2])))
        .count();
    assert_eq!(parent_hits, 128);
}
