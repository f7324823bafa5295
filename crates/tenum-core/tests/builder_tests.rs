use super::*;
use crate::error::EnumErrorKind;
use std::error::Error as _;

#[test]
fn test_default_name() {
    let ty = EnumBuilder::new().constant("A", 1).build();
    assert_eq!(ty.name(), DEFAULT_NAME);
    assert!(ty.parent().is_none());
}

#[test]
fn test_later_constant_declaration_wins() {
    let ty = EnumType::builder().constant("A", 1).constant("A", 2).build();
    assert_eq!(ty.values().len(), 1);
    assert_eq!(ty.values()["A"], Value::from(2));
}

#[test]
fn test_constants_from_json_preserves_order() {
    let ty = EnumType::builder()
        .name("HttpCode")
        .constants_from_json(r#"{"CONTINUE": "100", "OK": "200", "weights": {"OK": 2}}"#)
        .expect("valid declaration")
        .build();

    assert_eq!(
        ty.values().keys().map(String::as_str).collect::<Vec<_>>(),
        ["CONTINUE", "OK"]
    );
    assert!(ty.static_value("weights").is_some_and(Value::is_composite));
}

#[test]
fn test_constants_from_json_numbers() {
    let ty = EnumType::builder()
        .constants_from_json(r#"{"ONE": 1, "HALF": 0.5}"#)
        .expect("valid declaration")
        .build();

    assert!(ty.has(&Value::Int(1)));
    assert!(ty.has(&Value::Float(0.5)));
    assert!(!ty.has(&Value::Float(1.0)));
}

#[test]
fn test_constants_from_json_rejects_non_object() {
    let err = EnumType::builder()
        .name("Broken")
        .constants_from_json("[1, 2]")
        .err()
        .expect("array is not a declaration");

    assert_eq!(err.kind(), EnumErrorKind::Declaration);
    assert_eq!(err.type_name(), Some("Broken"));
    assert!(err.source().is_some());
}

#[test]
fn test_constants_from_json_rejects_malformed_input() {
    let result = EnumType::builder().constants_from_json("{\"A\": ");
    assert!(result.is_err_and(|err| err.kind() == EnumErrorKind::Declaration));
}

#[test]
fn test_constants_from_json_error_goes_through_factory() {
    let err = EnumType::builder()
        .name("J")
        .error_factory(|err| err.with_message("factory"))
        .constants_from_json("[1")
        .err()
        .expect("malformed declaration");

    assert_eq!(err.message(), "factory");
    assert_eq!(err.kind(), EnumErrorKind::Declaration);
    assert_eq!(err.type_name(), Some("J"));
}

#[test]
fn test_declare_shortcut() {
    let ty = EnumType::declare([("UP", 0), ("DOWN", 1)]);
    assert_eq!(ty.to_string(), "UP = 0; DOWN = 1");
}

#[test]
fn test_builder_surfaces() {
    let ty = EnumType::builder()
        .name("Full")
        .constant("A", "a")
        .static_method("first", |ty, _| {
            Ok(ty.values().into_values().next().unwrap_or(Value::Null))
        })
        .instance_value("label", "letter")
        .instance_method("shout", |instance, _| {
            Ok(Value::from(instance.to_string().to_uppercase()))
        })
        .build();

    assert_eq!(ty.call_static("first", &[]).expect("declared"), Value::from("a"));
    let a = ty.make("A").expect("declared");
    assert_eq!(a.get("label"), Some(&Value::from("letter")));
    assert_eq!(a.call("shout", &[]).expect("declared"), Value::from("A"));
}
