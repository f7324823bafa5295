use super::*;
use std::error::Error as _;

#[test]
fn test_unknown_value_message() {
    let err = EnumError::unknown_value("Status", &Value::from("999"));
    assert_eq!(err.kind(), EnumErrorKind::UnknownValue);
    assert_eq!(err.message(), "'Status' does not have the value '999'");
    assert_eq!(err.to_string(), err.message());
    assert_eq!(err.type_name(), Some("Status"));
}

#[test]
fn test_unknown_key_message() {
    let err = EnumError::unknown_key("Status", "TEAPOT");
    assert_eq!(err.kind(), EnumErrorKind::UnknownKey);
    assert_eq!(err.message(), "'Status' does not have value for key 'TEAPOT'");
}

#[test]
fn test_not_an_instance_message() {
    let err = EnumError::not_an_instance();
    assert_eq!(err.kind(), EnumErrorKind::NotAnInstance);
    assert_eq!(err.message(), "Enum object is expected");
    assert_eq!(err.type_name(), None);
}

#[test]
fn test_name_tag_is_constant() {
    assert_eq!(EnumError::not_an_instance().name(), "EnumError");
    assert_eq!(EnumError::unknown_key("X", "Y").name(), EnumError::NAME);
}

#[test]
fn test_declaration_wraps_source() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
    let err = EnumError::declaration("Status", json_err);

    assert_eq!(err.kind(), EnumErrorKind::Declaration);
    assert!(err.message().starts_with("'Status' declaration could not be read: "));
    let source = err.source().expect("source is kept");
    assert!(source.downcast_ref::<serde_json::Error>().is_some());
}

#[test]
fn test_with_message_keeps_kind() {
    let err = EnumError::unknown_key("Status", "X").with_message("custom");
    assert_eq!(err.kind(), EnumErrorKind::UnknownKey);
    assert_eq!(err.to_string(), "custom");
}

#[test]
fn test_stack_is_captured() {
    let err = EnumError::not_an_instance();
    // Content depends on RUST_BACKTRACE; only the status must be readable.
    let _status = err.stack().status();
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<EnumError>();
}
