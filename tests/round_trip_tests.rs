//! Integration tests for the classify/serialize/deserialize pipeline
//!
//! Walks one matrix of thrown values through every operation: genuine
//! exceptions (base kind and built-in subtypes), foreign errors, and
//! values that are not errors at all.

use std::fmt;

use thrown::{
    deserialize, is_exception, is_implicit_exception, is_of_error, serialize, Exception,
    ExceptionKind, SerializedException, Throwable,
};

/// A hand-rolled error type on the sending side. The receiving side has
/// no such type, so its name must not survive the wire.
#[derive(Debug)]
struct CustomError {
    message: String,
}

impl CustomError {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CustomError {}

fn classify(value: &Throwable) -> (bool, bool, bool) {
    (
        is_exception(value),
        is_implicit_exception(value),
        is_of_error(value),
    )
}

// ============================================================
// Classification
// ============================================================

#[test]
fn test_classifies_plain_exception() {
    let value = Throwable::from(Exception::new("message"));
    assert_eq!(classify(&value), (true, false, true));
}

#[test]
fn test_classifies_builtin_subtype() {
    let value = Throwable::from(Exception::with_kind(ExceptionKind::Syntax, "message"));
    assert_eq!(classify(&value), (true, true, false));
}

#[test]
fn test_classifies_number_as_non_exception() {
    let value = Throwable::from(5);
    assert_eq!(classify(&value), (false, false, false));
}

#[test]
fn test_classifies_string_as_non_exception() {
    let value = Throwable::from("message");
    assert_eq!(classify(&value), (false, false, false));
}

#[test]
fn test_classifies_empty_object_as_non_exception() {
    let value = Throwable::from(serde_json::json!({}));
    assert_eq!(classify(&value), (false, false, false));
}

#[test]
fn test_classifies_custom_error_as_plain_exception_only() {
    let value = Throwable::foreign(CustomError::new("my custom error."));
    assert_eq!(classify(&value), (true, false, false));
}

// ============================================================
// Serialization
// ============================================================

#[test]
fn test_serialize_defines_all_fields_for_every_input() {
    let values = vec![
        Throwable::from(Exception::new("message")),
        Throwable::from(Exception::with_kind(ExceptionKind::Syntax, "message")),
        Throwable::foreign(CustomError::new("my custom error.")),
        Throwable::from("message"),
        Throwable::from(5),
        Throwable::from(serde_json::json!({})),
        Throwable::Opaque,
    ];

    for value in &values {
        let record = serialize(value);
        assert!(!record.name.is_empty(), "value {:?}", value);
        assert!(!record.stack.is_empty(), "value {:?}", value);
        assert!(
            ExceptionKind::from_name(&record.name).is_some(),
            "value {:?} produced unrecognized name {:?}",
            value,
            record.name
        );
    }
}

#[test]
fn test_serialize_custom_error_flattens_to_base_name() {
    let record = serialize(&Throwable::foreign(CustomError::new("my custom error.")));

    assert_eq!(record.name, "Error");
    assert_eq!(record.message, "my custom error.");
}

#[test]
fn test_serialize_keeps_subtype_names() {
    let cases = vec![
        (ExceptionKind::Eval, "EvalError"),
        (ExceptionKind::Range, "RangeError"),
        (ExceptionKind::Reference, "ReferenceError"),
        (ExceptionKind::Syntax, "SyntaxError"),
        (ExceptionKind::Type, "TypeError"),
        (ExceptionKind::Uri, "URIError"),
    ];

    for (kind, expected_name) in cases {
        let record = serialize(&Throwable::from(Exception::with_kind(kind, "message")));
        assert_eq!(record.name, expected_name);
    }
}

// ============================================================
// Round trips
// ============================================================

#[test]
fn test_round_trip_plain_exception() {
    let original = Exception::new("message");
    let expected_stack = original.stack().to_string();

    let json = serialize(&Throwable::from(original))
        .to_json()
        .expect("Failed to encode record");
    let record = SerializedException::from_json(&json).expect("Failed to decode record");
    let revived = deserialize(record);

    assert_eq!(revived.name(), "Error");
    assert_eq!(revived.message(), "message");
    assert_eq!(revived.stack(), expected_stack);
    assert_eq!(classify(&Throwable::from(revived)), (true, false, true));
}

#[test]
fn test_round_trip_builtin_subtype() {
    let original = Exception::with_kind(ExceptionKind::Syntax, "message");
    let expected_stack = original.stack().to_string();

    let record = serialize(&Throwable::from(original));
    let revived = deserialize(record);

    assert_eq!(revived.kind(), ExceptionKind::Syntax);
    assert_eq!(revived.name(), "SyntaxError");
    assert_eq!(revived.message(), "message");
    assert_eq!(revived.stack(), expected_stack);
    assert_eq!(classify(&Throwable::from(revived)), (true, true, false));
}

#[test]
fn test_round_trip_number_becomes_plain_exception() {
    let record = serialize(&Throwable::from(5));
    let revived = deserialize(record);

    assert_eq!(revived.name(), "Error");
    assert_eq!(revived.message(), "5");
    assert!(!revived.stack().is_empty());
    assert_eq!(classify(&Throwable::from(revived)), (true, false, true));
}

#[test]
fn test_round_trip_string_becomes_plain_exception() {
    let record = serialize(&Throwable::from("message"));
    let revived = deserialize(record);

    assert_eq!(revived.name(), "Error");
    assert_eq!(revived.message(), "message");
    assert_eq!(classify(&Throwable::from(revived)), (true, false, true));
}

#[test]
fn test_round_trip_custom_error_becomes_plain_exception() {
    let record = serialize(&Throwable::foreign(CustomError::new("my custom error.")));
    let revived = deserialize(record);

    assert_eq!(revived.name(), "Error");
    assert_eq!(revived.message(), "my custom error.");
    assert_eq!(classify(&Throwable::from(revived)), (true, false, true));
}

#[test]
fn test_second_hop_is_stable() {
    let record = serialize(&Throwable::from(Exception::with_kind(
        ExceptionKind::Range,
        "out of range",
    )));
    let after_first_hop = record.clone();

    // Revive, then send the same failure across another boundary.
    let revived = deserialize(record);
    let after_second_hop = serialize(&Throwable::from(revived));

    assert_eq!(after_second_hop, after_first_hop);
}

// ============================================================
// Records from other runtimes
// ============================================================

#[test]
fn test_record_with_builtin_name_from_another_runtime() {
    let json = r#"{"name":"TypeError","message":"x is not a function","stack":"TypeError: x is not a function\n    at <anonymous>:1:1"}"#;

    let record = SerializedException::from_json(json).expect("Failed to decode record");
    let revived = deserialize(record);

    assert_eq!(revived.kind(), ExceptionKind::Type);
    assert_eq!(revived.message(), "x is not a function");
    assert_eq!(
        revived.stack(),
        "TypeError: x is not a function\n    at <anonymous>:1:1"
    );
}

#[test]
fn test_record_with_unknown_name_falls_back_to_base() {
    let json = r#"{"name":"DataCloneError","message":"could not clone","stack":"DataCloneError: could not clone\n    at structuredClone"}"#;

    let record = SerializedException::from_json(json).expect("Failed to decode record");
    let revived = deserialize(record);

    // The unknown kind is dropped, the evidence is not.
    assert_eq!(revived.name(), "Error");
    assert_eq!(revived.message(), "could not clone");
    assert!(revived.stack().contains("DataCloneError"));
}
