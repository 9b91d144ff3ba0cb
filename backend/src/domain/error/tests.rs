//! Tests for domain error construction and serialisation.

use super::*;
use crate::domain::FieldErrorKind;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn two_field_errors() -> ValidationErrors {
    [
        FieldError::unsupported("language", "Unsupported language: xx"),
        FieldError::unsupported("theme", "Unsupported theme: blue"),
    ]
    .into_iter()
    .collect()
}

#[rstest]
fn try_new_rejects_blank_detail() {
    let result = Error::try_new(ErrorCode::Conflict, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyDetail)));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::internal("boom").try_with_trace_id(" ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::conflict("taken").trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn validation_error_lists_every_field(two_field_errors: ValidationErrors) {
    let error = Error::validation(two_field_errors);

    assert_eq!(error.code(), ErrorCode::ValidationFailed);
    assert_eq!(
        error.detail(),
        "language: Unsupported language: xx; theme: Unsupported theme: blue"
    );
    let fields: Vec<&str> = error.errors().iter().map(FieldError::field).collect();
    assert_eq!(fields, vec!["language", "theme"]);
}

#[rstest]
fn single_field_error_converts_to_validation_failure() {
    let error = Error::from(FieldError::length("user_id", "user id must not be empty"));
    assert_eq!(error.code(), ErrorCode::ValidationFailed);
    assert_eq!(error.errors().len(), 1);
    assert_eq!(error.errors()[0].kind(), FieldErrorKind::Length);
}

#[rstest]
fn serialises_conflict_without_optional_fields() {
    let error = Error::conflict("Preferences for user 'janedoe' already exist.");

    let value = serde_json::to_value(&error).expect("serialise");
    assert_eq!(
        value,
        json!({
            "code": "conflict",
            "detail": "Preferences for user 'janedoe' already exist.",
        })
    );
}

#[rstest]
fn serialises_validation_failure_with_errors(two_field_errors: ValidationErrors) {
    let error = Error::validation(two_field_errors).with_trace_id(TRACE_ID);

    let value = serde_json::to_value(&error).expect("serialise");
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("validation_failed")
    );
    assert_eq!(value.get("trace_id").and_then(Value::as_str), Some(TRACE_ID));
    let errors = value
        .get("errors")
        .and_then(Value::as_array)
        .expect("errors array");
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[1].get("reason").and_then(Value::as_str),
        Some("Unsupported theme: blue")
    );
}

#[rstest]
fn deserialisation_round_trips(two_field_errors: ValidationErrors) {
    let error = Error::validation(two_field_errors).with_trace_id(TRACE_ID);
    let json = serde_json::to_string(&error).expect("serialise");

    let parsed: Error = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(parsed, error);
}

#[rstest]
#[case::blank_detail(json!({"code": "not_found", "detail": "  "}))]
#[case::blank_trace(json!({"code": "not_found", "detail": "missing", "trace_id": ""}))]
#[case::unknown_field(json!({"code": "not_found", "detail": "missing", "extra": 1}))]
fn deserialisation_rejects_invalid_payloads(#[case] payload: Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}
