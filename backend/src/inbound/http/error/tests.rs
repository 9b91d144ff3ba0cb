//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{FieldError, ValidationErrors};
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn validation_failure() -> Error {
    let errors: ValidationErrors = [
        FieldError::unsupported("language", "Unsupported language: xx"),
        FieldError::unsupported("theme", "Unsupported theme: blue"),
    ]
    .into_iter()
    .collect();
    Error::validation(errors).with_trace_id(TRACE_ID)
}

#[rstest]
#[case::validation(ErrorCode::ValidationFailed, StatusCode::UNPROCESSABLE_ENTITY)]
#[case::not_found(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case::conflict(ErrorCode::Conflict, StatusCode::CONFLICT)]
#[case::internal(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(status_for(code), status);
    assert_eq!(
        ResponseError::status_code(&Error::new(code, "detail")),
        status
    );
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn validation_failures_keep_field_errors(validation_failure: Error) {
    let payload = assert_error_response(
        validation_failure,
        StatusCode::UNPROCESSABLE_ENTITY,
        Some(TRACE_ID),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::ValidationFailed);
    let fields: Vec<&str> = payload.errors().iter().map(FieldError::field).collect();
    assert_eq!(fields, vec!["language", "theme"]);
    assert!(payload.detail().contains("Unsupported language: xx"));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("lock table exploded").with_trace_id(TRACE_ID);

    let payload =
        assert_error_response(error, StatusCode::INTERNAL_SERVER_ERROR, Some(TRACE_ID)).await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.detail(), REDACTED_DETAIL);
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::conflict("Preferences for user 'janedoe' already exist.");

    let payload = assert_error_response(error, StatusCode::CONFLICT, None).await;
    assert_eq!(payload.code(), ErrorCode::Conflict);
    assert_eq!(
        payload.detail(),
        "Preferences for user 'janedoe' already exist."
    );
    assert_eq!(payload.trace_id(), None);
    assert!(payload.errors().is_empty());
}

#[rstest]
fn redaction_leaves_client_errors_untouched() {
    let error = Error::not_found("Preferences for user 'unknown' not found.");
    assert_eq!(redact_if_internal(&error), error);
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.detail(), REDACTED_DETAIL);
    assert_eq!(err.trace_id(), None);
}
