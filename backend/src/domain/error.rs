//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code; nothing in this module knows about HTTP.
//!
//! Wire shape (also used by the HTTP adapter as the response body):
//!
//! ```json
//! {
//!   "code": "validation_failed",
//!   "detail": "language: Unsupported language: xx",
//!   "errors": [{"field": "language", "kind": "value", "reason": "Unsupported language: xx"}],
//!   "trace_id": "00000000-0000-0000-0000-000000000000"
//! }
//! ```
//!
//! `errors` is only emitted for validation failures and `trace_id` only when
//! a request scope was active while the error was built.

use serde::{Deserialize, Serialize};

use super::{FieldError, TraceId, ValidationErrors};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// One or more input fields were rejected.
    ValidationFailed,
    /// No preferences exist for the requested user.
    NotFound,
    /// Preferences already exist for the requested user.
    Conflict,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `detail` is non-empty once trimmed of whitespace.
/// - `trace_id`, when present, is non-empty.
///
/// # Examples
/// ```
/// use preferences_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Preferences for user 'unknown' not found.");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    detail: String,
    errors: Vec<FieldError>,
    trace_id: Option<String>,
}

/// Validation errors raised by the [`Error`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// The detail message was empty or whitespace.
    EmptyDetail,
    /// The trace identifier was empty or whitespace.
    EmptyTraceId,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDetail => write!(f, "error detail must not be empty"),
            Self::EmptyTraceId => write!(f, "trace identifier must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if the detail is blank.
    ///
    /// Captures the current [`TraceId`] when one is in scope.
    ///
    /// # Panics
    /// Panics when `detail` is empty after trimming. Use [`Error::try_new`]
    /// for caller-supplied text.
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        match Self::try_new(code, detail) {
            Ok(value) => value,
            Err(err) => panic!("error details must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the detail text.
    pub fn try_new(code: ErrorCode, detail: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let detail = detail.into();
        if detail.trim().is_empty() {
            return Err(ErrorValidationError::EmptyDetail);
        }
        Ok(Self {
            code,
            detail,
            errors: Vec::new(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description returned to clients.
    #[must_use]
    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }

    /// Field errors attached to a validation failure.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        self.errors.as_slice()
    }

    /// Correlation identifier captured when the error was created.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier, panicking if it is blank.
    ///
    /// # Panics
    /// Panics when `trace_id` is empty after trimming.
    #[must_use]
    pub fn with_trace_id(self, trace_id: impl Into<String>) -> Self {
        match self.try_with_trace_id(trace_id) {
            Ok(value) => value,
            Err(err) => panic!("trace identifiers must satisfy validation: {err}"),
        }
    }

    /// Attach a trace identifier after validating it.
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(trace_id);
        Ok(self)
    }

    /// Build a validation failure carrying every rejected field.
    ///
    /// The detail lists each `field: reason` pair joined by `"; "`.
    ///
    /// # Examples
    /// ```
    /// use preferences_backend::domain::{Error, ErrorCode, FieldError, ValidationErrors};
    ///
    /// let errors = ValidationErrors::from(FieldError::missing("theme"));
    /// let err = Error::validation(errors);
    /// assert_eq!(err.code(), ErrorCode::ValidationFailed);
    /// assert_eq!(err.detail(), "theme: field required");
    /// ```
    pub fn validation(errors: ValidationErrors) -> Self {
        let detail = if errors.is_empty() {
            "request validation failed".to_owned()
        } else {
            errors.to_string()
        };
        let mut error = Self::new(ErrorCode::ValidationFailed, detail);
        error.errors = errors.into_inner();
        error
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, detail)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, detail)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, detail)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for Error {}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        Self::validation(value)
    }
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        Self::validation(ValidationErrors::from(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorDto {
    code: ErrorCode,
    detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            detail: value.detail,
            errors: value.errors,
            trace_id: value.trace_id,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            detail,
            errors,
            trace_id,
        } = value;

        if detail.trim().is_empty() {
            return Err(ErrorValidationError::EmptyDetail);
        }
        let error = Self {
            code,
            detail,
            errors,
            trace_id: None,
        };
        match trace_id {
            Some(id) => error.try_with_trace_id(id),
            None => Ok(error),
        }
    }
}

#[cfg(test)]
mod tests;
