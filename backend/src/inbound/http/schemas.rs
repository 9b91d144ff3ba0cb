//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter,
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// One or more input fields were rejected.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// No preferences exist for the user.
    #[schema(rename = "not_found")]
    NotFound,
    /// Preferences already exist for the user.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::FieldErrorKind`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldErrorKind)]
pub enum FieldErrorKindSchema {
    /// The field was absent.
    #[schema(rename = "missing")]
    Missing,
    /// The field had the wrong JSON type.
    #[schema(rename = "type")]
    Type,
    /// The value was outside its length bounds.
    #[schema(rename = "length")]
    Length,
    /// The value is not in the accepted set.
    #[schema(rename = "value")]
    Value,
}

/// OpenAPI schema for [`crate::domain::FieldError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorSchema {
    /// Name of the rejected field.
    #[schema(example = "language")]
    field: String,
    /// Failure category.
    kind: FieldErrorKindSchema,
    /// Human-readable reason.
    #[schema(example = "Unsupported language: xx")]
    reason: String,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    /// Human-readable description; lists every rejected field on validation
    /// failures.
    #[schema(example = "language: Unsupported language: xx")]
    detail: String,
    /// Rejected fields, present only for validation failures.
    errors: Option<Vec<FieldErrorSchema>>,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for the preference request body.
///
/// The handler validates the raw JSON itself so every field error can be
/// reported together.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PreferencesRequestSchema {
    /// Interface language.
    language: LanguageSchema,
    /// Whether notifications are enabled.
    notifications_enabled: bool,
    /// Colour theme.
    theme: ThemeSchema,
}

/// OpenAPI schema for [`crate::domain::Language`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Language)]
pub enum LanguageSchema {
    #[schema(rename = "en")]
    En,
    #[schema(rename = "es")]
    Es,
    #[schema(rename = "fr")]
    Fr,
    #[schema(rename = "de")]
    De,
    #[schema(rename = "it")]
    It,
    #[schema(rename = "zh")]
    Zh,
}

/// OpenAPI schema for [`crate::domain::Theme`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Theme)]
pub enum ThemeSchema {
    #[schema(rename = "light")]
    Light,
    #[schema(rename = "dark")]
    Dark,
}
