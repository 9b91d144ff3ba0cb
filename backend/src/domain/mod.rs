//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed preference model, the ports adapters
//! implement, and the service that maps store outcomes onto domain errors.
//! Nothing in this module depends on HTTP.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - FieldError / ValidationErrors: aggregated field validation failures.
//! - PreferenceRecord, Language, Theme: the validated preference model.
//! - UserId: non-empty store key.
//! - PreferencesService: driving-port implementation over a store port.

pub mod error;
pub mod field_error;
pub mod ports;
pub mod preferences;
pub mod preferences_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::field_error::{FieldError, FieldErrorKind, ValidationErrors};
pub use self::preferences::{
    LANGUAGE_FIELD, LANGUAGE_LENGTH, Language, LengthBounds, NOTIFICATIONS_FIELD, PAYLOAD_FIELD,
    ParseLanguageError, ParseThemeError, PreferenceRecord, THEME_FIELD, THEME_LENGTH, Theme,
    UserPreferences, validate_preferences,
};
pub use self::preferences_service::PreferencesService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USER_ID_FIELD, UserId, UserIdValidationError};
