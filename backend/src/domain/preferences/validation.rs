//! Validation of raw preference payloads.
//!
//! Every field is checked independently and all failures are returned
//! together. A string field is first checked for presence, then type, then
//! length, and only then for membership of its value set.

use serde_json::{Map, Value};

use super::{Language, PreferenceRecord, Theme};
use crate::domain::{FieldError, ValidationErrors};

/// Field name for the interface language.
pub const LANGUAGE_FIELD: &str = "language";
/// Field name for the notification flag.
pub const NOTIFICATIONS_FIELD: &str = "notifications_enabled";
/// Field name for the colour theme.
pub const THEME_FIELD: &str = "theme";
/// Pseudo-field reported when the payload itself is malformed.
pub const PAYLOAD_FIELD: &str = "body";

/// Inclusive character-count bounds for a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Minimum number of characters.
    pub min: usize,
    /// Maximum number of characters.
    pub max: usize,
}

/// Length bounds applied to `language` before the value set is checked.
pub const LANGUAGE_LENGTH: LengthBounds = LengthBounds { min: 2, max: 10 };
/// Length bounds applied to `theme` before the value set is checked.
pub const THEME_LENGTH: LengthBounds = LengthBounds { min: 3, max: 32 };

/// Validate a raw JSON payload into a [`PreferenceRecord`].
///
/// Unknown fields are ignored. Errors are reported in the order `language`,
/// `notifications_enabled`, `theme`.
///
/// # Examples
///
/// ```
/// use preferences_backend::domain::{Language, Theme, validate_preferences};
/// use serde_json::json;
///
/// let record = validate_preferences(&json!({
///     "language": "en",
///     "notifications_enabled": true,
///     "theme": "light",
/// }))
/// .expect("valid payload");
/// assert_eq!(record.language, Language::En);
/// assert_eq!(record.theme, Theme::Light);
///
/// let errors = validate_preferences(&json!({
///     "language": "xx",
///     "notifications_enabled": true,
///     "theme": "blue",
/// }))
/// .expect_err("invalid payload");
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_preferences(payload: &Value) -> Result<PreferenceRecord, ValidationErrors> {
    let Some(fields) = payload.as_object() else {
        return Err(ValidationErrors::from(FieldError::wrong_type(
            PAYLOAD_FIELD,
            "payload must be a JSON object",
        )));
    };

    let language = language_field(fields);
    let notifications_enabled = bool_field(fields, NOTIFICATIONS_FIELD);
    let theme = theme_field(fields);

    match (language, notifications_enabled, theme) {
        (Ok(language), Ok(notifications_enabled), Ok(theme)) => Ok(PreferenceRecord {
            language,
            notifications_enabled,
            theme,
        }),
        (language, notifications_enabled, theme) => Err([
            language.err(),
            notifications_enabled.err(),
            theme.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

fn language_field(fields: &Map<String, Value>) -> Result<Language, FieldError> {
    let raw = bounded_string_field(fields, LANGUAGE_FIELD, LANGUAGE_LENGTH)?;
    raw.parse::<Language>()
        .map_err(|err| FieldError::unsupported(LANGUAGE_FIELD, err.to_string()))
}

fn theme_field(fields: &Map<String, Value>) -> Result<Theme, FieldError> {
    let raw = bounded_string_field(fields, THEME_FIELD, THEME_LENGTH)?;
    raw.parse::<Theme>()
        .map_err(|err| FieldError::unsupported(THEME_FIELD, err.to_string()))
}

fn bounded_string_field<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
    bounds: LengthBounds,
) -> Result<&'a str, FieldError> {
    let value = fields.get(field).ok_or_else(|| FieldError::missing(field))?;
    let text = value
        .as_str()
        .ok_or_else(|| FieldError::wrong_type(field, "must be a string"))?;

    let length = text.chars().count();
    if length < bounds.min {
        return Err(FieldError::length(
            field,
            format!("must be at least {} characters", bounds.min),
        ));
    }
    if length > bounds.max {
        return Err(FieldError::length(
            field,
            format!("must be at most {} characters", bounds.max),
        ));
    }
    Ok(text)
}

fn bool_field(fields: &Map<String, Value>, field: &'static str) -> Result<bool, FieldError> {
    fields
        .get(field)
        .ok_or_else(|| FieldError::missing(field))?
        .as_bool()
        .ok_or_else(|| FieldError::wrong_type(field, "must be a boolean"))
}
