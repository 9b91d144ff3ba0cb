//! Field-level validation failures.
//!
//! A [`FieldError`] names one offending input field and why it was rejected.
//! [`ValidationErrors`] aggregates every failure found in a single payload so
//! callers can report them together rather than one per round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field was absent.
    Missing,
    /// The field was present with the wrong JSON type (including `null`).
    Type,
    /// The value fell outside the permitted length bounds.
    Length,
    /// The value had the right shape but is not an accepted value.
    Value,
}

/// A single rejected field.
///
/// # Examples
/// ```
/// use preferences_backend::domain::{FieldError, FieldErrorKind};
///
/// let error = FieldError::unsupported("theme", "Unsupported theme: blue");
/// assert_eq!(error.field(), "theme");
/// assert_eq!(error.kind(), FieldErrorKind::Value);
/// assert_eq!(error.to_string(), "theme: Unsupported theme: blue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldError {
    field: String,
    kind: FieldErrorKind,
    reason: String,
}

impl FieldError {
    /// Construct a field error from its parts.
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// The field was not supplied.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::Missing, "field required")
    }

    /// The field was supplied with the wrong type.
    pub fn wrong_type(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::Type, reason)
    }

    /// The field violated a length bound.
    pub fn length(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::Length, reason)
    }

    /// The field held a value outside the accepted set.
    pub fn unsupported(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::Value, reason)
    }

    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Failure category.
    #[must_use]
    pub fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    /// Human-readable reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for FieldError {}

/// Every field failure found in one payload, in the order they were checked.
///
/// Validators only return this type when at least one field failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Borrow the collected errors.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        self.0.as_slice()
    }

    /// Number of rejected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field was rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field() == field)
    }

    /// Consume the collection and return the underlying errors.
    #[must_use]
    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    fn from(value: FieldError) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn summary_joins_fields_in_order() {
        let errors: ValidationErrors = [
            FieldError::unsupported("language", "Unsupported language: xx"),
            FieldError::unsupported("theme", "Unsupported theme: blue"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.to_string(),
            "language: Unsupported language: xx; theme: Unsupported theme: blue"
        );
    }

    #[rstest]
    fn for_field_finds_matching_error() {
        let errors = ValidationErrors::from(FieldError::missing("theme"));

        let found = errors.for_field("theme").expect("theme error");
        assert_eq!(found.kind(), FieldErrorKind::Missing);
        assert_eq!(found.reason(), "field required");
        assert!(errors.for_field("language").is_none());
    }

    #[rstest]
    fn serialises_as_plain_list() {
        let errors = ValidationErrors::from(FieldError::wrong_type(
            "notifications_enabled",
            "must be a boolean",
        ));

        let value = serde_json::to_value(&errors).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!([{
                "field": "notifications_enabled",
                "kind": "type",
                "reason": "must be a boolean",
            }])
        );
    }
}
