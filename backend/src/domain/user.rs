//! User identifier used as the preference store key.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldError;

/// Field name reported when a user identifier is rejected.
pub const USER_ID_FIELD: &str = "user_id";

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdValidationError {
    /// The identifier was empty or only whitespace.
    Empty,
}

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user id must not be empty"),
        }
    }
}

impl std::error::Error for UserIdValidationError {}

impl From<UserIdValidationError> for FieldError {
    fn from(value: UserIdValidationError) -> Self {
        match value {
            UserIdValidationError::Empty => FieldError::length(USER_ID_FIELD, value.to_string()),
        }
    }
}

/// Opaque, non-empty user identifier.
///
/// The identifier is taken verbatim from the caller; only blank values are
/// rejected.
///
/// # Examples
/// ```
/// use preferences_backend::domain::UserId;
///
/// let id = UserId::new("johndoe").expect("valid id");
/// assert_eq!(id.as_ref(), "johndoe");
/// assert!(UserId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserIdValidationError::Empty);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
