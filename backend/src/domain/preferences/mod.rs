//! User preference records and the closed value sets they draw from.
//!
//! A [`PreferenceRecord`] is only ever built from validated input (see
//! [`validate_preferences`]), and its language and theme are enums, so an
//! invalid record cannot be represented.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserId;

mod validation;

pub use validation::{
    LANGUAGE_FIELD, LANGUAGE_LENGTH, LengthBounds, NOTIFICATIONS_FIELD, PAYLOAD_FIELD,
    THEME_FIELD, THEME_LENGTH, validate_preferences,
};

/// Interface language.
///
/// # Examples
///
/// ```
/// # use preferences_backend::domain::Language;
/// let language: Language = "fr".parse().expect("supported");
/// assert_eq!(language, Language::Fr);
/// assert_eq!(language.as_str(), "fr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Italian.
    It,
    /// Chinese.
    Zh,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Self; 6] = [Self::En, Self::Es, Self::Fr, Self::De, Self::It, Self::Zh];

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a language outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    /// The rejected input value.
    pub input: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported language: {}", self.input)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| ParseLanguageError {
                input: s.to_owned(),
            })
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Every supported theme, in declaration order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a theme outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    /// The rejected input value.
    pub input: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported theme: {}", self.input)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParseThemeError {
                input: s.to_owned(),
            })
    }
}

/// A user's full set of preferences.
///
/// Updates replace the whole record; there is no field-level merge.
///
/// # Examples
///
/// ```
/// # use preferences_backend::domain::{Language, PreferenceRecord, Theme};
/// let record = PreferenceRecord {
///     language: Language::En,
///     notifications_enabled: true,
///     theme: Theme::Light,
/// };
///
/// let json = serde_json::to_value(record).expect("serialise");
/// assert_eq!(json["language"], "en");
/// assert_eq!(json["theme"], "light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Interface language.
    pub language: Language,
    /// Whether the user receives notifications.
    pub notifications_enabled: bool,
    /// Colour theme.
    pub theme: Theme,
}

/// A preference record paired with the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Owner of the record.
    pub user_id: UserId,
    /// The stored preferences.
    pub record: PreferenceRecord,
}

impl UserPreferences {
    /// Pair `record` with `user_id`.
    #[must_use]
    pub fn new(user_id: UserId, record: PreferenceRecord) -> Self {
        Self { user_id, record }
    }
}
