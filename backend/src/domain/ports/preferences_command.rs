//! Driving port for preference mutations.
//!
//! Inbound adapters call this port with already validated input; it never
//! sees raw payloads.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserPreferences};

/// Domain use-case port for creating, replacing and deleting preferences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesCommand: Send + Sync {
    /// Store a new record, failing with a conflict when one already exists.
    async fn create(&self, preferences: UserPreferences) -> Result<UserPreferences, Error>;

    /// Replace an existing record, failing with not found when absent.
    async fn update(&self, preferences: UserPreferences) -> Result<UserPreferences, Error>;

    /// Remove an existing record, failing with not found when absent.
    async fn delete(&self, user_id: &UserId) -> Result<(), Error>;
}
