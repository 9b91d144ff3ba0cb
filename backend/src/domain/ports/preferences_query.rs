//! Driving port for preference reads.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserPreferences};

/// Domain use-case port for fetching a user's preferences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesQuery: Send + Sync {
    /// Fetch the stored record, failing with not found when absent.
    async fn fetch(&self, user_id: &UserId) -> Result<UserPreferences, Error>;
}
