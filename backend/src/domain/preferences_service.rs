//! Preferences domain service.
//!
//! Implements the driving ports over a [`PreferenceStore`] and translates
//! store outcomes into domain [`Error`]s. Conflicts and missing records keep
//! the store's message, which names the user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    PreferenceStore, PreferenceStoreError, PreferencesCommand, PreferencesQuery,
};
use crate::domain::{Error, UserId, UserPreferences};

fn map_store_error(error: PreferenceStoreError) -> Error {
    match &error {
        PreferenceStoreError::Conflict { user_id } => {
            info!(%user_id, "preferences already exist");
            Error::conflict(error.to_string())
        }
        PreferenceStoreError::NotFound { user_id } => {
            info!(%user_id, "preferences not found");
            Error::not_found(error.to_string())
        }
    }
}

/// Preferences service implementing [`PreferencesCommand`] and
/// [`PreferencesQuery`].
pub struct PreferencesService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for PreferencesService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ?Sized> PreferencesService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> PreferencesCommand for PreferencesService<S>
where
    S: PreferenceStore + ?Sized,
{
    async fn create(&self, preferences: UserPreferences) -> Result<UserPreferences, Error> {
        let UserPreferences { user_id, record } = preferences;
        let record = self
            .store
            .create(&user_id, record)
            .map_err(map_store_error)?;
        debug!(%user_id, "preferences created");
        Ok(UserPreferences::new(user_id, record))
    }

    async fn update(&self, preferences: UserPreferences) -> Result<UserPreferences, Error> {
        let UserPreferences { user_id, record } = preferences;
        let record = self
            .store
            .update(&user_id, record)
            .map_err(map_store_error)?;
        debug!(%user_id, "preferences replaced");
        Ok(UserPreferences::new(user_id, record))
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), Error> {
        self.store.delete(user_id).map_err(map_store_error)?;
        debug!(%user_id, "preferences deleted");
        Ok(())
    }
}

#[async_trait]
impl<S> PreferencesQuery for PreferencesService<S>
where
    S: PreferenceStore + ?Sized,
{
    async fn fetch(&self, user_id: &UserId) -> Result<UserPreferences, Error> {
        let record = self.store.get(user_id).map_err(map_store_error)?;
        Ok(UserPreferences::new(user_id.clone(), record))
    }
}

#[cfg(test)]
#[path = "preferences_service_tests.rs"]
mod tests;
