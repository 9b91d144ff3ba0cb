//! Port for preference record storage.
//!
//! A [`PreferenceStore`] owns the mapping from [`UserId`] to
//! [`PreferenceRecord`]. Every operation that checks for a key and then
//! mutates the map must do both atomically: two concurrent `create` calls for
//! the same user yield exactly one success.

use crate::domain::{PreferenceRecord, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by preference store adapters.
    pub enum PreferenceStoreError {
        /// A record already exists for the user.
        Conflict { user_id: UserId } =>
            "Preferences for user '{user_id}' already exist.",
        /// No record exists for the user.
        NotFound { user_id: UserId } =>
            "Preferences for user '{user_id}' not found.",
    }
}

/// Port for creating, reading, replacing and removing preference records.
///
/// Implementations perform no I/O, so the methods are synchronous and safe to
/// call from async handlers.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Insert `record` for `user_id`.
    ///
    /// Fails with [`PreferenceStoreError::Conflict`] when a record already
    /// exists; the existing record is left untouched.
    fn create(
        &self,
        user_id: &UserId,
        record: PreferenceRecord,
    ) -> Result<PreferenceRecord, PreferenceStoreError>;

    /// Fetch the record for `user_id` without mutating the store.
    fn get(&self, user_id: &UserId) -> Result<PreferenceRecord, PreferenceStoreError>;

    /// Replace the whole record for `user_id`.
    ///
    /// Fails with [`PreferenceStoreError::NotFound`] when no record exists;
    /// an update never creates one.
    fn update(
        &self,
        user_id: &UserId,
        record: PreferenceRecord,
    ) -> Result<PreferenceRecord, PreferenceStoreError>;

    /// Remove the record for `user_id`.
    fn delete(&self, user_id: &UserId) -> Result<(), PreferenceStoreError>;
}
