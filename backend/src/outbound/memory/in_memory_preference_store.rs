//! In-memory adapter for the preference store port.
//!
//! All records live in one `HashMap` behind an `RwLock`. Reads share the
//! lock; every mutation holds the write guard across its existence check and
//! the map operation, which makes check-then-mutate atomic.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::domain::ports::{PreferenceStore, PreferenceStoreError};
use crate::domain::{PreferenceRecord, UserId};

/// Process-local [`PreferenceStore`].
///
/// Construct one per process and share it behind an `Arc`. Tests build their
/// own instances so nothing leaks between them.
///
/// # Examples
/// ```
/// use preferences_backend::domain::ports::PreferenceStore;
/// use preferences_backend::domain::{Language, PreferenceRecord, Theme, UserId};
/// use preferences_backend::outbound::memory::InMemoryPreferenceStore;
///
/// let store = InMemoryPreferenceStore::new();
/// let user = UserId::new("johndoe").expect("valid id");
/// let record = PreferenceRecord {
///     language: Language::En,
///     notifications_enabled: true,
///     theme: Theme::Light,
/// };
///
/// store.create(&user, record).expect("first create");
/// assert!(store.create(&user, record).is_err());
/// assert_eq!(store.get(&user).expect("stored"), record);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    records: RwLock<HashMap<UserId, PreferenceRecord>>,
}

impl InMemoryPreferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned guard is still consistent: each mutation is a single map
    // operation, so a panicking holder cannot leave a partial write behind.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<UserId, PreferenceRecord>> {
        self.records.read().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned preference store lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<UserId, PreferenceRecord>> {
        self.records.write().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned preference store lock");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn create(
        &self,
        user_id: &UserId,
        record: PreferenceRecord,
    ) -> Result<PreferenceRecord, PreferenceStoreError> {
        match self.write().entry(user_id.clone()) {
            Entry::Occupied(_) => Err(PreferenceStoreError::conflict(user_id.clone())),
            Entry::Vacant(slot) => Ok(*slot.insert(record)),
        }
    }

    fn get(&self, user_id: &UserId) -> Result<PreferenceRecord, PreferenceStoreError> {
        self.read()
            .get(user_id)
            .copied()
            .ok_or_else(|| PreferenceStoreError::not_found(user_id.clone()))
    }

    fn update(
        &self,
        user_id: &UserId,
        record: PreferenceRecord,
    ) -> Result<PreferenceRecord, PreferenceStoreError> {
        let mut records = self.write();
        let stored = records
            .get_mut(user_id)
            .ok_or_else(|| PreferenceStoreError::not_found(user_id.clone()))?;
        *stored = record;
        Ok(record)
    }

    fn delete(&self, user_id: &UserId) -> Result<(), PreferenceStoreError> {
        self.write()
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| PreferenceStoreError::not_found(user_id.clone()))
    }
}
