//! Tests for the preferences service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockPreferenceStore;
use crate::domain::{ErrorCode, Language, PreferenceRecord, Theme, TraceId};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn user_id() -> UserId {
    UserId::new("johndoe").expect("valid user id")
}

#[fixture]
fn record() -> PreferenceRecord {
    PreferenceRecord {
        language: Language::En,
        notifications_enabled: true,
        theme: Theme::Light,
    }
}

fn make_service(store: MockPreferenceStore) -> PreferencesService<MockPreferenceStore> {
    PreferencesService::new(Arc::new(store))
}

#[rstest]
#[tokio::test]
async fn create_returns_stored_record(user_id: UserId, record: PreferenceRecord) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_create()
        .with(eq(user_id.clone()), eq(record))
        .times(1)
        .return_once(|_, stored| Ok(stored));

    let service = make_service(store);
    let created = service
        .create(UserPreferences::new(user_id.clone(), record))
        .await
        .expect("create succeeds");

    assert_eq!(created.user_id, user_id);
    assert_eq!(created.record, record);
}

#[rstest]
#[tokio::test]
async fn create_maps_conflict(user_id: UserId, record: PreferenceRecord) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_create()
        .times(1)
        .return_once(|id, _| Err(PreferenceStoreError::conflict(id.clone())));

    let service = make_service(store);
    let error = service
        .create(UserPreferences::new(user_id, record))
        .await
        .expect_err("conflict");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(
        error.detail(),
        "Preferences for user 'johndoe' already exist."
    );
}

#[rstest]
#[tokio::test]
async fn fetch_maps_not_found(user_id: UserId) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_get()
        .times(1)
        .return_once(|id| Err(PreferenceStoreError::not_found(id.clone())));

    let service = make_service(store);
    let error = service.fetch(&user_id).await.expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.detail(), "Preferences for user 'johndoe' not found.");
}

#[rstest]
#[tokio::test]
async fn fetch_pairs_record_with_user(user_id: UserId, record: PreferenceRecord) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_get()
        .with(eq(user_id.clone()))
        .times(1)
        .return_once(move |_| Ok(record));

    let service = make_service(store);
    let fetched = service.fetch(&user_id).await.expect("fetch succeeds");

    assert_eq!(fetched, UserPreferences::new(user_id, record));
}

#[rstest]
#[tokio::test]
async fn update_passes_whole_record_to_store(user_id: UserId) {
    let replacement = PreferenceRecord {
        language: Language::De,
        notifications_enabled: false,
        theme: Theme::Dark,
    };
    let mut store = MockPreferenceStore::new();
    store
        .expect_update()
        .with(eq(user_id.clone()), eq(replacement))
        .times(1)
        .return_once(|_, stored| Ok(stored));

    let service = make_service(store);
    let updated = service
        .update(UserPreferences::new(user_id, replacement))
        .await
        .expect("update succeeds");

    assert_eq!(updated.record, replacement);
}

#[rstest]
#[tokio::test]
async fn update_maps_not_found(user_id: UserId, record: PreferenceRecord) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_update()
        .times(1)
        .return_once(|id, _| Err(PreferenceStoreError::not_found(id.clone())));

    let service = make_service(store);
    let error = service
        .update(UserPreferences::new(user_id, record))
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case::deleted(Ok(()), None)]
#[case::missing(
    Err(PreferenceStoreError::not_found(UserId::new("johndoe").expect("valid user id"))),
    Some(ErrorCode::NotFound)
)]
#[tokio::test]
async fn delete_forwards_store_outcome(
    user_id: UserId,
    #[case] outcome: Result<(), PreferenceStoreError>,
    #[case] expected: Option<ErrorCode>,
) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_delete()
        .with(eq(user_id.clone()))
        .times(1)
        .return_once(move |_| outcome);

    let service = make_service(store);
    let result = service.delete(&user_id).await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}

#[rstest]
#[tokio::test]
async fn mapped_errors_carry_the_request_trace_id(user_id: UserId) {
    let mut store = MockPreferenceStore::new();
    store
        .expect_get()
        .return_once(|id| Err(PreferenceStoreError::not_found(id.clone())));
    let service = make_service(store);
    let trace_id = TraceId::generate();
    let expected = trace_id.to_string();

    let error = TraceId::scope(trace_id, async { service.fetch(&user_id).await })
        .await
        .expect_err("not found");

    assert_eq!(error.trace_id(), Some(expected.as_str()));
}
