use super::*;
use crate::state::session::{Role, STORAGE_KEY};
use crate::util::storage::MemoryStorage;

fn admin() -> SessionUser {
    SessionUser {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        lastname: "Lopez".to_owned(),
        email: "a@x.com".to_owned(),
        phone_number: None,
        role: Some(Role::Admin),
    }
}

#[test]
fn new_store_starts_empty_and_unhydrated() {
    let store = SessionStore::new(MemoryStorage::new());
    let state = store.get();
    assert!(!state.is_hydrated());
    assert!(!state.is_authenticated());
}

#[test]
fn set_auth_then_new_store_hydrates_same_session() {
    let storage = MemoryStorage::new();
    let first = SessionStore::new(storage.clone());
    first.set_auth(admin(), "tok123".to_owned());

    let reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.hydrate_from_storage(), HydrateOutcome::Restored);
    reloaded.with(|s| {
        assert_eq!(s.user(), Some(&admin()));
        assert_eq!(s.token(), Some("tok123"));
        assert!(s.is_authenticated());
    });
}

#[test]
fn hydrate_corrupt_record_reports_and_recovers() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "<<garbage>>");
    let store = SessionStore::new(storage.clone());

    assert!(matches!(store.hydrate_from_storage(), HydrateOutcome::Corrupt(_)));
    assert!(store.with(SessionState::is_hydrated));
    assert!(!store.with(SessionState::is_authenticated));
    assert!(!storage.contains(STORAGE_KEY));
}

#[test]
fn logout_clears_local_session_when_remote_fails() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.hydrate_from_storage();
    store.set_auth(admin(), "tok123".to_owned());

    let outcome = futures::executor::block_on(
        store.logout_with(async { Err(ApiError::Network("offline".to_owned())) }),
    );

    assert_eq!(outcome, LogoutOutcome::LocalOnly(ApiError::Network("offline".to_owned())));
    let state = store.get();
    assert!(state.user().is_none());
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
    assert!(state.is_hydrated());
    assert!(!storage.contains(STORAGE_KEY));
}

#[test]
fn logout_success_clears_local_session() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.set_auth(admin(), "tok123".to_owned());

    let outcome = futures::executor::block_on(store.logout_with(async { Ok(()) }));

    assert_eq!(outcome, LogoutOutcome::Invalidated);
    assert!(!store.with(SessionState::is_authenticated));
    assert!(!storage.contains(STORAGE_KEY));
}

#[test]
fn login_during_pending_logout_is_kept() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.hydrate_from_storage();
    store.set_auth(admin(), "tok123".to_owned());

    let remote = async move {
        store.set_auth(admin(), "tok456".to_owned());
        Err(ApiError::Timeout)
    };
    let outcome = futures::executor::block_on(store.logout_with(remote));

    assert_eq!(outcome, LogoutOutcome::LocalOnly(ApiError::Timeout));
    assert_eq!(store.with(|s| s.token().map(str::to_owned)), Some("tok456".to_owned()));
    assert!(storage.contains(STORAGE_KEY));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_without_browser_still_clears() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.set_auth(admin(), "tok123".to_owned());

    let outcome = futures::executor::block_on(store.logout());

    assert_eq!(outcome, LogoutOutcome::LocalOnly(ApiError::Unavailable));
    assert!(!storage.contains(STORAGE_KEY));
}
