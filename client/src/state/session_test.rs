use super::*;
use crate::util::storage::MemoryStorage;

fn ana(role: Option<Role>) -> SessionUser {
    SessionUser {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        lastname: "Lopez".to_owned(),
        email: "a@x.com".to_owned(),
        phone_number: None,
        role,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_logged_out_and_not_hydrated() {
    let state = SessionState::default();
    assert!(state.user().is_none());
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_hydrated());
    assert_eq!(state.role(), None);
}

// =============================================================
// set_auth
// =============================================================

#[test]
fn set_auth_sets_identity_and_persists_pair() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.set_auth(&storage, ana(Some(Role::User)), "tok123".to_owned());

    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("tok123"));
    assert_eq!(state.role(), Some(Role::User));

    let raw = storage.get(STORAGE_KEY).unwrap();
    let stored: PersistedSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, PersistedSession { user: ana(Some(Role::User)), token: "tok123".to_owned() });
}

#[test]
fn persisted_record_uses_api_field_names() {
    let storage = MemoryStorage::new();
    let mut user = ana(Some(Role::Admin));
    user.phone_number = Some("999111222".to_owned());
    SessionState::default().set_auth(&storage, user, "tok".to_owned());

    let value: serde_json::Value = serde_json::from_str(&storage.get(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(value["user"]["phoneNumber"], "999111222");
    assert_eq!(value["user"]["role"], "ADMIN");
    assert_eq!(value["token"], "tok");
}

// =============================================================
// hydrate_from_storage
// =============================================================

#[test]
fn hydrate_without_record_is_missing_and_hydrated() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    assert_eq!(state.hydrate_from_storage(&storage), HydrateOutcome::Missing);
    assert!(state.is_hydrated());
    assert!(!state.is_authenticated());
}

#[test]
fn hydrate_twice_with_unchanged_storage_is_idempotent() {
    let storage = MemoryStorage::new();
    SessionState::default().set_auth(&storage, ana(Some(Role::User)), "tok123".to_owned());

    let mut state = SessionState::default();
    assert_eq!(state.hydrate_from_storage(&storage), HydrateOutcome::Restored);
    let first = state.clone();
    assert_eq!(state.hydrate_from_storage(&storage), HydrateOutcome::Restored);
    assert_eq!(state, first);
    assert!(state.is_hydrated());
}

#[test]
fn set_auth_then_fresh_state_hydrates_same_identity() {
    let storage = MemoryStorage::new();
    let mut original = SessionState::default();
    original.set_auth(&storage, ana(Some(Role::Admin)), "tok123".to_owned());

    let mut reloaded = SessionState::default();
    reloaded.hydrate_from_storage(&storage.clone());
    assert_eq!(reloaded.user(), Some(&ana(Some(Role::Admin))));
    assert_eq!(reloaded.token(), Some("tok123"));
    assert!(reloaded.is_authenticated());
}

#[test]
fn hydrate_malformed_text_deletes_record_and_logs_out() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "definitely {not json");

    let mut state = SessionState::default();
    let outcome = state.hydrate_from_storage(&storage);

    assert!(matches!(outcome, HydrateOutcome::Corrupt(SessionError::Corrupt(_))));
    assert!(state.is_hydrated());
    assert!(!state.is_authenticated());
    assert!(!storage.contains(STORAGE_KEY));
}

#[test]
fn hydrate_record_without_token_is_corrupt() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "{}");
    let mut state = SessionState::default();
    assert!(matches!(state.hydrate_from_storage(&storage), HydrateOutcome::Corrupt(_)));
    assert!(!storage.contains(STORAGE_KEY));
    assert!(state.user().is_none());
}

#[test]
fn hydrate_record_with_blank_token_is_corrupt() {
    let storage = MemoryStorage::new();
    storage.set(
        STORAGE_KEY,
        r#"{"user":{"id":"1","name":"Ana","lastname":"Lopez","email":"a@x.com","role":"USER"},"token":""}"#,
    );
    let mut state = SessionState::default();
    assert_eq!(
        state.hydrate_from_storage(&storage),
        HydrateOutcome::Corrupt(SessionError::Corrupt("empty token".to_owned()))
    );
    assert!(!state.is_authenticated());
}

#[test]
fn hydrate_unknown_role_is_corrupt() {
    let storage = MemoryStorage::new();
    storage.set(
        STORAGE_KEY,
        r#"{"user":{"id":"1","name":"Ana","lastname":"Lopez","email":"a@x.com","role":"OWNER"},"token":"t"}"#,
    );
    let mut state = SessionState::default();
    assert!(matches!(state.hydrate_from_storage(&storage), HydrateOutcome::Corrupt(_)));
}

#[test]
fn hydrate_missing_role_restores_user_without_role() {
    let storage = MemoryStorage::new();
    storage.set(
        STORAGE_KEY,
        r#"{"user":{"id":"1","name":"Ana","lastname":"Lopez","email":"a@x.com","phoneNumber":null},"token":"t"}"#,
    );
    let mut state = SessionState::default();
    assert_eq!(state.hydrate_from_storage(&storage), HydrateOutcome::Restored);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), None);
}

/// Storage that accepts nothing, like `localStorage` in some private modes.
struct RejectingStorage;

impl DurableStorage for RejectingStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&self, _key: &str, _value: &str) {}
    fn remove(&self, _key: &str) {}
}

#[test]
fn hydrate_without_record_keeps_login_whose_write_was_rejected() {
    let mut state = SessionState::default();
    state.hydrate_from_storage(&RejectingStorage);
    state.set_auth(&RejectingStorage, ana(Some(Role::Admin)), "tok".to_owned());

    assert_eq!(state.hydrate_from_storage(&RejectingStorage), HydrateOutcome::Missing);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Admin));
}

#[test]
fn set_auth_bumps_login_generation() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    let before = state.login_generation();
    state.set_auth(&storage, ana(None), "a".to_owned());
    state.hydrate_from_storage(&storage);
    state.clear(&storage);
    assert_eq!(state.login_generation(), before + 1);
}

// =============================================================
// clear / logout outcome
// =============================================================

#[test]
fn clear_deletes_record_and_identity() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.set_auth(&storage, ana(Some(Role::Admin)), "tok123".to_owned());
    state.clear(&storage);

    assert!(state.user().is_none());
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
    assert!(!storage.contains(STORAGE_KEY));
}

#[test]
fn clear_keeps_hydrated_flag() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.hydrate_from_storage(&storage);
    state.clear(&storage);
    assert!(state.is_hydrated());
}

#[test]
fn clear_then_hydrate_stays_logged_out() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.set_auth(&storage, ana(Some(Role::Admin)), "t".to_owned());
    state.clear(&storage);
    assert_eq!(state.hydrate_from_storage(&storage), HydrateOutcome::Missing);
    assert!(!state.is_authenticated());
}

#[test]
fn logout_outcome_from_remote_result() {
    assert_eq!(LogoutOutcome::from(Ok(())), LogoutOutcome::Invalidated);
    assert_eq!(LogoutOutcome::from(Err(ApiError::Timeout)), LogoutOutcome::LocalOnly(ApiError::Timeout));
}

#[test]
fn display_name_joins_name_and_lastname() {
    assert_eq!(ana(None).display_name(), "Ana Lopez");
}
