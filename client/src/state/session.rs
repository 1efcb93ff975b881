//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` per tab records who is logged in. It is persisted under
//! [`STORAGE_KEY`] on every `set_auth` and restored once at startup by
//! `hydrate_from_storage`. Route guards read it to decide between a loading
//! placeholder, a login redirect, and the protected view.
//!
//! DESIGN
//! ======
//! Transitions are plain synchronous methods that take the storage as an
//! argument. The reactive wrapper in `state::store` only sequences them, so
//! the invariants below are enforced (and tested) here:
//! - `user` and `token` are set together or cleared together.
//! - `is_hydrated` never returns to `false` once set.
//! - Every failure path ends logged out, never in an error state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ApiError;
use crate::util::storage::{DurableStorage, load_json, save_json};

/// Key of the persisted session record in durable storage.
pub const STORAGE_KEY: &str = "luaspets_auth";

/// Access role assigned by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// Identity record of the logged-in user, as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// `None` when the API omitted the role. Such users pass no role guard.
    #[serde(default)]
    pub role: Option<Role>,
}

impl SessionUser {
    /// "Name Lastname", for greetings.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.lastname).trim().to_owned()
    }
}

/// The `{user, token}` pair stored under [`STORAGE_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: SessionUser,
    pub token: String,
}

/// Session restoration failure. Recovered locally; never shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Result of one `hydrate_from_storage` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// A valid record was found and loaded.
    Restored,
    /// No record exists; the user is logged out.
    Missing,
    /// The record was unreadable and has been deleted.
    Corrupt(SessionError),
}

/// Result of one logout. Local state is cleared in both cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The API acknowledged the logout.
    Invalidated,
    /// The remote call failed; only the local session was cleared.
    LocalOnly(ApiError),
}

impl From<Result<(), ApiError>> for LogoutOutcome {
    fn from(remote: Result<(), ApiError>) -> Self {
        match remote {
            Ok(()) => Self::Invalidated,
            Err(err) => Self::LocalOnly(err),
        }
    }
}

/// Authentication state tracking the current user, token, and hydration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<SessionUser>,
    token: Option<String>,
    is_hydrated: bool,
    login_generation: u64,
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True exactly when both a user and a token are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// True once storage has been read at least once.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.is_hydrated
    }

    /// Counter bumped by every `set_auth`, so an in-flight logout can tell
    /// whether a newer login happened while it waited.
    #[must_use]
    pub fn login_generation(&self) -> u64 {
        self.login_generation
    }

    /// Role of the authenticated user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated() {
            return None;
        }
        self.user.as_ref().and_then(|u| u.role)
    }

    /// Record a successful login and persist it.
    ///
    /// The token format is not validated; the login flow supplies both values
    /// straight from the API response.
    pub fn set_auth<S>(&mut self, storage: &S, user: SessionUser, token: String)
    where
        S: DurableStorage + ?Sized,
    {
        let record = PersistedSession { user, token };
        save_json(storage, STORAGE_KEY, &record);
        self.user = Some(record.user);
        self.token = Some(record.token);
        self.login_generation = self.login_generation.wrapping_add(1);
    }

    /// Reload identity from durable storage.
    ///
    /// Repeated calls are harmless. A missing record leaves the in-memory
    /// identity as it is, so a login whose storage write was rejected
    /// (private mode, full quota) survives later hydrations. `is_hydrated` is
    /// set last on every path.
    pub fn hydrate_from_storage<S>(&mut self, storage: &S) -> HydrateOutcome
    where
        S: DurableStorage + ?Sized,
    {
        let outcome = match read_record(storage) {
            Ok(Some(record)) => {
                self.user = Some(record.user);
                self.token = Some(record.token);
                HydrateOutcome::Restored
            }
            Ok(None) => HydrateOutcome::Missing,
            Err(err) => {
                storage.remove(STORAGE_KEY);
                self.reset_identity();
                HydrateOutcome::Corrupt(err)
            }
        };
        self.is_hydrated = true;
        outcome
    }

    /// Delete the persisted record and forget the identity.
    ///
    /// This is the local half of logout; it runs whatever the remote call
    /// returned.
    pub fn clear<S>(&mut self, storage: &S)
    where
        S: DurableStorage + ?Sized,
    {
        storage.remove(STORAGE_KEY);
        self.reset_identity();
    }

    fn reset_identity(&mut self) {
        self.user = None;
        self.token = None;
    }
}

fn read_record<S>(storage: &S) -> Result<Option<PersistedSession>, SessionError>
where
    S: DurableStorage + ?Sized,
{
    let Some(parsed) = load_json::<PersistedSession, _>(storage, STORAGE_KEY) else {
        return Ok(None);
    };
    let record = parsed.map_err(|e| SessionError::Corrupt(e.to_string()))?;
    if record.token.trim().is_empty() {
        return Err(SessionError::Corrupt("empty token".to_owned()));
    }
    Ok(Some(record))
}
