//! Reactive session store provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `App` creates one `SessionStore` per tab and provides it as context;
//! components fetch it with `expect_context::<BrowserSession>()`. The store
//! wraps `SessionState` in a signal and owns the injected storage, so each
//! transition is a single synchronous `update` and readers re-render on
//! change.
//!
//! The only suspension point is the remote call inside `logout`. Local state
//! is cleared after it resolves whatever the result, and the request layer
//! bounds it with its timeout.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::future::Future;

use leptos::prelude::*;

use super::session::{HydrateOutcome, LogoutOutcome, SessionState, SessionUser};
use crate::net::types::ApiError;
use crate::util::storage::{BrowserStorage, DurableStorage};

/// Session store backed by `localStorage`.
pub type BrowserSession = SessionStore<BrowserStorage>;

/// Handle to the per-tab session signal and its durable storage.
pub struct SessionStore<S: 'static> {
    state: RwSignal<SessionState>,
    storage: StoredValue<S>,
}

impl<S: 'static> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SessionStore<S> {}

impl<S> SessionStore<S>
where
    S: DurableStorage + Send + Sync + 'static,
{
    /// Create an empty, not-yet-hydrated store over `storage`.
    pub fn new(storage: S) -> Self {
        Self { state: RwSignal::new(SessionState::default()), storage: StoredValue::new(storage) }
    }

    /// Tracked read of the whole session.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Tracked read through a closure, avoiding a clone.
    pub fn with<U>(&self, f: impl FnOnce(&SessionState) -> U) -> U {
        self.state.with(f)
    }

    /// Record a successful login.
    pub fn set_auth(&self, user: SessionUser, token: String) {
        self.storage
            .with_value(|storage| self.state.update(|s| s.set_auth(storage, user, token)));
        leptos::logging::log!("session: logged in");
    }

    /// Reload the session from durable storage and mark the store hydrated.
    pub fn hydrate_from_storage(&self) -> HydrateOutcome {
        let mut outcome = HydrateOutcome::Missing;
        self.storage
            .with_value(|storage| self.state.update(|s| outcome = s.hydrate_from_storage(storage)));
        match &outcome {
            HydrateOutcome::Restored => leptos::logging::log!("session: restored from storage"),
            HydrateOutcome::Missing => {}
            HydrateOutcome::Corrupt(err) => leptos::logging::warn!("session: {err}; stored record discarded"),
        }
        outcome
    }

    /// Invalidate the remote session (best-effort) and clear the local one.
    ///
    /// Never fails from the caller's point of view. A `set_auth` that lands
    /// while the remote call is pending is not undone.
    pub async fn logout(&self) -> LogoutOutcome {
        self.logout_with(crate::net::api::logout()).await
    }

    /// [`logout`](Self::logout) with the remote invalidation call supplied by
    /// the caller.
    pub async fn logout_with<F>(&self, remote: F) -> LogoutOutcome
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        let generation = self.state.with_untracked(SessionState::login_generation);
        let outcome = LogoutOutcome::from(remote.await);

        let mut cleared = false;
        self.storage.with_value(|storage| {
            self.state.update(|s| {
                if s.login_generation() == generation {
                    s.clear(storage);
                    cleared = true;
                }
            });
        });
        if !cleared {
            leptos::logging::log!("session: newer login during logout; kept");
            return outcome;
        }
        match &outcome {
            LogoutOutcome::Invalidated => leptos::logging::log!("session: logged out"),
            LogoutOutcome::LocalOnly(err) => {
                leptos::logging::warn!("session: remote logout failed ({err}); local session cleared");
            }
        }
        outcome
    }
}
