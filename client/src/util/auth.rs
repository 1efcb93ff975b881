//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-gated routes and the login page apply identical decisions: wait for
//! hydration, redirect to `/login?redirect=<path>` on denial, and return the
//! user to that path after a successful login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Role, SessionState};
use crate::state::store::SessionStore;
use crate::util::storage::DurableStorage;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Query parameter carrying the originally requested location.
pub const REDIRECT_PARAM: &str = "redirect";
/// Landing route for administrators after login.
pub const ADMIN_HOME_PATH: &str = "/admin/services";

/// Outcome of evaluating a role guard against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Storage not read yet; show a placeholder and do not redirect.
    Loading,
    /// Not logged in or wrong role; navigate to `redirect_to`.
    Denied { redirect_to: String },
    /// Render the protected view.
    Granted,
}

/// Decide what a view guarded by `required` shows for `state`.
///
/// `requested_path` is carried in the login redirect so login can send the
/// user back.
pub fn evaluate_guard(state: &SessionState, required: Role, requested_path: &str) -> GuardDecision {
    if !state.is_hydrated() {
        return GuardDecision::Loading;
    }
    if role_satisfies(state.role(), required) {
        GuardDecision::Granted
    } else {
        GuardDecision::Denied { redirect_to: login_redirect(requested_path) }
    }
}

fn role_satisfies(actual: Option<Role>, required: Role) -> bool {
    match (actual, required) {
        (Some(Role::Admin), Role::Admin) | (Some(Role::User), Role::User) => true,
        (Some(Role::Admin), Role::User) | (Some(Role::User), Role::Admin) | (None, _) => false,
    }
}

/// Full in-app location (path, query and fragment) as seen by the router.
///
/// `search` and `hash` are accepted with or without their leading `?`/`#`.
pub fn requested_location(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = pathname.to_owned();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Login URL that returns to `from` afterwards.
pub fn login_redirect(from: &str) -> String {
    if from.is_empty() || from == LOGIN_PATH {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", encode_query_value(from))
}

/// Where to go after logging in with `role`.
///
/// A requested same-site path wins; anything else (absent, external,
/// protocol-relative) falls back to the role's landing page.
pub fn post_login_destination(role: Option<Role>, redirect: Option<&str>) -> String {
    if let Some(path) = redirect.map(str::trim).filter(|p| is_local_path(p)) {
        return path.to_owned();
    }
    match role {
        Some(Role::Admin) => ADMIN_HOME_PATH.to_owned(),
        Some(Role::User) | None => "/".to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') && path != LOGIN_PATH
}

fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Reactive guard decision for `required`, re-evaluated whenever the session
/// or the requested location changes.
pub fn watch_guard<S, P>(session: SessionStore<S>, required: Role, location: P) -> Memo<GuardDecision>
where
    S: DurableStorage + Send + Sync + 'static,
    P: Fn() -> String + Send + Sync + 'static,
{
    Memo::new(move |_| {
        let path = location();
        session.with(|s| evaluate_guard(s, required, &path))
    })
}

/// Navigate (replacing history) whenever `decision` becomes `Denied`.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Denied { redirect_to } = decision.get() {
            navigate(&redirect_to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
