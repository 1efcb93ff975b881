//! Login page: email + password against `POST /auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the response's user and token go straight into the session
//! store, then the user is sent back to the page the route guard redirected
//! from, or to the landing page for their role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::ApiError;
use crate::state::store::BrowserSession;
use crate::util::auth::{REDIRECT_PARAM, post_login_destination};

const LOGIN_FAILED_MESSAGE: &str = "Error al iniciar sesión";
const MISSING_CREDENTIALS_MESSAGE: &str = "Ingresa tu correo y contraseña.";

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message shown for a failed login.
fn login_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        error.set(None);
        busy.set(true);

        let redirect = query.with_untracked(|q| q.get(REDIRECT_PARAM));
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    let destination = post_login_destination(resp.user.role, redirect.as_deref());
                    session.set_auth(resp.user, resp.token);
                    navigate(&destination, NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    error.set(Some(login_error_message(&err)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img class="auth-card__logo" src="/logotipo.png" alt="LUAS PETS Logo"/>
                <h2 class="auth-card__title">"Iniciar sesión"</h2>
                <p class="auth-card__subtitle">
                    "Bienvenido a " <span class="auth-card__brand">"LUAS PETS"</span>
                </p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Correo electrónico"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="tucorreo@ejemplo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Contraseña"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Iniciar sesión" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿No tienes una cuenta? " <a href="/register">"Regístrate aquí"</a>
                </p>
            </div>
        </div>
    }
}
