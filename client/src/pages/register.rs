//! Registration page: create the account, then log straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ApiError, RegisterRequest};
use crate::state::store::BrowserSession;

const REGISTER_FAILED_MESSAGE: &str = "Error al registrar usuario";
const MISSING_FIELDS_MESSAGE: &str = "Completa nombre, apellido, correo y contraseña.";

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    lastname: String,
    phone_number: String,
    email: String,
    password: String,
}

/// Trim text fields and require everything except the phone number.
fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let request = RegisterRequest {
        name: form.name.trim().to_owned(),
        lastname: form.lastname.trim().to_owned(),
        phone_number: form.phone_number.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
    };
    if request.name.is_empty() || request.lastname.is_empty() || request.email.is_empty() || request.password.is_empty()
    {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(request)
}

fn register_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(REGISTER_FAILED_MESSAGE).to_owned()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(validate_register_input) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::register(&request).await {
                Ok(()) => crate::net::api::login(&request.email, &request.password).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(resp) => {
                    session.set_auth(resp.user, resp.token);
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    error.set(Some(register_error_message(&err)));
                }
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&RegisterForm) -> String,
                      set: fn(&mut RegisterForm, String)| {
        view! {
            <label class="auth-label">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img class="auth-card__logo" src="/logotipo.png" alt="LUAS PETS Logo"/>
                <h2 class="auth-card__title">"Crear cuenta"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {field("Nombre", "text", |f| f.name.clone(), |f, v| f.name = v)}
                    {field("Apellido", "text", |f| f.lastname.clone(), |f, v| f.lastname = v)}
                    {field("Teléfono", "tel", |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                    {field("Correo electrónico", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("Contraseña", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registrando..." } else { "Registrarse" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿Ya tienes una cuenta? " <a href="/login">"Inicia sesión"</a>
                </p>
            </div>
        </div>
    }
}
