//! Public top bar with branding and session actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown on every public page. It hydrates the session on mount so the
//! login/logout controls reflect the persisted session after a reload.

use leptos::prelude::*;

use crate::state::session::{Role, SessionState, SessionUser};
use crate::state::store::BrowserSession;

/// Top navigation bar for public pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<BrowserSession>();

    Effect::new(move || {
        session.hydrate_from_storage();
    });

    let is_authenticated = move || session.with(SessionState::is_authenticated);
    let is_admin = move || session.with(|s| s.role() == Some(Role::Admin));
    let greeting = move || {
        session
            .with(|s| s.user().map(SessionUser::display_name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.logout().await;
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        });
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                <img class="navbar__logo" src="/logo-luaspets.png" alt="LUAS PETS Logo"/>
                <span class="navbar__title">"LUAS PETS"</span>
                <span class="navbar__subtitle">"Clínica Veterinaria Especializada"</span>
            </a>

            <span class="navbar__spacer"></span>

            <Show
                when=is_authenticated
                fallback=|| {
                    view! {
                        <div class="navbar__auth">
                            <a href="/login" class="navbar__link">"Iniciar sesión"</a>
                            <a href="/register" class="navbar__link navbar__link--primary">"Registrarse"</a>
                        </div>
                    }
                }
            >
                <div class="navbar__auth">
                    <Show when=is_admin>
                        <a href="/admin/dashboard" class="navbar__link">"Panel"</a>
                    </Show>
                    <span class="navbar__user">{greeting}</span>
                    <button class="navbar__link navbar__logout" on:click=on_logout>
                        "Cerrar sesión"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
