//! Admin back-office sidebar with section links and logout.

use leptos::prelude::*;

use crate::state::session::SessionUser;
use crate::state::store::BrowserSession;
#[cfg(feature = "hydrate")]
use crate::util::auth::LOGIN_PATH;

/// Section links shown in the sidebar, as `(path, label)`.
const SECTIONS: [(&str, &str); 4] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/services", "Servicios"),
    ("/admin/products", "Productos"),
    ("/admin/appointments", "Citas"),
];

/// Sidebar for the admin layout.
#[component]
pub fn AdminSidebar() -> impl IntoView {
    let session = expect_context::<BrowserSession>();

    let admin_name = move || {
        session
            .with(|s| s.user().map(SessionUser::display_name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.logout().await;
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(LOGIN_PATH);
            }
        });
    };

    view! {
        <aside class="admin-sidebar">
            <div class="admin-sidebar__header">
                <span class="admin-sidebar__title">"LUAS PETS"</span>
                <span class="admin-sidebar__user">{admin_name}</span>
            </div>
            <nav class="admin-sidebar__nav">
                {SECTIONS
                    .into_iter()
                    .map(|(href, label)| {
                        view! { <a href=href class="admin-sidebar__link">{label}</a> }
                    })
                    .collect_view()}
            </nav>
            <button class="admin-sidebar__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </aside>
    }
}
