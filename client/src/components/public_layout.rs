//! Shell for public pages: navbar above the routed page.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;

#[component]
pub fn PublicLayout() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="public-layout__main">
            <Outlet/>
        </main>
        <footer class="public-layout__footer">
            "© LUAS PETS - Clínica Veterinaria Especializada"
        </footer>
    }
}
