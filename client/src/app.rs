//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::public_layout::PublicLayout;
use crate::pages::admin::{
    AdminAppointmentsPage, AdminDashboardPage, AdminLayout, AdminProductsPage, AdminServicesPage,
};
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::store::BrowserSession;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the per-tab session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BrowserSession::new(BrowserStorage));

    view! {
        <Stylesheet id="leptos" href="/pkg/luaspets.css"/>
        <Title text="LUAS PETS"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                    <Route path=StaticSegment("services") view=AdminServicesPage/>
                    <Route path=StaticSegment("products") view=AdminProductsPage/>
                    <Route path=StaticSegment("appointments") view=AdminAppointmentsPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=PublicLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
