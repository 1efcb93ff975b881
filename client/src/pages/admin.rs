//! Admin back office: role-gated layout and its section routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/admin/*` route renders inside `AdminLayout`, so the ADMIN guard is
//! evaluated once for the whole back office. Section bodies are served by
//! their own data views; these components only title the routed area.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::admin_sidebar::AdminSidebar;
use crate::components::role_guard::RoleGuard;
use crate::state::session::Role;

/// Guarded shell for all admin routes.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RoleGuard required=Role::Admin>
            <div class="admin-layout">
                <AdminSidebar/>
                <main class="admin-layout__main">
                    <Outlet/>
                </main>
            </div>
        </RoleGuard>
    }
}

#[component]
fn AdminSection(title: &'static str) -> impl IntoView {
    view! {
        <section class="admin-section">
            <h1 class="admin-section__title">{title}</h1>
        </section>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <AdminSection title="Dashboard"/> }
}

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    view! { <AdminSection title="Servicios"/> }
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    view! { <AdminSection title="Productos"/> }
}

#[component]
pub fn AdminAppointmentsPage() -> impl IntoView {
    view! { <AdminSection title="Citas"/> }
}
