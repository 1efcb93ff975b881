//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps any view that requires a role. Hydrates the session once on mount,
//! shows a neutral placeholder until storage has been read, then either
//! renders its children or replaces the route with the login redirect.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Role;
use crate::state::store::BrowserSession;
use crate::util::auth::{GuardDecision, install_guard_redirect, requested_location, watch_guard};

/// Render `children` only for a hydrated session holding `required`.
#[component]
pub fn RoleGuard(required: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let location = use_location();
    let navigate = use_navigate();

    // No tracked reads: runs once per mount.
    Effect::new(move || {
        session.hydrate_from_storage();
    });

    let decision = watch_guard(session, required, move || {
        requested_location(&location.pathname.get(), &location.search.get(), &location.hash.get())
    });
    install_guard_redirect(decision, navigate);

    view! {
        {move || match decision.get() {
            GuardDecision::Granted => children().into_any(),
            GuardDecision::Loading => {
                view! { <div class="route-guard__loading">"Cargando..."</div> }.into_any()
            }
            GuardDecision::Denied { .. } => ().into_any(),
        }}
    }
}
