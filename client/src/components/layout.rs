//! Authenticated page frame: sidebar, top bar and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated page wraps its content in `DashboardLayout`. The content is
//! only mounted once the guard allows it, so page components can issue
//! their REST calls on creation without re-checking the session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::guard::{AppRoute, GuardOutcome};

use crate::components::sidebar::Sidebar;
use crate::components::top_navbar::TopNavbar;
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

#[component]
pub fn DashboardLayout(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, route.clone(), use_navigate());

    let allowed = move || auth.get().outcome(&route) == GuardOutcome::Allow;

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="page-loading">"Chargement..."</div> }
        >
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <TopNavbar/>
                    <main class="layout__content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
