//! Role-aware navigation sidebar.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use portal::navigation::{self, ExternalLinks, NavItem};
use portal::roles::{Area, Role};

use crate::state::auth::AuthState;
use crate::util::config;

/// Entries for the signed-in user's area. No user yet means the patient
/// menu, matching the default landing route.
pub(crate) fn entries_for(role: Option<Role>, links: &ExternalLinks) -> Vec<NavItem> {
    let area = role.map_or(Area::Patient, Role::area);
    navigation::sidebar(area, role == Some(Role::Gestionnaire), links)
}

pub(crate) fn item_class(active: bool) -> &'static str {
    if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let links = config::external_links();

    let items = move || entries_for(auth.get().role(), &links);

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/">"MedInsight"</a>
            <nav class="sidebar__nav">
                {move || {
                    let current = location.pathname.get();
                    items()
                        .into_iter()
                        .map(|item| {
                            let short = item.short_label();
                            if item.external {
                                view! {
                                    <a class="sidebar__item sidebar__item--external" href=item.href target="_blank" rel="noopener noreferrer">
                                        {item.label}
                                    </a>
                                }
                                .into_any()
                            } else {
                                let class = item_class(navigation::is_active(&item.href, &current));
                                view! {
                                    <a class=class href=item.href title=item.label>
                                        <span class="sidebar__label">{item.label}</span>
                                        <span class="sidebar__short">{short}</span>
                                    </a>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
