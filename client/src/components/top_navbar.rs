//! Top bar with the signed-in user's identity and logout.

#[cfg(test)]
#[path = "top_navbar_test.rs"]
mod top_navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::{Role, SessionUser};

use crate::state::auth::AuthState;
use crate::util::auth::logout;

pub(crate) fn initials(user: &SessionUser) -> String {
    let from_names: String = user
        .first_name
        .chars()
        .take(1)
        .chain(user.last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect();
    if from_names.is_empty() {
        user.email.chars().take(1).flat_map(char::to_uppercase).collect()
    } else {
        from_names
    }
}

pub(crate) fn role_label(raw: &str) -> &'static str {
    Role::parse(raw).map_or("Utilisateur", Role::label)
}

#[component]
pub fn TopNavbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = move || auth.get().user.map(|u| u.display_name().to_owned()).unwrap_or_default();
    let role = move || auth.get().user.map_or("", |u| role_label(&u.role));
    let badge = move || auth.get().user.as_ref().map(initials).unwrap_or_default();

    let on_logout = move |_| logout(auth, &navigate);

    view! {
        <header class="top-navbar">
            <a class="top-navbar__logo" href="/">"MedInsight"</a>
            <div class="top-navbar__user">
                <a class="top-navbar__profile" href="/profile">
                    <span class="top-navbar__avatar">{badge}</span>
                    <span class="top-navbar__identity">
                        <span class="top-navbar__name">{name}</span>
                        <span class="top-navbar__role">{role}</span>
                    </span>
                </a>
                <button class="top-navbar__logout" on:click=on_logout>"Déconnexion"</button>
            </div>
        </header>
    }
}
