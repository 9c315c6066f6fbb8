//! Account summary for the signed-in user.
//!
//! The gateway exposes no profile update route, so this page only shows
//! what the session and the patient directory know.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::{Role, SessionUser};
use portal::guard::{AppRoute, GuardOutcome};
use portal::types::UserResponse;

use crate::components::top_navbar::role_label;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::{install_route_guard, logout};
use crate::util::task::spawn;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::Profile, use_navigate());
    let ready = move || auth.with(|a| a.outcome(&AppRoute::Profile) == GuardOutcome::Allow);

    view! {
        <div class="profile-page">
            <Show when=ready fallback=|| view! { <div class="page-loading">"Chargement..."</div> }>
                {move || auth.with_untracked(|a| a.user.clone()).map(|user| view! { <ProfileCard user=user/> })}
            </Show>
        </div>
    }
}

#[component]
fn ProfileCard(user: SessionUser) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let record = RwSignal::new(None::<UserResponse>);

    if user.role() == Role::Patient {
        let keycloak_id = user.keycloak_id.clone();
        spawn(async move {
            match api::patient(&keycloak_id).await {
                Ok(found) => record.set(Some(found)),
                Err(e) => toasts.update(|t| t.api_error(&e)),
            }
        });
    }

    let initial = user.display_name().chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let role = role_label(&user.role);
    let on_logout = move |_| logout(auth, &navigate);

    let detail_rows = move || {
        record.get().map(|r| {
            let profile = r.patient_profile.unwrap_or_default();
            let rows = [
                ("Téléphone", r.phone_number),
                ("Adresse", r.address_line),
                ("Ville", r.city),
                ("Pays", r.country),
                ("Date de naissance", profile.date_of_birth),
                ("Groupe sanguin", profile.blood_type),
                ("Assurance", profile.insurance_provider),
            ];
            rows.into_iter()
                .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
                .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                .collect_view()
        })
    };

    view! {
        <div class="profile-card">
            <header class="profile-card__header">
                <a href=user.landing_route()>"Retour"</a>
                <button type="button" class="button button--danger" on:click=on_logout>"Déconnexion"</button>
            </header>
            <div class="profile-card__identity">
                <div class="avatar avatar--large">{initial}</div>
                <div>
                    <h1>{user.display_name().to_owned()}</h1>
                    <p>{user.email.clone()}</p>
                    <p class="profile-card__role">{role}</p>
                </div>
            </div>
            <dl class="profile-card__details">
                <dt>"Prénom"</dt><dd>{user.first_name.clone()}</dd>
                <dt>"Nom"</dt><dd>{user.last_name.clone()}</dd>
                <dt>"Email"</dt><dd>{user.email.clone()}</dd>
                {detail_rows}
            </dl>
        </div>
    }
}
