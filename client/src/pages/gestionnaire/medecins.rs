//! Doctor directory for clinic managers.

use leptos::prelude::*;
use portal::filters::{self, ALL};
use portal::guard::AppRoute;
use portal::types::UserResponse;

use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

#[component]
pub fn GestionnaireMedecinsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::GestionnaireMedecins>
            <DoctorDirectory/>
        </DashboardLayout>
    }
}

#[component]
fn DoctorDirectory() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let doctors = RwSignal::new(Vec::<UserResponse>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    spawn(async move {
        match api::medecins(0, 100).await {
            Ok(page) => doctors.set(page.content),
            Err(_) => toasts.update(|t| t.error("Erreur lors du chargement des médecins")),
        }
        loading.set(false);
    });

    let rows = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Chargement..."</p> }.into_any();
        }
        let query = search.get();
        let found: Vec<UserResponse> = doctors.with(|all| filters::filter_users(all, &query, ALL).into_iter().cloned().collect());
        if found.is_empty() {
            return view! { <p class="empty-state">"Aucun médecin trouvé."</p> }.into_any();
        }
        found
            .into_iter()
            .map(|d| {
                let href = AppRoute::MedecinProfile(d.keycloak_id.clone()).path();
                let profile = d.medecin_profile.clone().unwrap_or_default();
                view! {
                    <div class="directory-row">
                        <span class="avatar">{d.initials()}</span>
                        <div class="directory-row__body">
                            <h3>{format!("Dr. {}", d.full_name())}</h3>
                            <p class="card__muted">
                                {d.email.clone()}
                                {profile.specialization.map(|s| view! { <span class="directory-row__tag">{s}</span> })}
                                {profile.consultation_fee.map(|fee| view! { <span class="directory-row__tag">{format::fee(fee)}</span> })}
                            </p>
                        </div>
                        <a class="button button--ghost" href=href>"Voir le profil"</a>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Gestion des Médecins"</h1>
                <p>"Annuaire des praticiens de la clinique"</p>
            </header>
            <input
                class="search"
                type="search"
                placeholder="Rechercher un médecin par nom ou email..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="directory">{rows}</div>
        </div>
    }
}
