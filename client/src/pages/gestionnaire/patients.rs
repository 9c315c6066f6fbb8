//! Patient directory for clinic managers.

use leptos::prelude::*;
use portal::filters::{self, ALL};
use portal::guard::{AppRoute, GuardOutcome};
use portal::types::UserResponse;

use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

#[component]
pub fn GestionnairePatientsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::GestionnairePatients>
            <PatientDirectory/>
        </DashboardLayout>
    }
}

#[component]
fn PatientDirectory() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let patients = RwSignal::new(Vec::<UserResponse>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    spawn(async move {
        match api::patients(0, 100).await {
            Ok(page) => patients.set(page.content),
            Err(_) => toasts.update(|t| t.error("Erreur lors du chargement des patients")),
        }
        loading.set(false);
    });

    let rows = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Chargement..."</p> }.into_any();
        }
        let query = search.get();
        let session = auth.get_untracked();
        let found: Vec<UserResponse> = patients.with(|all| filters::filter_users(all, &query, ALL).into_iter().cloned().collect());
        if found.is_empty() {
            return view! { <p class="empty-state">"Aucun patient trouvé."</p> }.into_any();
        }
        found
            .into_iter()
            .map(|p| {
                let route = AppRoute::MedecinPatient(p.keycloak_id.clone());
                let link = (session.outcome(&route) == GuardOutcome::Allow)
                    .then(|| view! { <a class="button button--ghost" href={route.path()}>"Dossier Médical"</a> });
                let blood = p.patient_profile.as_ref().and_then(|pp| pp.blood_type.clone());
                view! {
                    <div class="directory-row">
                        <span class="avatar">{p.initials()}</span>
                        <div class="directory-row__body">
                            <h3>{p.full_name()}</h3>
                            <p class="card__muted">
                                {p.email.clone()}
                                {blood.map(|b| view! { <span class="directory-row__tag">{b}</span> })}
                            </p>
                        </div>
                        {link}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Gestion des Patients"</h1>
                <p>"Liste des patients enregistrés dans la clinique"</p>
            </header>
            <input
                class="search"
                type="search"
                placeholder="Rechercher un patient par nom ou email..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="directory">{rows}</div>
        </div>
    }
}
