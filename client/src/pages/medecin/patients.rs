//! Médecin patient list with search.

use leptos::prelude::*;
use portal::filters::{self, ALL};
use portal::guard::AppRoute;
use portal::types::UserResponse;

use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

#[component]
pub fn MedecinPatientsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::MedecinPatients>
            <PatientQueue/>
        </DashboardLayout>
    }
}

#[component]
fn PatientQueue() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let patients = RwSignal::new(Vec::<UserResponse>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    spawn(async move {
        match api::patients(0, 50).await {
            Ok(page) => patients.set(page.content),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        loading.set(false);
    });

    let cards = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Chargement des patients..."</p> }.into_any();
        }
        let query = search.get();
        patients.with(|all| {
            filters::filter_users(all, &query, ALL)
                .into_iter()
                .map(|p| {
                    let href = AppRoute::MedecinPatient(p.keycloak_id.clone()).path();
                    let blood = p.patient_profile.as_ref().and_then(|pp| pp.blood_type.clone()).unwrap_or_else(|| "N/A".to_owned());
                    view! {
                        <div class="patient-card">
                            <span class="avatar">{p.initials()}</span>
                            <h3>{p.full_name()}</h3>
                            <p class="card__muted">{p.email.clone()}</p>
                            <p class="patient-card__meta">"Groupe Sanguin: " {blood}</p>
                            <a class="button" href=href>"Consulter le Dossier"</a>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Ma File de Patients"</h1>
                <p>"Recherchez et gérez les dossiers médicaux de vos patients"</p>
            </header>
            <input
                class="search"
                type="search"
                placeholder="Rechercher par nom ou email..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="patient-grid">{cards}</div>
        </div>
    }
}
