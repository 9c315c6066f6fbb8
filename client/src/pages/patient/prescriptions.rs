//! Patient prescriptions with search and a printable document view.

#[cfg(test)]
#[path = "prescriptions_test.rs"]
mod prescriptions_test;

use leptos::prelude::*;
use portal::filters;
use portal::guard::AppRoute;
use portal::types::{Prescription, UserResponse};

use crate::components::layout::DashboardLayout;
use crate::components::prescription_document::PrescriptionDocument;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

/// Prescribing doctor's name, looked up by identity-provider id.
pub(crate) fn prescriber_name(doctors: &[UserResponse], doctor_id: Option<&str>) -> String {
    doctor_id
        .and_then(|id| doctors.iter().find(|d| d.keycloak_id == id || d.id == id))
        .map_or_else(|| "MedInsight".to_owned(), UserResponse::full_name)
}

#[component]
pub fn PatientPrescriptionsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::PatientPrescriptions>
            <PatientPrescriptions/>
        </DashboardLayout>
    }
}

#[component]
fn PatientPrescriptions() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = auth.get_untracked().user;
    let patient_id = user.as_ref().map(|u| u.keycloak_id.clone()).unwrap_or_default();
    let patient_name = StoredValue::new(user.map(|u| u.display_name().to_owned()).unwrap_or_default());

    let toasts = expect_context::<RwSignal<ToastState>>();
    let prescriptions = RwSignal::new(Vec::<Prescription>::new());
    let doctors = RwSignal::new(Vec::<UserResponse>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Prescription>);

    spawn(async move {
        match api::patient_prescriptions(&patient_id, 0, 100).await {
            Ok(page) => prescriptions.set(page.content),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        loading.set(false);
        match api::medecins(0, 100).await {
            Ok(page) => doctors.set(page.content),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
    });

    let cards = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Récupération de vos ordonnances..."</p> }.into_any();
        }
        let all = prescriptions.get();
        if all.is_empty() {
            return view! { <p class="empty-state">"Vous n'avez aucune ordonnance enregistrée."</p> }.into_any();
        }
        let query = search.get();
        filters::filter_prescriptions(&all, &query)
            .into_iter()
            .cloned()
            .map(|p| {
                let issued = p.issued_at.map(|at| format::date(at.date())).unwrap_or_default();
                let detail = format!("{} - {}", p.dosage, p.duration.clone().unwrap_or_default());
                let name = p.medication_name.clone();
                view! {
                    <div class="prescription-card">
                        <p class="prescription-card__caption">"Émise le"</p>
                        <p>{issued}</p>
                        <h3 title=name.clone()>{name.clone()}</h3>
                        <p>{detail}</p>
                        <button type="button" on:click=move |_| selected.set(Some(p.clone()))>
                            "Afficher l'Ordonnance"
                        </button>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let modal = move || {
        selected.get().map(|p| {
            let doctor = doctors.with(|list| prescriber_name(list, p.doctor_id.as_deref()));
            view! {
                <div class="modal">
                    <div class="modal__backdrop" on:click=move |_| selected.set(None)></div>
                    <div class="modal__panel">
                        <button type="button" class="no-print" on:click=move |_| selected.set(None)>"Fermer"</button>
                        <PrescriptionDocument prescription=p patient_name=patient_name.get_value() doctor_name=doctor/>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Mes Ordonnances"</h1>
                <p>"Gérez et consultez vos ordonnances médicales"</p>
            </header>
            <input
                class="search"
                type="search"
                placeholder="Rechercher un médicament..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="prescription-grid">{cards}</div>
            {modal}
        </div>
    }
}
