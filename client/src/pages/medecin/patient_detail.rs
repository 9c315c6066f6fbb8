//! One patient's dossier, with the médecin's medical-record editor.

#[cfg(test)]
#[path = "patient_detail_test.rs"]
mod patient_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use portal::guard::AppRoute;
use portal::types::{Dossier, MedicalRecordUpdate, UserResponse};

use crate::components::dossier_view::DossierView;
use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

/// Optional text fields are sent as `None` when left blank.
pub(crate) fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn MedecinPatientPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|p| p.get("id")).unwrap_or_default();
    view! {
        <DashboardLayout route=AppRoute::MedecinPatient(id.clone())>
            <PatientDossier patient_id=id.clone()/>
        </DashboardLayout>
    }
}

#[component]
fn PatientDossier(patient_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dossier = RwSignal::new(None::<Dossier>);
    let patient = RwSignal::new(None::<UserResponse>);
    let loading = RwSignal::new(true);
    let editing = RwSignal::new(false);
    let form = RwSignal::new(MedicalRecordUpdate::default());
    let version = RwSignal::new(0_u32);
    let patient_id = StoredValue::new(patient_id);

    Effect::new(move || {
        version.track();
        let id = patient_id.get_value();
        spawn(async move {
            match api::dossier(&id).await {
                Ok(found) => {
                    form.set(found.medical_record.as_ref().map(MedicalRecordUpdate::from_record).unwrap_or_default());
                    dossier.set(Some(found));
                }
                Err(e) => {
                    dossier.set(None);
                    toasts.update(|t| t.api_error(&e));
                }
            }
            match api::patient(&id).await {
                Ok(found) => patient.set(Some(found)),
                Err(e) => toasts.update(|t| t.api_error(&e)),
            }
            loading.set(false);
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = form.get_untracked();
        let id = patient_id.get_value();
        spawn(async move {
            match api::update_medical_record(&id, &update).await {
                Ok(_) => {
                    toasts.update(|t| t.success("Dossier médical mis à jour"));
                    editing.set(false);
                    version.update(|v| *v += 1);
                }
                Err(e) => toasts.update(|t| t.error(e.user_message())),
            }
        });
    };

    let subtitle = move || {
        if loading.get() {
            "Chargement...".to_owned()
        } else {
            patient.get().map(|p| p.full_name()).unwrap_or_default()
        }
    };

    let body = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Récupération des données cliniques..."</p> }.into_any();
        }
        match dossier.get() {
            Some(d) => view! { <DossierView dossier=d/> }.into_any(),
            None => view! { <p class="empty-state">"Dossier non trouvé."</p> }.into_any(),
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <a href="/medecin/patients">"Retour"</a>
                <h1>"Dossier Médical Patient"</h1>
                <p>{subtitle}</p>
                <button type="button" class="button button--ghost" on:click=move |_| editing.update(|e| *e = !*e)>
                    {move || if editing.get() { "Fermer l'édition" } else { "Modifier le dossier" }}
                </button>
            </header>
            <Show when=move || editing.get()>
                <form class="card record-form" on:submit=on_save>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="bloodType">"Groupe sanguin"</label>
                            <input
                                id="bloodType"
                                prop:value=move || form.get().blood_type
                                on:input=move |ev| form.update(|f| f.blood_type = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label for="allergies">"Allergies"</label>
                            <input
                                id="allergies"
                                prop:value=move || form.get().allergies
                                on:input=move |ev| form.update(|f| f.allergies = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="chronic">"Maladies chroniques"</label>
                        <input
                            id="chronic"
                            prop:value=move || form.get().chronic_conditions.unwrap_or_default()
                            on:input=move |ev| form.update(|f| f.chronic_conditions = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-field">
                        <label for="history">"Antécédents"</label>
                        <textarea
                            id="history"
                            rows="4"
                            prop:value=move || form.get().medical_history
                            on:input=move |ev| form.update(|f| f.medical_history = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="emergencyName">"Contact d'urgence"</label>
                            <input
                                id="emergencyName"
                                prop:value=move || form.get().emergency_contact_name.unwrap_or_default()
                                on:input=move |ev| form.update(|f| f.emergency_contact_name = optional(event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-field">
                            <label for="emergencyPhone">"Téléphone d'urgence"</label>
                            <input
                                id="emergencyPhone"
                                type="tel"
                                prop:value=move || form.get().emergency_contact_phone.unwrap_or_default()
                                on:input=move |ev| form.update(|f| f.emergency_contact_phone = optional(event_target_value(&ev)))
                            />
                        </div>
                    </div>
                    <button type="submit" class="button">"Enregistrer"</button>
                </form>
            </Show>
            {body}
        </div>
    }
}
