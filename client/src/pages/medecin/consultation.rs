//! Live consultation: clinical context, notes, prescription builder and the
//! completion sequence.
//!
//! Completing runs the plan built by `portal::consultation` in order. The
//! first failing call stops the sequence; the patient email is best effort.

#[cfg(test)]
#[path = "consultation_test.rs"]
mod consultation_test;

use chrono::Local;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use portal::consultation::{PatientContact, completion_plan};
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, Dossier, PrescriptionDraft, UserResponse};
use portal::validation::validate_prescription;

use crate::components::dossier_view::or_fallback;
use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::pages::medecin::assistant::top_predictions;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

/// Short patient reference shown in the header.
pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub(crate) fn contact_of(patient: Option<&UserResponse>) -> PatientContact {
    patient.map_or_else(PatientContact::default, |p| PatientContact {
        email: Some(p.email.clone()).filter(|e| !e.is_empty()),
        first_name: Some(p.first_name.clone()).filter(|n| !n.is_empty()),
    })
}

#[component]
pub fn MedecinConsultationPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|p| p.get("id")).unwrap_or_default();
    view! {
        <DashboardLayout route=AppRoute::MedecinConsultation(id.clone())>
            <Consultation appointment_id=id.clone()/>
        </DashboardLayout>
    }
}

#[component]
fn Consultation(appointment_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let appointment = RwSignal::new(None::<AppointmentResponse>);
    let dossier = RwSignal::new(None::<Dossier>);
    let patient = RwSignal::new(None::<UserResponse>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let notes = RwSignal::new(String::new());
    let symptoms = RwSignal::new(String::new());
    let predictions = RwSignal::new(None::<Vec<(String, f64)>>);
    let ai_loading = RwSignal::new(false);

    let medication = RwSignal::new(String::new());
    let dosage = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let drafts = RwSignal::new(Vec::<PrescriptionDraft>::new());

    spawn(async move {
        let filter = AppointmentFilter { size: 100, ..AppointmentFilter::default() };
        match api::list_appointments(&filter).await {
            Ok(page) => {
                if let Some(current) = page.content.into_iter().find(|a| a.id == appointment_id) {
                    let patient_id = current.patient_id.clone();
                    appointment.set(Some(current));
                    match api::dossier(&patient_id).await {
                        Ok(found) => dossier.set(Some(found)),
                        Err(e) => toasts.update(|t| t.api_error(&e)),
                    }
                    match api::patient(&patient_id).await {
                        Ok(found) => patient.set(Some(found)),
                        Err(e) => toasts.update(|t| t.api_error(&e)),
                    }
                }
            }
            Err(_) => toasts.update(|t| t.error("Impossible de charger les données de la consultation")),
        }
        loading.set(false);
    });

    let on_analyse = move |_| {
        let text = symptoms.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        ai_loading.set(true);
        spawn(async move {
            match api::predict_diagnosis(&text).await {
                Ok(value) => predictions.set(Some(top_predictions(&value, 3))),
                Err(_) => toasts.update(|t| t.error("L'assistant IA est temporairement indisponible.")),
            }
            ai_loading.set(false);
        });
    };

    let on_add = move |_| {
        match validate_prescription(&medication.get_untracked(), &dosage.get_untracked(), &duration.get_untracked()) {
            Ok(draft) => {
                let message = format!("{} ajouté à l'ordonnance", draft.medication_name);
                drafts.update(|list| list.push(draft));
                medication.set(String::new());
                dosage.set(String::new());
                duration.set(String::new());
                toasts.update(|t| t.success(message));
            }
            Err(errors) => toasts.update(|t| t.error(errors.first().unwrap_or_default())),
        }
    };

    let on_complete = move |_| {
        let Some(current) = appointment.get_untracked() else {
            return;
        };
        let contact = contact_of(patient.get_untracked().as_ref());
        let plan = completion_plan(&current, &notes.get_untracked(), &drafts.get_untracked(), &contact);
        saving.set(true);
        let navigate = navigate.clone();
        spawn(async move {
            match api::run_consultation(plan).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Consultation enregistrée avec succès!"));
                    navigate(&AppRoute::MedecinDashboard.path(), NavigateOptions::default());
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de l'enregistrement de la consultation.")),
            }
            saving.set(false);
        });
    };

    let header_name = move || {
        patient.get().map(|p| format!("Consultation : {}", p.full_name())).unwrap_or_else(|| "Consultation".to_owned())
    };
    let header_id = move || appointment.get().map(|a| format!("ID: {}", short_id(&a.patient_id))).unwrap_or_default();

    let context = move || {
        let record = dossier.get().and_then(|d| d.medical_record).unwrap_or_default();
        view! {
            <dl>
                <dt>"Groupe Sanguin"</dt>
                <dd>{or_fallback(record.blood_type.as_deref(), "Non renseigné")}</dd>
                <dt>"Allergies"</dt>
                <dd>{or_fallback(record.allergies.as_deref(), "Aucune connue")}</dd>
                <dt>"Antécédents"</dt>
                <dd>{or_fallback(record.medical_history.as_deref(), "Aucun antécédent majeur")}</dd>
            </dl>
        }
    };

    let ai_results = move || {
        predictions.get().map(|list| {
            if list.is_empty() {
                return view! { <p class="card__muted">"Analyse complétée."</p> }.into_any();
            }
            view! {
                <div class="ai-results">
                    <p class="ai-results__title">"Résultats suggérés"</p>
                    {list
                        .into_iter()
                        .map(|(name, score)| view! {
                            <div class="ai-results__row">
                                <span>{name}</span>
                                <span>{format!("{:.1}%", score * 100.0)}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        })
    };

    let draft_list = move || {
        drafts
            .get()
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| {
                view! {
                    <li class="draft">
                        <span class="draft__index">{idx + 1}</span>
                        <div>
                            <p class="draft__name">{draft.medication_name}</p>
                            <p class="draft__dosage">{draft.dosage}</p>
                        </div>
                        <button
                            type="button"
                            on:click=move |_| drafts.update(|list| {
                                if idx < list.len() {
                                    list.remove(idx);
                                }
                            })
                        >
                            "Retirer"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="page-loading">"Initialisation de la session de consultation..."</p> }
        >
            <div class="page consultation">
                <header class="page__header">
                    <div>
                        <h1>{header_name}</h1>
                        <p class="card__muted">
                            <span>{header_id}</span>
                            " · "
                            <span>{format::date(Local::now().date_naive())}</span>
                        </p>
                    </div>
                </header>
                <div class="consultation__grid">
                    <aside>
                        <section class="card">
                            <h3>"Contexte Clinique"</h3>
                            {context}
                        </section>
                        <section class="card">
                            <h3>"Assistant IA Diagnostic"</h3>
                            <textarea
                                rows="4"
                                placeholder="Décrivez les symptômes observés..."
                                prop:value=move || symptoms.get()
                                on:input=move |ev| symptoms.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                type="button"
                                class="button"
                                disabled={move || ai_loading.get() || symptoms.with(String::is_empty)}
                                on:click=on_analyse
                            >
                                {move || if ai_loading.get() { "Analyse en cours..." } else { "Lancer l'Analyse IA" }}
                            </button>
                            {ai_results}
                        </section>
                    </aside>
                    <div>
                        <section class="card">
                            <h3>"Observations et Examen Clinique"</h3>
                            <textarea
                                rows="10"
                                placeholder="Saisissez ici vos notes de consultation détaillées..."
                                prop:value=move || notes.get()
                                on:input=move |ev| notes.set(event_target_value(&ev))
                            ></textarea>
                        </section>
                        <section class="card">
                            <h3>"Gestion de l'Ordonnance"</h3>
                            <div class="form-row">
                                <div class="form-field">
                                    <label>"Médicament"</label>
                                    <input
                                        placeholder="Ex: Doliprane 1000mg"
                                        prop:value=move || medication.get()
                                        on:input=move |ev| medication.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-field">
                                    <label>"Posologie"</label>
                                    <input
                                        placeholder="Ex: 1cp x 3/jour"
                                        prop:value=move || dosage.get()
                                        on:input=move |ev| dosage.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-field">
                                    <label>"Durée"</label>
                                    <input
                                        placeholder="Ex: 7 jours"
                                        prop:value=move || duration.get()
                                        on:input=move |ev| duration.set(event_target_value(&ev))
                                    />
                                </div>
                                <button type="button" class="button" on:click=on_add>"Ajouter"</button>
                            </div>
                            <ul class="draft-list">{draft_list}</ul>
                        </section>
                    </div>
                </div>
            </div>
        </Show>
        <div class="consultation__actions">
            <button type="button" class="button" disabled={move || saving.get() || loading.get()} on:click=on_complete>
                {move || if saving.get() { "Enregistrement..." } else { "Terminer la Consultation" }}
            </button>
        </div>
    }
}
