//! Diagnosis assistant: symptoms in, suggested diagnosis and treatment out.
//!
//! The ML service payloads are loosely shaped, so they are read as JSON
//! values and only the known fields are pulled out.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use leptos::prelude::*;
use portal::guard::AppRoute;
use serde_json::Value;

use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

pub(crate) fn diagnosis_text(value: &Value) -> Option<String> {
    text_field(value, "diagnosis")
}

pub(crate) fn treatment_text(value: &Value) -> Option<String> {
    text_field(value, "treatment")
}

/// `confidence` in `[0, 1]` as a whole percentage.
pub(crate) fn confidence_percent(value: &Value) -> Option<String> {
    value.get("confidence").and_then(Value::as_f64).map(|c| format!("{:.0}%", c * 100.0))
}

/// Highest-scoring entries of the `predictions` map, best first.
pub(crate) fn top_predictions(value: &Value, limit: usize) -> Vec<(String, f64)> {
    let Some(map) = value.get("predictions").and_then(Value::as_object) else {
        return Vec::new();
    };
    let mut scored: Vec<(String, f64)> =
        map.iter().filter_map(|(name, score)| score.as_f64().map(|s| (name.replacen('_', " ", 1), s))).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}

#[component]
pub fn MedecinAssistantPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::MedecinAssistant>
            <Assistant/>
        </DashboardLayout>
    }
}

#[component]
fn Assistant() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let symptoms = RwSignal::new(String::new());
    let diagnosis = RwSignal::new(None::<Value>);
    let treatment = RwSignal::new(None::<Value>);
    let loading = RwSignal::new(false);

    let on_predict = move |_| {
        let text = symptoms.get_untracked();
        if text.trim().is_empty() {
            toasts.update(|t| t.error("Veuillez saisir des symptômes"));
            return;
        }
        loading.set(true);
        spawn(async move {
            let outcome = async {
                let diag = api::predict_diagnosis(&text).await?;
                diagnosis.set(Some(diag.clone()));
                let treat = api::suggest_treatment(&text, diagnosis_text(&diag)).await?;
                treatment.set(Some(treat));
                Ok::<(), portal::ApiError>(())
            }
            .await;
            match outcome {
                Ok(()) => toasts.update(|t| t.success("Analyse terminée")),
                Err(_) => toasts.update(|t| t.error("Erreur lors de l'analyse")),
            }
            loading.set(false);
        });
    };

    let results = move || {
        diagnosis.get().map(|diag| {
            let label = diagnosis_text(&diag).unwrap_or_else(|| "Non disponible".to_owned());
            let confidence = confidence_percent(&diag);
            let treat = treatment.get().map(|t| treatment_text(&t).unwrap_or_else(|| "Non disponible".to_owned()));
            view! {
                <div class="assistant__results">
                    <section class="card">
                        <h3>"Diagnostic Suggéré"</h3>
                        <p class="card__headline">{label}</p>
                        {confidence.map(|c| view! { <p class="card__muted">{format!("Confiance: {c}")}</p> })}
                    </section>
                    {treat.map(|t| view! {
                        <section class="card">
                            <h3>"Traitement Suggéré"</h3>
                            <p>{t}</p>
                        </section>
                    })}
                </div>
            }
        })
    };

    view! {
        <div class="page assistant">
            <header class="page__header">
                <h1>"Assistant IA Médical"</h1>
                <p>"Analyse des symptômes et suggestions de diagnostic"</p>
            </header>
            <section class="card">
                <label for="symptoms">"Symptômes du patient"</label>
                <textarea
                    id="symptoms"
                    rows="6"
                    placeholder="Ex: Fièvre depuis 3 jours, maux de tête, toux sèche..."
                    prop:value=move || symptoms.get()
                    on:input=move |ev| symptoms.set(event_target_value(&ev))
                ></textarea>
                <button type="button" class="button" disabled=move || loading.get() on:click=on_predict>
                    {move || if loading.get() { "Analyse en cours..." } else { "Analyser" }}
                </button>
            </section>
            {results}
            <p class="assistant__disclaimer">
                <strong>"Avertissement: "</strong>
                "Les suggestions de l'IA sont à titre informatif uniquement. Elles ne remplacent pas le jugement clinique du médecin."
            </p>
        </div>
    }
}
