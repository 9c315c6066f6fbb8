//! Read-only rendering of a patient dossier, shared by the patient and
//! médecin areas.

#[cfg(test)]
#[path = "dossier_view_test.rs"]
mod dossier_view_test;

use leptos::prelude::*;
use portal::types::{AppointmentStatus, Dossier};

use crate::util::format;

/// Stored value, or `fallback` when absent or blank.
pub(crate) fn or_fallback(value: Option<&str>, fallback: &'static str) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback).to_owned()
}

/// Dossier appointments carry the raw status string.
pub(crate) fn status_label(raw: &str) -> String {
    AppointmentStatus::parse(raw).map_or_else(|| raw.to_owned(), |s| s.label().to_owned())
}

#[component]
pub fn DossierView(dossier: Dossier) -> impl IntoView {
    let record = dossier.medical_record.unwrap_or_default();

    let notes = if dossier.consultation_notes.is_empty() {
        view! { <p class="card__muted">"Aucune note de consultation."</p> }.into_any()
    } else {
        dossier
            .consultation_notes
            .into_iter()
            .map(|note| {
                let when = note.created_at.map(|at| format!("Consultation du {}", format::date(at.date())));
                view! {
                    <article class="note">
                        <p class="note__title">"Note Médicale"</p>
                        {when.map(|w| view! { <p class="note__date">{w}</p> })}
                        <blockquote>{format!("\"{}\"", note.note_content)}</blockquote>
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    let history = dossier
        .appointment_history
        .into_iter()
        .map(|a| {
            view! {
                <tr>
                    <td>{format::date_time(a.appointment_date_time)}</td>
                    <td>{a.reason.unwrap_or_default()}</td>
                    <td>{status_label(&a.status)}</td>
                </tr>
            }
        })
        .collect_view();

    let prescriptions = dossier
        .prescription_history
        .into_iter()
        .map(|p| {
            view! {
                <li>
                    <strong>{p.medication_name}</strong>
                    {format!(" · {}", p.dosage)}
                    {p.duration.map(|d| format!(" · {d}"))}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="dossier">
            <aside class="card dossier__summary">
                <h3>"Profil Patient"</h3>
                <dl>
                    <dt>"Groupe Sanguin"</dt>
                    <dd>{or_fallback(record.blood_type.as_deref(), "N/A")}</dd>
                    <dt>"Allergies"</dt>
                    <dd>{or_fallback(record.allergies.as_deref(), "Aucune allergie connue")}</dd>
                    <dt>"Maladies chroniques"</dt>
                    <dd>{or_fallback(record.chronic_conditions.as_deref(), "Aucune")}</dd>
                    <dt>"Antécédents"</dt>
                    <dd>{or_fallback(record.medical_history.as_deref(), "Pas d'antécédents majeurs")}</dd>
                    <dt>"Contact d'urgence"</dt>
                    <dd>
                        {or_fallback(record.emergency_contact_name.as_deref(), "N/A")}
                        {record.emergency_contact_phone.map(|p| format!(" ({p})"))}
                    </dd>
                </dl>
            </aside>
            <div class="dossier__main">
                <section class="card">
                    <h3>"Historique des Consultations"</h3>
                    {notes}
                </section>
                <section class="card">
                    <h3>"Rendez-vous"</h3>
                    <table class="table">
                        <thead>
                            <tr><th>"Date"</th><th>"Motif"</th><th>"Statut"</th></tr>
                        </thead>
                        <tbody>{history}</tbody>
                    </table>
                </section>
                <section class="card">
                    <h3>"Ordonnances"</h3>
                    <ul class="dossier__prescriptions">{prescriptions}</ul>
                </section>
            </div>
        </div>
    }
}
