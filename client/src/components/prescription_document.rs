//! Printable prescription sheet.

#[cfg(test)]
#[path = "prescription_document_test.rs"]
mod prescription_document_test;

use chrono::Local;
use leptos::prelude::*;
use portal::types::Prescription;

use crate::util::format;

/// Stable document reference derived from the prescription id.
pub(crate) fn reference(id: &str) -> String {
    let tail: String = id.chars().filter(char::is_ascii_alphanumeric).collect();
    let start = tail.len().saturating_sub(6);
    format!("ORDX-{}", tail[start..].to_ascii_uppercase())
}

#[component]
pub fn PrescriptionDocument(prescription: Prescription, patient_name: String, doctor_name: String) -> impl IntoView {
    let issued = prescription.issued_at.map_or_else(|| Local::now().date_naive(), |at| at.date());
    let on_print = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        }
    };

    view! {
        <article class="prescription-document">
            <header class="prescription-document__header">
                <div>
                    <h2>"MedInsight Platform"</h2>
                    <p>"E-Health Service"</p>
                </div>
                <div class="prescription-document__ref">
                    <p>"Document Officiel"</p>
                    <p>{format!("Ref: {}", reference(&prescription.id))}</p>
                </div>
            </header>
            <section class="prescription-document__parties">
                <div>
                    <p class="prescription-document__caption">"Patient"</p>
                    <p>{patient_name}</p>
                </div>
                <div>
                    <p class="prescription-document__caption">"Médecin Prescripteur"</p>
                    <p>{format!("Dr. {doctor_name}")}</p>
                    <p>{format!("Date: {}", format::date(issued))}</p>
                </div>
            </section>
            <section class="prescription-document__body">
                <h3>"Ordonnance"</h3>
                <p class="prescription-document__medication">{prescription.medication_name}</p>
                <p class="prescription-document__dosage">{prescription.dosage}</p>
                <p>"Durée : " {prescription.duration.unwrap_or_default()}</p>
                {prescription.instructions.filter(|i| !i.is_empty()).map(|i| view! { <p class="prescription-document__note">"Note: " {i}</p> })}
            </section>
            <footer class="prescription-document__footer">
                <p>"Cette ordonnance est valable pour une durée de 3 mois à compter de sa date d'émission."</p>
                <button type="button" class="no-print" on:click=on_print>"Imprimer"</button>
            </footer>
        </article>
    }
}
