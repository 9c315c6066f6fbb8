//! Completing a consultation.
//!
//! Finishing a visit is a fixed sequence of gateway calls. The plan is built
//! here so the page only has to execute it in order, stopping at the first
//! failure except for the best-effort email.

#[cfg(test)]
#[path = "consultation_test.rs"]
mod consultation_test;

use crate::types::{
    AppointmentResponse, AppointmentStatus, AppointmentUpdate, ConsultationNoteRequest, MailRequest,
    PrescriptionDraft, PrescriptionRequest,
};

pub const NOTIFICATION_SUBJECT: &str = "Nouvelles Ordonnances Disponibles - MedInsight";

/// Patient contact details known to the consultation page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientContact {
    pub email: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConsultationStep {
    AddNote(ConsultationNoteRequest),
    AddPrescription { appointment_id: String, request: PrescriptionRequest },
    Complete { appointment_id: String, update: AppointmentUpdate },
    Notify(MailRequest),
}

impl ConsultationStep {
    /// Failure of this step is logged and does not fail the consultation.
    #[must_use]
    pub fn is_best_effort(&self) -> bool {
        matches!(self, Self::Notify(_))
    }
}

/// Note (if any), each prescription, the `COMPLETED` update, then the email
/// when the patient's address is known.
#[must_use]
pub fn completion_plan(
    appointment: &AppointmentResponse,
    note: &str,
    prescriptions: &[PrescriptionDraft],
    patient: &PatientContact,
) -> Vec<ConsultationStep> {
    let mut steps = Vec::with_capacity(prescriptions.len() + 3);
    if !note.trim().is_empty() {
        steps.push(ConsultationStep::AddNote(ConsultationNoteRequest {
            appointment_id: appointment.id.clone(),
            patient_id: appointment.patient_id.clone(),
            note_content: note.to_owned(),
        }));
    }
    steps.extend(prescriptions.iter().map(|draft| ConsultationStep::AddPrescription {
        appointment_id: appointment.id.clone(),
        request: draft.clone().into_request(&appointment.patient_id),
    }));
    steps.push(ConsultationStep::Complete {
        appointment_id: appointment.id.clone(),
        update: AppointmentUpdate {
            status: Some(AppointmentStatus::Completed),
            notes: Some(note.to_owned()),
            ..AppointmentUpdate::default()
        },
    });
    if let Some(email) = patient.email.as_deref().filter(|e| !e.trim().is_empty()) {
        steps.push(ConsultationStep::Notify(notification_email(email, appointment, prescriptions, patient)));
    }
    steps
}

/// Plain-text notice listing the new prescriptions.
#[must_use]
pub fn notification_email(
    to: &str,
    appointment: &AppointmentResponse,
    prescriptions: &[PrescriptionDraft],
    patient: &PatientContact,
) -> MailRequest {
    let list = prescriptions
        .iter()
        .map(|p| format!("- {} ({})", p.medication_name, p.dosage))
        .collect::<Vec<_>>()
        .join("\n");
    let first_name = patient.first_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Patient");
    let doctor = appointment.doctor_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Médecin");
    MailRequest {
        to: to.trim().to_owned(),
        subject: NOTIFICATION_SUBJECT.to_owned(),
        body: format!(
            "Bonjour {first_name},\n\nLe Dr. {doctor} vient de terminer votre consultation.\n\n\
             Vous trouverez vos nouvelles ordonnances dans votre espace patient :\n{list}\n\n\
             Merci de votre confiance,\nL'équipe MedInsight"
        ),
        is_html: false,
    }
}
