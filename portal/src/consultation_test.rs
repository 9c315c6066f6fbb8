use super::*;
use chrono::NaiveDate;

fn appointment() -> AppointmentResponse {
    AppointmentResponse {
        id: "a1".to_owned(),
        patient_id: "p1".to_owned(),
        doctor_id: "d1".to_owned(),
        appointment_date_time: NaiveDate::from_ymd_opt(2026, 1, 12)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("datetime"),
        status: AppointmentStatus::Confirmed,
        reason: Some("Fièvre".to_owned()),
        notes: None,
        patient_name: Some("Alice Martin".to_owned()),
        doctor_name: Some("Karim Haddad".to_owned()),
    }
}

fn draft(name: &str, dosage: &str) -> PrescriptionDraft {
    PrescriptionDraft {
        medication_name: name.to_owned(),
        dosage: dosage.to_owned(),
        duration: "5 jours".to_owned(),
        instructions: String::new(),
    }
}

fn contact() -> PatientContact {
    PatientContact { email: Some("alice@example.com".to_owned()), first_name: Some("Alice".to_owned()) }
}

#[test]
fn plan_orders_note_prescriptions_completion_then_mail() {
    let drafts = [draft("Doliprane", "1g"), draft("Ibuprofène", "400mg")];
    let plan = completion_plan(&appointment(), "Grippe saisonnière", &drafts, &contact());
    assert_eq!(plan.len(), 5);
    assert!(matches!(&plan[0], ConsultationStep::AddNote(n) if n.note_content == "Grippe saisonnière" && n.patient_id == "p1"));
    assert!(matches!(&plan[1], ConsultationStep::AddPrescription { request, .. } if request.medication_name == "Doliprane"));
    assert!(matches!(&plan[2], ConsultationStep::AddPrescription { appointment_id, .. } if appointment_id == "a1"));
    let ConsultationStep::Complete { update, .. } = &plan[3] else {
        panic!("expected completion step");
    };
    assert_eq!(update.status, Some(AppointmentStatus::Completed));
    assert_eq!(update.notes.as_deref(), Some("Grippe saisonnière"));
    assert!(plan[4].is_best_effort());
    assert!(!plan[3].is_best_effort());
}

#[test]
fn blank_note_is_skipped() {
    let plan = completion_plan(&appointment(), "   ", &[], &contact());
    assert!(matches!(plan[0], ConsultationStep::Complete { .. }));
    assert_eq!(plan.len(), 2);
}

#[test]
fn mail_is_skipped_without_patient_email() {
    let plan = completion_plan(&appointment(), "", &[draft("X", "1")], &PatientContact::default());
    assert_eq!(plan.len(), 2);
    assert!(plan.iter().all(|s| !s.is_best_effort()));
}

#[test]
fn email_body_lists_prescriptions() {
    let drafts = [draft("Doliprane", "1g"), draft("Ventoline", "2 bouffées")];
    let mail = notification_email("alice@example.com", &appointment(), &drafts, &contact());
    assert_eq!(mail.subject, NOTIFICATION_SUBJECT);
    assert!(!mail.is_html);
    assert!(mail.body.starts_with("Bonjour Alice,\n\nLe Dr. Karim Haddad vient de terminer"));
    assert!(mail.body.contains("espace patient :\n- Doliprane (1g)\n- Ventoline (2 bouffées)\n\n"));
    assert!(mail.body.ends_with("L'équipe MedInsight"));
}

#[test]
fn email_body_falls_back_on_missing_names() {
    let mut appt = appointment();
    appt.doctor_name = None;
    let mail = notification_email("x@y.fr", &appt, &[], &PatientContact::default());
    assert!(mail.body.starts_with("Bonjour Patient,\n\nLe Dr. Médecin"));
}
