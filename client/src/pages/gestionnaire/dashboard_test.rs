use chrono::NaiveDate;
use portal::types::MedecinProfile;

use super::*;

fn appointment(doctor: &str, status: AppointmentStatus) -> AppointmentResponse {
    AppointmentResponse {
        id: "a".to_owned(),
        patient_id: "p".to_owned(),
        doctor_id: doctor.to_owned(),
        appointment_date_time: NaiveDate::from_ymd_opt(2026, 1, 12)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid date"),
        status,
        reason: None,
        notes: None,
        patient_name: None,
        doctor_name: None,
    }
}

fn doctor(keycloak_id: &str, fee: Option<f64>) -> UserResponse {
    UserResponse {
        id: format!("local-{keycloak_id}"),
        keycloak_id: keycloak_id.to_owned(),
        email: format!("{keycloak_id}@medinsight.tn"),
        first_name: "Karim".to_owned(),
        last_name: "Mansour".to_owned(),
        phone_number: None,
        address_line: None,
        city: None,
        country: None,
        enabled: true,
        created_at: None,
        updated_at: None,
        role: Some("ROLE_MEDECIN".to_owned()),
        patient_profile: None,
        medecin_profile: Some(MedecinProfile { consultation_fee: fee, ..MedecinProfile::default() }),
    }
}

#[test]
fn occupancy_excludes_cancellations() {
    let counts = StatusCounts { scheduled: 2, confirmed: 1, cancelled: 1, completed: 4 };
    assert_eq!(occupancy_rate(counts), 88);
    assert_eq!(occupancy_rate(StatusCounts::default()), 0);
}

#[test]
fn revenue_prices_completed_appointments_only() {
    let doctors = vec![doctor("d1", Some(50.0)), doctor("d2", Some(80.0)), doctor("d3", None)];
    let list = vec![
        appointment("d1", AppointmentStatus::Completed),
        appointment("d1", AppointmentStatus::Completed),
        appointment("d2", AppointmentStatus::Completed),
        appointment("d2", AppointmentStatus::Cancelled),
        appointment("d3", AppointmentStatus::Completed),
        appointment("unknown", AppointmentStatus::Completed),
    ];
    assert!((estimated_revenue(&list, &doctors) - 180.0).abs() < f64::EPSILON);
}
