use chrono::NaiveDateTime;

use super::*;

fn visit(patient_id: &str, raw: &str, status: AppointmentStatus) -> AppointmentResponse {
    AppointmentResponse {
        id: format!("{patient_id}-{raw}"),
        patient_id: patient_id.to_owned(),
        doctor_id: "kc-doc".to_owned(),
        appointment_date_time: NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").expect("date-time"),
        status,
        reason: None,
        notes: None,
        patient_name: None,
        doctor_name: None,
    }
}

#[test]
fn completion_rate_is_zero_without_appointments() {
    assert_eq!(completion_rate(StatusCounts::default()), 0);
}

#[test]
fn completion_rate_rounds_to_whole_percent() {
    let counts = StatusCounts { scheduled: 1, confirmed: 1, cancelled: 0, completed: 1 };
    assert_eq!(completion_rate(counts), 33);
    let counts = StatusCounts { scheduled: 1, confirmed: 0, cancelled: 0, completed: 2 };
    assert_eq!(completion_rate(counts), 67);
}

#[test]
fn patient_count_ignores_repeat_visits() {
    let todays = [
        visit("kc-1", "2026-01-18T09:00:00", AppointmentStatus::Completed),
        visit("kc-2", "2026-01-18T10:00:00", AppointmentStatus::Scheduled),
        visit("kc-1", "2026-01-18T16:00:00", AppointmentStatus::Confirmed),
    ];
    assert_eq!(patient_count(&todays), 2);
    assert_eq!(patient_count(&[]), 0);
}
