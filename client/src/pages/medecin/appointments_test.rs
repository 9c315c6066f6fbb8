use chrono::NaiveDateTime;

use super::*;

fn appointment_on(raw: &str) -> AppointmentResponse {
    AppointmentResponse {
        id: "a".to_owned(),
        patient_id: "p".to_owned(),
        doctor_id: "d".to_owned(),
        appointment_date_time: NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").expect("date-time"),
        status: AppointmentStatus::Scheduled,
        reason: None,
        notes: None,
        patient_name: None,
        doctor_name: None,
    }
}

#[test]
fn status_filter_all_is_none() {
    assert_eq!(status_filter("ALL"), None);
    assert_eq!(status_filter("COMPLETED"), Some(AppointmentStatus::Completed));
}

#[test]
fn parse_day_accepts_date_input_values() {
    assert_eq!(parse_day("2026-01-18"), NaiveDate::from_ymd_opt(2026, 1, 18));
    assert_eq!(parse_day(""), None);
}

#[test]
fn day_filter_matches_calendar_date() {
    let a = appointment_on("2026-01-18T10:30:00");
    assert!(on_selected_day(&a, None));
    assert!(on_selected_day(&a, NaiveDate::from_ymd_opt(2026, 1, 18)));
    assert!(!on_selected_day(&a, NaiveDate::from_ymd_opt(2026, 1, 19)));
}
