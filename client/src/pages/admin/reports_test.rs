use chrono::NaiveDateTime;
use portal::types::{AppointmentStatus, MedecinProfile};

use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).expect("valid date")
}

fn appointment(d: u32) -> AppointmentResponse {
    let when: NaiveDateTime = day(d).and_hms_opt(10, 0, 0).expect("valid time");
    AppointmentResponse {
        id: format!("a-{d}"),
        patient_id: "p".to_owned(),
        doctor_id: "d".to_owned(),
        appointment_date_time: when,
        status: AppointmentStatus::Scheduled,
        reason: None,
        notes: None,
        patient_name: None,
        doctor_name: None,
    }
}

fn doctor(specialization: Option<&str>) -> UserResponse {
    UserResponse {
        id: "1".to_owned(),
        keycloak_id: "kc".to_owned(),
        email: "d@example.com".to_owned(),
        first_name: "Fatma".to_owned(),
        last_name: "Gharbi".to_owned(),
        phone_number: None,
        address_line: None,
        city: None,
        country: None,
        enabled: true,
        created_at: None,
        updated_at: None,
        role: Some("ROLE_MEDECIN".to_owned()),
        patient_profile: None,
        medecin_profile: Some(MedecinProfile {
            specialization: specialization.map(str::to_owned),
            ..MedecinProfile::default()
        }),
    }
}

#[test]
fn weekday_counts_only_inside_range() {
    // 2026-01-12 is a Monday.
    let list = vec![appointment(12), appointment(12), appointment(14), appointment(2), appointment(20)];
    let counts = weekday_counts(&list, day(18), 7);
    assert_eq!(counts, [2, 0, 1, 0, 0, 0, 0]);
}

#[test]
fn wider_range_includes_older_appointments() {
    let list = vec![appointment(2), appointment(12)];
    let counts = weekday_counts(&list, day(18), 30);
    assert_eq!(counts.iter().sum::<usize>(), 2);
}

#[test]
fn specialty_shares_group_and_sort() {
    let doctors = vec![
        doctor(Some("Cardiologue")),
        doctor(Some("Généraliste")),
        doctor(Some("Cardiologue")),
        doctor(None),
        doctor(Some("  ")),
    ];
    let shares = specialty_shares(&doctors, 2);
    assert_eq!(shares, vec![("Autre".to_owned(), 2), ("Cardiologue".to_owned(), 2)]);
}

#[test]
fn bar_style_is_relative_to_max() {
    assert_eq!(bar_style(5, 10), "width: 50%");
    assert_eq!(bar_style(10, 10), "width: 100%");
    assert_eq!(bar_style(3, 0), "width: 0%");
}
