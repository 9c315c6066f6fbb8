use super::*;

fn row(day: &str, start: &str, active: bool) -> DoctorSchedule {
    DoctorSchedule {
        id: format!("s-{day}"),
        doctor_id: "d1".to_owned(),
        day_of_week: day.to_owned(),
        start_time: start.to_owned(),
        end_time: "12:00:00".to_owned(),
        slot_duration_minutes: 20,
        is_active: active,
    }
}

#[test]
fn every_weekday_has_a_french_label() {
    assert!(DAYS_OF_WEEK.iter().all(|d| !day_label(d).is_empty()));
    assert_eq!(day_label("WEDNESDAY"), "Mercredi");
    assert_eq!(day_label("HOLIDAY"), "");
}

#[test]
fn time_input_value_drops_seconds() {
    assert_eq!(time_input_value("08:30:00"), "08:30");
    assert_eq!(time_input_value("08:30"), "08:30");
}

#[test]
fn edit_merges_over_existing_row() {
    let existing = [row("MONDAY", "08:00", false)];
    let update = apply_edit("d1", "MONDAY", &existing, DayEdit::Active(true));
    assert_eq!(update.start_time, "08:00");
    assert_eq!(update.slot_duration_minutes, 20);
    assert!(update.is_active);
}

#[test]
fn edit_of_unset_day_uses_defaults() {
    let update = apply_edit("d1", "SATURDAY", &[row("MONDAY", "08:00", true)], DayEdit::Duration(45));
    assert_eq!(update.day_of_week, "SATURDAY");
    assert_eq!((update.start_time.as_str(), update.end_time.as_str()), ("09:00", "17:00"));
    assert_eq!(update.slot_duration_minutes, 45);
    assert!(update.is_active);
}
