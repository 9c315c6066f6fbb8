use super::*;
use crate::types::SlotStatus;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 10).expect("date")
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, day).and_then(|d| d.and_hms_opt(hour, minute, 0)).expect("datetime")
}

fn slot(day: u32, hour: u32, status: SlotStatus) -> TimeSlot {
    TimeSlot {
        start_time: at(day, hour, 0),
        end_time: at(day, hour, 30),
        duration_minutes: 30,
        is_available: status == SlotStatus::Available,
        status,
    }
}

fn now() -> NaiveDateTime {
    at(10, 8, 0)
}

fn wizard_at_confirm() -> BookingWizard {
    let mut wizard = BookingWizard::new(today());
    wizard.select_doctor("d1", "Dr Martin").expect("doctor");
    wizard.next().expect("to slot");
    wizard.select_slot(&slot(12, 9, SlotStatus::Available), now()).expect("slot");
    wizard.next().expect("to details");
    wizard.set_reason("  Douleur au genou ").expect("reason");
    wizard.next().expect("to confirm");
    wizard
}

// =============================================================================
// TRANSITIONS
// =============================================================================

#[test]
fn new_wizard_starts_on_doctor_step_today() {
    let wizard = BookingWizard::new(today());
    assert_eq!(wizard.step(), BookingStep::ChooseDoctor);
    assert_eq!(wizard.date(), today());
    assert!(wizard.doctor().is_none());
    assert!(!wizard.can_advance());
}

#[test]
fn cannot_skip_incomplete_steps() {
    let mut wizard = BookingWizard::new(today());
    assert_eq!(wizard.next(), Err(BookingError::Incomplete));
    wizard.select_doctor("d1", "Dr Martin").expect("doctor");
    assert_eq!(wizard.next(), Ok(BookingStep::ChooseSlot));
    assert_eq!(wizard.next(), Err(BookingError::Incomplete));
    wizard.select_slot(&slot(11, 10, SlotStatus::Available), now()).expect("slot");
    assert_eq!(wizard.next(), Ok(BookingStep::Details));
    wizard.set_reason("   ").expect("reason");
    assert_eq!(wizard.next(), Err(BookingError::Incomplete));
}

#[test]
fn full_flow_builds_single_request() {
    let mut wizard = wizard_at_confirm();
    assert_eq!(wizard.step(), BookingStep::Confirm);
    assert_eq!(wizard.next(), Err(BookingError::Incomplete));
    let request = wizard.request("p1").expect("request");
    assert_eq!(request.patient_id, "p1");
    assert_eq!(request.doctor_id, "d1");
    assert_eq!(request.appointment_date_time, at(12, 9, 0));
    assert_eq!(request.reason, "Douleur au genou");
    wizard.mark_submitted().expect("submitted");
    assert_eq!(wizard.step(), BookingStep::Submitted);
}

#[test]
fn request_is_only_available_on_confirm() {
    let mut wizard = BookingWizard::new(today());
    wizard.select_doctor("d1", "Dr").expect("doctor");
    assert_eq!(wizard.request("p1"), Err(BookingError::Incomplete));
    assert_eq!(wizard.mark_submitted(), Err(BookingError::Incomplete));
}

#[test]
fn back_walks_one_step_and_stops_at_start() {
    let mut wizard = wizard_at_confirm();
    assert_eq!(wizard.back(), BookingStep::Details);
    assert_eq!(wizard.back(), BookingStep::ChooseSlot);
    assert_eq!(wizard.back(), BookingStep::ChooseDoctor);
    assert_eq!(wizard.back(), BookingStep::ChooseDoctor);
    assert_eq!(wizard.slot().map(|s| s.start_time), Some(at(12, 9, 0)));
}

#[test]
fn submitted_wizard_is_frozen_until_reset() {
    let mut wizard = wizard_at_confirm();
    wizard.mark_submitted().expect("submitted");
    assert_eq!(wizard.back(), BookingStep::Submitted);
    assert_eq!(wizard.select_doctor("d2", "Dr B"), Err(BookingError::AlreadySubmitted));
    assert_eq!(wizard.set_reason("x"), Err(BookingError::AlreadySubmitted));
    assert_eq!(wizard.request("p1"), Err(BookingError::AlreadySubmitted));
    wizard.reset(today());
    assert_eq!(wizard, BookingWizard::new(today()));
}

// =============================================================================
// INPUT RULES
// =============================================================================

#[test]
fn changing_doctor_clears_slot_and_returns_to_slot_step() {
    let mut wizard = wizard_at_confirm();
    wizard.select_doctor("d2", "Dr Bernard").expect("doctor");
    assert!(wizard.slot().is_none());
    assert_eq!(wizard.step(), BookingStep::ChooseSlot);
    assert_eq!(wizard.reason(), "  Douleur au genou ");
}

#[test]
fn reselecting_same_doctor_keeps_slot() {
    let mut wizard = wizard_at_confirm();
    wizard.select_doctor("d1", "Dr Martin").expect("doctor");
    assert!(wizard.slot().is_some());
    assert_eq!(wizard.step(), BookingStep::Confirm);
}

#[test]
fn slot_requires_a_doctor() {
    let mut wizard = BookingWizard::new(today());
    assert_eq!(wizard.select_slot(&slot(12, 9, SlotStatus::Available), now()), Err(BookingError::NoDoctor));
}

#[test]
fn booked_and_unavailable_slots_are_rejected() {
    let mut wizard = BookingWizard::new(today());
    wizard.select_doctor("d1", "Dr").expect("doctor");
    assert_eq!(wizard.select_slot(&slot(12, 9, SlotStatus::Booked), now()), Err(BookingError::SlotUnavailable));
    assert_eq!(wizard.select_slot(&slot(12, 9, SlotStatus::Unavailable), now()), Err(BookingError::SlotUnavailable));
    let mut flagged = slot(12, 9, SlotStatus::Available);
    flagged.is_available = false;
    assert_eq!(wizard.select_slot(&flagged, now()), Err(BookingError::SlotUnavailable));
    assert!(wizard.slot().is_none());
}

#[test]
fn past_slots_are_rejected() {
    let mut wizard = BookingWizard::new(today());
    wizard.select_doctor("d1", "Dr").expect("doctor");
    assert_eq!(wizard.select_slot(&slot(10, 7, SlotStatus::Available), now()), Err(BookingError::SlotInPast));
    assert_eq!(wizard.select_slot(&slot(10, 8, SlotStatus::Available), now()), Err(BookingError::SlotInPast));
    assert!(wizard.select_slot(&slot(10, 9, SlotStatus::Available), now()).is_ok());
}

#[test]
fn slots_beyond_window_are_rejected() {
    let mut wizard = BookingWizard::new(today());
    wizard.select_doctor("d1", "Dr").expect("doctor");
    assert_eq!(wizard.select_slot(&slot(24, 9, SlotStatus::Available), now()), Err(BookingError::DateOutOfWindow));
    assert!(wizard.select_slot(&slot(23, 9, SlotStatus::Available), now()).is_ok());
    assert_eq!(wizard.date(), NaiveDate::from_ymd_opt(2026, 1, 23).expect("date"));
}

#[test]
fn select_date_enforces_window_and_drops_other_day_slot() {
    let mut wizard = BookingWizard::new(today());
    wizard.select_doctor("d1", "Dr").expect("doctor");
    wizard.select_slot(&slot(12, 9, SlotStatus::Available), now()).expect("slot");
    let before = NaiveDate::from_ymd_opt(2026, 1, 9).expect("date");
    assert_eq!(wizard.select_date(before), Err(BookingError::DateOutOfWindow));
    let same_day = NaiveDate::from_ymd_opt(2026, 1, 12).expect("date");
    wizard.select_date(same_day).expect("date");
    assert!(wizard.slot().is_some());
    let other_day = NaiveDate::from_ymd_opt(2026, 1, 13).expect("date");
    wizard.select_date(other_day).expect("date");
    assert!(wizard.slot().is_none());
}

#[test]
fn reason_is_capped_at_500_chars() {
    let mut wizard = BookingWizard::new(today());
    let max = "é".repeat(REASON_MAX_CHARS);
    wizard.set_reason(&max).expect("max length");
    assert_eq!(wizard.set_reason(&"a".repeat(REASON_MAX_CHARS + 1)), Err(BookingError::ReasonTooLong));
    assert_eq!(wizard.reason(), max);
}

#[test]
fn booking_days_lists_fourteen_dates_from_today() {
    let days = booking_days(today());
    assert_eq!(days.len(), 14);
    assert_eq!(days[0], today());
    assert_eq!(days[13], NaiveDate::from_ymd_opt(2026, 1, 23).expect("date"));
}

#[test]
fn step_labels_follow_order() {
    let indices: Vec<usize> = BookingStep::ALL.iter().map(|s| s.index()).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4]);
    assert_eq!(BookingStep::Confirm.label(), "Confirmation");
}
