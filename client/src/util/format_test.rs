use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn numeric_formats_are_zero_padded() {
    let value = day(2026, 1, 5).and_hms_opt(9, 5, 0).expect("time");
    assert_eq!(date(value.date()), "05/01/2026");
    assert_eq!(time(value), "09:05");
    assert_eq!(date_time(value), "05/01/2026 à 09:05");
}

#[test]
fn long_and_short_day_labels_are_french() {
    assert_eq!(long_date(day(2026, 1, 12)), "lundi 12 janvier 2026");
    assert_eq!(long_date(day(2026, 8, 16)), "dimanche 16 août 2026");
    assert_eq!(short_day(day(2026, 1, 14)), "mer. 14 janv.");
    assert_eq!(day_month(day(2026, 3, 1)), "1 mars");
}

#[test]
fn timestamp_accepts_fractional_and_zulu_suffix() {
    assert_eq!(timestamp("2026-01-10T10:00:00"), "10/01/2026 à 10:00");
    assert_eq!(timestamp("2026-01-10T10:00:00.123456Z"), "10/01/2026 à 10:00");
    assert_eq!(timestamp("hier"), "hier");
}

#[test]
fn fee_drops_zero_cents() {
    assert_eq!(fee(45.0), "45 DT");
    assert_eq!(fee(42.5), "42.50 DT");
}
