//! French display formatting for dates and times.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

const WEEKDAYS: [&str; 7] = ["lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche"];
const MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre", "octobre", "novembre",
    "décembre",
];

const SHORT_WEEKDAYS: [&str; 7] = ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."];
const SHORT_MONTHS: [&str; 12] =
    ["janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc."];

fn weekday(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

fn month(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

fn short_month(date: NaiveDate) -> &'static str {
    SHORT_MONTHS[date.month0() as usize]
}

/// `12/01/2026`
pub fn date(value: NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// `09:30`
pub fn time(value: NaiveDateTime) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}

/// `12/01/2026 à 09:30`
pub fn date_time(value: NaiveDateTime) -> String {
    format!("{} à {}", date(value.date()), time(value))
}

/// `lundi 12 janvier 2026`
pub fn long_date(value: NaiveDate) -> String {
    format!("{} {} {} {}", weekday(value), value.day(), month(value), value.year())
}

/// `lun. 12 janv.` for the slot picker's day strip.
pub fn short_day(value: NaiveDate) -> String {
    let weekday = SHORT_WEEKDAYS[value.weekday().num_days_from_monday() as usize];
    format!("{weekday} {} {}", value.day(), short_month(value))
}

/// `12 janv.`
pub fn day_month(value: NaiveDate) -> String {
    format!("{} {}", value.day(), short_month(value))
}

/// Render an ISO timestamp as `date_time`, falling back to the raw text.
pub fn timestamp(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('Z');
    let head = trimmed.split('.').next().unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S").map_or_else(|_| raw.to_owned(), date_time)
}

/// Consultation fee in dinars, `45 DT` or `42.50 DT`.
pub fn fee(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON { format!("{amount:.0} DT") } else { format!("{amount:.2} DT") }
}
