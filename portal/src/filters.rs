//! Client-side list filtering and dashboard counters.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use chrono::{NaiveDate, NaiveDateTime};

use crate::roles;
use crate::types::{AppointmentResponse, AppointmentStatus, AuditLog, Prescription, UserResponse};

/// Select value meaning "no filter".
pub const ALL: &str = "ALL";

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Search on email and names, then restrict to `role_filter` (`ALL` or a
/// role claim). Users without a role count as patients.
#[must_use]
pub fn filter_users<'a>(users: &'a [UserResponse], search: &str, role_filter: &str) -> Vec<&'a UserResponse> {
    let needle = search.trim().to_lowercase();
    let wanted = (role_filter != ALL).then(|| roles::normalize(role_filter));
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || contains_ci(&u.email, &needle)
                || contains_ci(&u.first_name, &needle)
                || contains_ci(&u.last_name, &needle)
        })
        .filter(|u| {
            wanted.as_deref().is_none_or(|w| roles::normalize(u.role.as_deref().unwrap_or("ROLE_PATIENT")) == w)
        })
        .collect()
}

/// Search on details, user id and action, then restrict to one service.
#[must_use]
pub fn filter_audit_logs<'a>(logs: &'a [AuditLog], search: &str, service: &str) -> Vec<&'a AuditLog> {
    let needle = search.trim().to_lowercase();
    logs.iter()
        .filter(|log| {
            needle.is_empty()
                || log.details.as_deref().is_some_and(|d| contains_ci(d, &needle))
                || contains_ci(&log.user_id, &needle)
                || contains_ci(&log.action, &needle)
        })
        .filter(|log| service == ALL || log.service_name == service)
        .collect()
}

/// `ALL` followed by each service name in first-seen order.
#[must_use]
pub fn audit_services(logs: &[AuditLog]) -> Vec<String> {
    let mut services = vec![ALL.to_owned()];
    for log in logs {
        if !services.contains(&log.service_name) {
            services.push(log.service_name.clone());
        }
    }
    services
}

/// Failed audit entries, for the security dashboard.
#[must_use]
pub fn failed_audit_count(logs: &[AuditLog]) -> usize {
    logs.iter().filter(|log| !log.status.eq_ignore_ascii_case("SUCCESS")).count()
}

#[must_use]
pub fn filter_prescriptions<'a>(items: &'a [Prescription], search: &str) -> Vec<&'a Prescription> {
    let needle = search.trim().to_lowercase();
    items.iter().filter(|p| needle.is_empty() || contains_ci(&p.medication_name, &needle)).collect()
}

/// Future appointments that are still open, soonest first.
#[must_use]
pub fn upcoming(appointments: &[AppointmentResponse], now: NaiveDateTime) -> Vec<&AppointmentResponse> {
    let mut list: Vec<&AppointmentResponse> =
        appointments.iter().filter(|a| a.appointment_date_time > now && a.status.is_open()).collect();
    list.sort_by_key(|a| a.appointment_date_time);
    list
}

/// Appointments on one calendar day, in time order.
#[must_use]
pub fn on_day(appointments: &[AppointmentResponse], day: NaiveDate) -> Vec<&AppointmentResponse> {
    let mut list: Vec<&AppointmentResponse> =
        appointments.iter().filter(|a| a.appointment_date_time.date() == day).collect();
    list.sort_by_key(|a| a.appointment_date_time);
    list
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub scheduled: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.scheduled + self.confirmed + self.cancelled + self.completed
    }

    /// Scheduled or confirmed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduled + self.confirmed
    }
}

#[must_use]
pub fn status_counts<'a>(appointments: impl IntoIterator<Item = &'a AppointmentResponse>) -> StatusCounts {
    appointments.into_iter().fold(StatusCounts::default(), |mut counts, a| {
        match a.status {
            AppointmentStatus::Scheduled => counts.scheduled += 1,
            AppointmentStatus::Confirmed => counts.confirmed += 1,
            AppointmentStatus::Cancelled => counts.cancelled += 1,
            AppointmentStatus::Completed => counts.completed += 1,
        }
        counts
    })
}

/// Distinct patients seen in `appointments`, first-seen order, as
/// `(patient_id, display name)`.
#[must_use]
pub fn distinct_patients(appointments: &[AppointmentResponse]) -> Vec<(String, String)> {
    let mut seen: Vec<(String, String)> = Vec::new();
    for a in appointments {
        if !seen.iter().any(|(id, _)| *id == a.patient_id) {
            let name = a.patient_name.clone().unwrap_or_else(|| a.patient_id.clone());
            seen.push((a.patient_id.clone(), name));
        }
    }
    seen
}
