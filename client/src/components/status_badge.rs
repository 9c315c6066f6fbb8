//! Appointment status pill.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use portal::types::AppointmentStatus;

pub(crate) fn badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "badge badge--scheduled",
        AppointmentStatus::Confirmed => "badge badge--confirmed",
        AppointmentStatus::Cancelled => "badge badge--cancelled",
        AppointmentStatus::Completed => "badge badge--completed",
    }
}

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.label()}</span> }
}
