//! Clinic activity overview computed from the appointment and doctor
//! directories.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use portal::filters::{self, StatusCounts};
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, AppointmentStatus, UserResponse};

use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::pages::admin::reports::specialty_shares;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

/// Share of appointments that were not cancelled, rounded.
pub(crate) fn occupancy_rate(counts: StatusCounts) -> u32 {
    let total = counts.total();
    if total == 0 {
        return 0;
    }
    let kept = total - counts.cancelled;
    u32::try_from((kept * 100 + total / 2) / total).unwrap_or(100)
}

/// Sum of consultation fees for completed appointments, priced with the
/// doctor's current fee.
pub(crate) fn estimated_revenue(appointments: &[AppointmentResponse], doctors: &[UserResponse]) -> f64 {
    appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .filter_map(|a| {
            doctors
                .iter()
                .find(|d| d.keycloak_id == a.doctor_id || d.id == a.doctor_id)
                .and_then(|d| d.medecin_profile.as_ref())
                .and_then(|p| p.consultation_fee)
        })
        .sum()
}

#[component]
pub fn GestionnaireDashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::GestionnaireDashboard>
            <GestionnaireDashboard/>
        </DashboardLayout>
    }
}

#[component]
fn GestionnaireDashboard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let appointments = RwSignal::new(Vec::<AppointmentResponse>::new());
    let total_appointments = RwSignal::new(0_u64);
    let total_patients = RwSignal::new(0_u64);
    let doctors = RwSignal::new(Vec::<UserResponse>::new());

    spawn(async move {
        let filter = AppointmentFilter { size: 200, ..AppointmentFilter::default() };
        match api::list_appointments(&filter).await {
            Ok(page) => {
                total_appointments.set(page.total_elements);
                appointments.set(page.content);
            }
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        match api::patients(0, 1).await {
            Ok(page) => total_patients.set(page.total_elements),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        match api::medecins(0, 100).await {
            Ok(page) => doctors.set(page.content),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
    });

    let counts = Memo::new(move |_| appointments.with(|list| filters::status_counts(list)));
    let appointments_value = Signal::derive(move || total_appointments.get().to_string());
    let patients_value = Signal::derive(move || total_patients.get().to_string());
    let occupancy = Signal::derive(move || format!("{}%", occupancy_rate(counts.get())));
    let revenue = Signal::derive(move || {
        appointments.with(|list| doctors.with(|docs| format::fee(estimated_revenue(list, docs))))
    });

    let status_rows = move || {
        let c = counts.get();
        [
            (AppointmentStatus::Scheduled, c.scheduled),
            (AppointmentStatus::Confirmed, c.confirmed),
            (AppointmentStatus::Completed, c.completed),
            (AppointmentStatus::Cancelled, c.cancelled),
        ]
        .into_iter()
        .map(|(status, n)| view! { <li class="summary-row"><span>{status.label()}</span><strong>{n}</strong></li> })
        .collect_view()
    };

    let specialty_rows = move || {
        doctors
            .with(|list| specialty_shares(list, 6))
            .into_iter()
            .map(|(name, n)| view! { <li class="summary-row"><span>{name}</span><strong>{n}</strong></li> })
            .collect_view()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Tableau de Bord Gestion"</h1>
                <p>"Aperçu de l'activité de la clinique."</p>
            </header>
            <div class="stats-grid">
                <StatsCard label="Rendez-vous Total" value=appointments_value/>
                <StatsCard label="Patients" value=patients_value/>
                <StatsCard label="Taux d'Occupation" value=occupancy/>
                <StatsCard label="Revenus (Est.)" value=revenue/>
            </div>
            <div class="dashboard-grid">
                <section class="card">
                    <h3>"Rendez-vous par statut"</h3>
                    <ul>{status_rows}</ul>
                </section>
                <section class="card">
                    <h3>"Répartition par spécialité"</h3>
                    <ul>{specialty_rows}</ul>
                </section>
            </div>
        </div>
    }
}
