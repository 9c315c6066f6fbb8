//! Patient home: next appointment, counters and recent activity.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use portal::filters;
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, AppointmentStatus};

use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

/// Most recent completed appointment before `now`.
pub(crate) fn last_visit(appointments: &[AppointmentResponse], now: NaiveDateTime) -> Option<NaiveDateTime> {
    appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed && a.appointment_date_time <= now)
        .map(|a| a.appointment_date_time)
        .max()
}

/// Past appointments, newest first.
pub(crate) fn recent_activity(appointments: &[AppointmentResponse], now: NaiveDateTime, limit: usize) -> Vec<AppointmentResponse> {
    let mut past: Vec<&AppointmentResponse> = appointments.iter().filter(|a| a.appointment_date_time <= now).collect();
    past.sort_by(|a, b| b.appointment_date_time.cmp(&a.appointment_date_time));
    past.into_iter().take(limit).cloned().collect()
}

pub(crate) fn first_name(user: &portal::SessionUser) -> String {
    if user.first_name.is_empty() {
        user.display_name().split_whitespace().next().unwrap_or_default().to_owned()
    } else {
        user.first_name.clone()
    }
}

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::PatientDashboard>
            <PatientDashboard/>
        </DashboardLayout>
    }
}

#[component]
fn PatientDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let user = auth.get_untracked().user;
    let greeting = user.as_ref().map(first_name).unwrap_or_default();
    let patient_id = auth.get_untracked().keycloak_id().unwrap_or_default();

    let appointments = RwSignal::new(Vec::<AppointmentResponse>::new());
    let prescription_total = RwSignal::new(0_u64);

    {
        let patient_id = patient_id.clone();
        spawn(async move {
            match api::list_appointments(&AppointmentFilter::for_patient(&patient_id, 100)).await {
                Ok(page) => appointments.set(page.content),
                Err(_) => toasts.update(|t| t.error("Erreur lors du chargement des rendez-vous")),
            }
        });
    }
    spawn(async move {
        match api::patient_prescriptions(&patient_id, 0, 1).await {
            Ok(page) => prescription_total.set(page.total_elements),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
    });

    let now = move || Local::now().naive_local();
    let upcoming_count = Signal::derive(move || appointments.with(|list| filters::upcoming(list, now()).len()).to_string());
    let prescriptions = Signal::derive(move || prescription_total.get().to_string());
    let last = Signal::derive(move || {
        appointments.with(|list| last_visit(list, now())).map_or_else(|| "-".to_owned(), |at| format::date(at.date()))
    });

    let next_card = move || {
        let next = appointments.with(|list| filters::upcoming(list, now()).first().map(|a| (*a).clone()));
        match next {
            Some(a) => view! {
                <div class="card card--highlight">
                    <h3>"Prochain Rendez-vous"</h3>
                    <p class="card__headline">{format::date_time(a.appointment_date_time)}</p>
                    <p>{format!("Dr. {}", a.doctor_name.unwrap_or_else(|| "Non spécifié".to_owned()))}</p>
                    {a.reason.map(|r| view! { <p class="card__muted">{r}</p> })}
                    <a class="button" href="/patient/appointments">"Voir les détails"</a>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="card card--highlight">
                    <h3>"Prochain Rendez-vous"</h3>
                    <p class="card__muted">"Aucun rendez-vous à venir"</p>
                    <a class="button" href="/patient/appointments">"Prendre un rendez-vous"</a>
                </div>
            }
            .into_any(),
        }
    };

    let activity = move || {
        let items = appointments.with(|list| recent_activity(list, now(), 3));
        if items.is_empty() {
            return view! { <p class="card__muted">"Aucune activité récente"</p> }.into_any();
        }
        items
            .into_iter()
            .map(|a| {
                view! {
                    <div class="activity">
                        <p class="activity__title">{a.reason.unwrap_or_else(|| "Consultation".to_owned())}</p>
                        <p class="activity__meta">{format!("Dr. {}", a.doctor_name.unwrap_or_default())}</p>
                        <p class="activity__meta">{format::date(a.appointment_date_time.date())}</p>
                        <StatusBadge status=a.status/>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{format!("Bonjour, {greeting}")}</h1>
                <p>"Bienvenue sur votre espace patient MedInsight"</p>
            </header>
            <div class="stats-grid">
                <StatsCard label="Rendez-vous à venir" value=upcoming_count/>
                <StatsCard label="Ordonnances" value=prescriptions/>
                <StatsCard label="Dernière visite" value=last/>
            </div>
            <div class="dashboard-grid">
                {next_card}
                <div class="card">
                    <h3>"Activité Récente"</h3>
                    {activity}
                </div>
            </div>
            <section>
                <h3>"Actions Rapides"</h3>
                <div class="quick-actions">
                    <a class="quick-action" href="/patient/appointments">
                        <strong>"Prendre un rendez-vous"</strong>
                        <span>"Réserver une consultation avec un médecin"</span>
                    </a>
                    <a class="quick-action" href="/patient/dossier">
                        <strong>"Mon Dossier Médical"</strong>
                        <span>"Consulter mon historique médical"</span>
                    </a>
                    <a class="quick-action" href="/patient/prescriptions">
                        <strong>"Mes Ordonnances"</strong>
                        <span>"Voir mes prescriptions récentes"</span>
                    </a>
                </div>
            </section>
        </div>
    }
}
