//! Platform reports: headline counters, appointment load per weekday,
//! specialty distribution and the latest audit events.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Local, NaiveDate};
use leptos::prelude::*;
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, AuditLog, UserResponse};

use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

const RANGES: [(u32, &str); 3] = [(7, "7 derniers jours"), (30, "30 derniers jours"), (90, "3 derniers mois")];

/// Appointments per weekday, Monday first, restricted to the `days` days
/// ending on `today`.
pub(crate) fn weekday_counts(appointments: &[AppointmentResponse], today: NaiveDate, days: u32) -> [usize; 7] {
    let since = today - Duration::days(i64::from(days.saturating_sub(1)));
    let mut counts = [0; 7];
    for a in appointments {
        let day = a.appointment_date_time.date();
        if day >= since && day <= today {
            counts[a.appointment_date_time.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    counts
}

/// Doctors per specialization, largest first. Doctors without one count
/// under "Autre".
pub(crate) fn specialty_shares(doctors: &[UserResponse], limit: usize) -> Vec<(String, usize)> {
    let mut counts = BTreeMap::<String, usize>::new();
    for doctor in doctors {
        let name = doctor
            .medecin_profile
            .as_ref()
            .and_then(|p| p.specialization.clone())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Autre".to_owned());
        *counts.entry(name).or_default() += 1;
    }
    let mut shares: Vec<(String, usize)> = counts.into_iter().collect();
    shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    shares.truncate(limit);
    shares
}

/// Inline bar width relative to the largest value.
pub(crate) fn bar_style(value: usize, max: usize) -> String {
    let percent = if max == 0 { 0 } else { (value * 100 + max / 2) / max };
    format!("width: {percent}%")
}

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::AdminReports>
            <AdminReports/>
        </DashboardLayout>
    }
}

#[component]
fn AdminReports() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let today = Local::now().date_naive();
    let range = RwSignal::new(7_u32);
    let totals = RwSignal::new((None::<u64>, None::<u64>, None::<u64>, None::<u64>));
    let appointments = RwSignal::new(Vec::<AppointmentResponse>::new());
    let doctors = RwSignal::new(Vec::<UserResponse>::new());
    let activity = RwSignal::new(Vec::<AuditLog>::new());

    spawn(async move {
        let filter = AppointmentFilter { size: 200, ..AppointmentFilter::default() };
        match api::list_appointments(&filter).await {
            Ok(page) => {
                totals.update(|t| t.0 = Some(page.total_elements));
                appointments.set(page.content);
            }
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        match api::admin_users(0, 1).await {
            Ok(page) => totals.update(|t| t.1 = Some(page.total_elements)),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        match api::patients(0, 1).await {
            Ok(page) => totals.update(|t| t.2 = Some(page.total_elements)),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        match api::medecins(0, 100).await {
            Ok(page) => {
                totals.update(|t| t.3 = Some(page.total_elements));
                doctors.set(page.content);
            }
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        match api::audit_logs().await {
            Ok(mut logs) => {
                logs.truncate(5);
                activity.set(logs);
            }
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
    });

    let shown = |value: Option<u64>| value.map_or_else(|| "-".to_owned(), |n| n.to_string());
    let total_appointments = Signal::derive(move || shown(totals.get().0));
    let total_users = Signal::derive(move || shown(totals.get().1));
    let total_patients = Signal::derive(move || shown(totals.get().2));
    let total_doctors = Signal::derive(move || shown(totals.get().3));

    let weekday_chart = move || {
        let counts = appointments.with(|list| weekday_counts(list, today, range.get()));
        let max = counts.iter().copied().max().unwrap_or(0);
        WEEKDAY_LABELS
            .into_iter()
            .zip(counts)
            .map(|(label, count)| {
                view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{label}</span>
                        <div class="bar-chart__track">
                            <div class="bar-chart__bar" style={bar_style(count, max)}></div>
                        </div>
                        <span class="bar-chart__value">{count}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let specialty_chart = move || {
        let shares = doctors.with(|list| specialty_shares(list, 5));
        if shares.is_empty() {
            return view! { <p class="card__muted">"Aucun médecin enregistré."</p> }.into_any();
        }
        let max = shares.first().map_or(0, |s| s.1);
        shares
            .into_iter()
            .map(|(name, count)| {
                view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{name}</span>
                        <div class="bar-chart__track">
                            <div class="bar-chart__bar bar-chart__bar--alt" style={bar_style(count, max)}></div>
                        </div>
                        <span class="bar-chart__value">{count}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let recent = move || {
        let logs = activity.get();
        if logs.is_empty() {
            return view! { <p class="card__muted">"En attente de nouvelles données d'audit..."</p> }.into_any();
        }
        logs.into_iter()
            .map(|log| {
                let ok = log.status.eq_ignore_ascii_case("SUCCESS");
                let user: String = log.user_id.chars().take(8).collect();
                view! {
                    <div class="activity-row">
                        <span class=if ok { "dot dot--success" } else { "dot dot--failure" }></span>
                        <div>
                            <p>{log.action.clone()}</p>
                            <p class="card__muted">{format!("{} • {}", log.service_name, format::timestamp(&log.timestamp))}</p>
                        </div>
                        <span class="table__mono">{user}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Rapports et Statistiques"</h1>
                    <p>"Analyse de l'activité de la plateforme"</p>
                </div>
                <select
                    prop:value=move || range.get().to_string()
                    on:change=move |ev| range.set(event_target_value(&ev).parse().unwrap_or(7))
                >
                    {RANGES
                        .into_iter()
                        .map(|(days, label)| view! { <option value={days.to_string()}>{label}</option> })
                        .collect_view()}
                </select>
            </header>
            <div class="stats-grid">
                <StatsCard label="Total Rendez-vous" value=total_appointments/>
                <StatsCard label="Utilisateurs" value=total_users/>
                <StatsCard label="Patients" value=total_patients/>
                <StatsCard label="Médecins" value=total_doctors/>
            </div>
            <div class="dashboard-grid">
                <section class="card">
                    <h3>"Évolution des Rendez-vous"</h3>
                    <div class="bar-chart">{weekday_chart}</div>
                </section>
                <section class="card">
                    <h3>"Spécialités les Plus Représentées"</h3>
                    <div class="bar-chart">{specialty_chart}</div>
                </section>
            </div>
            <section class="card">
                <h3>"Activité Récente"</h3>
                {recent}
            </section>
        </div>
    }
}
