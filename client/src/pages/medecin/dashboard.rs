//! Médecin home: today's agenda and counters.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::Local;
use leptos::prelude::*;
use portal::filters::{self, StatusCounts};
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, AppointmentStatus};

use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

/// Share of today's appointments already completed, rounded.
pub(crate) fn completion_rate(counts: StatusCounts) -> u32 {
    let total = counts.total();
    if total == 0 {
        return 0;
    }
    u32::try_from((counts.completed * 100 + total / 2) / total).unwrap_or(100)
}

/// Patients on today's agenda; a patient booked twice counts once.
pub(crate) fn patient_count(todays: &[AppointmentResponse]) -> usize {
    filters::distinct_patients(todays).len()
}

#[component]
pub fn MedecinDashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::MedecinDashboard>
            <MedecinDashboard/>
        </DashboardLayout>
    }
}

#[component]
fn MedecinDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let user = auth.get_untracked().user;
    let last_name = user.as_ref().map(|u| u.last_name.clone()).unwrap_or_default();
    let doctor_id = user.map(|u| u.keycloak_id).unwrap_or_default();
    let today = Local::now().date_naive();

    let todays = RwSignal::new(Vec::<AppointmentResponse>::new());

    spawn(async move {
        match api::list_appointments(&AppointmentFilter::for_doctor(&doctor_id, 20)).await {
            Ok(page) => todays.set(filters::on_day(&page.content, today).into_iter().cloned().collect()),
            Err(_) => toasts.update(|t| t.error("Erreur lors du chargement du planning")),
        }
    });

    let counts = Memo::new(move |_| todays.with(|list| filters::status_counts(list)));
    let patients = Signal::derive(move || todays.with(|list| patient_count(list)).to_string());
    let completed = Signal::derive(move || counts.get().completed.to_string());
    let pending = Signal::derive(move || counts.get().pending().to_string());
    let rate = Signal::derive(move || format!("{}%", completion_rate(counts.get())));

    let agenda = move || {
        let list = todays.get();
        if list.is_empty() {
            return view! { <p class="card__muted">"Aucun rendez-vous prévu pour aujourd'hui."</p> }.into_any();
        }
        list.into_iter()
            .map(|a| {
                let done = a.status == AppointmentStatus::Completed;
                let href = AppRoute::MedecinConsultation(a.id.clone()).path();
                view! {
                    <div class=if done { "agenda-row agenda-row--done" } else { "agenda-row" }>
                        <span class="agenda-row__time">{format::time(a.appointment_date_time)}</span>
                        <div class="agenda-row__body">
                            <p>{a.patient_name.unwrap_or_else(|| "Patient".to_owned())}</p>
                            <p class="card__muted">{a.reason.unwrap_or_default()}</p>
                        </div>
                        <span class=if done { "badge badge--completed" } else { "badge badge--scheduled" }>
                            {if done { "Terminé" } else { "Prévu" }}
                        </span>
                        {(!done && a.status.is_open()).then(|| view! { <a class="button" href=href>"Démarrer"</a> })}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{format!("Bonjour, Dr. {last_name}")}</h1>
                <p>{format::long_date(today)}</p>
            </header>
            <div class="stats-grid">
                <StatsCard label="Patients aujourd'hui" value=patients/>
                <StatsCard label="Terminées" value=completed/>
                <StatsCard label="En attente" value=pending/>
                <StatsCard label="Taux de complétion" value=rate/>
            </div>
            <div class="dashboard-grid">
                <section class="card">
                    <h3>"Planning d'aujourd'hui"</h3>
                    {agenda}
                </section>
                <section class="card">
                    <h3>"Accès Rapide"</h3>
                    <a class="quick-action" href="/medecin/appointments">"Voir tout le planning"</a>
                    <a class="quick-action" href="/medecin/patients">"Rechercher un patient"</a>
                    <a class="quick-action" href="/medecin/schedule">"Gérer mes disponibilités"</a>
                </section>
            </div>
        </div>
    }
}
