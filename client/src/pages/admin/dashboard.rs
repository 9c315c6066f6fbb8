//! Administration home: platform counters and shortcuts.

use leptos::prelude::*;
use portal::guard::AppRoute;
use portal::types::AppointmentFilter;

use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::AdminDashboard>
            <AdminDashboard/>
        </DashboardLayout>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(None::<u64>);
    let appointments = RwSignal::new(None::<u64>);

    spawn(async move {
        match api::admin_users(0, 1).await {
            Ok(page) => users.set(Some(page.total_elements)),
            Err(_) => toasts.update(|t| t.error("Erreur de chargement des statistiques")),
        }
        let filter = AppointmentFilter { size: 1, ..AppointmentFilter::default() };
        match api::list_appointments(&filter).await {
            Ok(page) => appointments.set(Some(page.total_elements)),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
    });

    let count = |signal: RwSignal<Option<u64>>| {
        Signal::derive(move || signal.get().map_or_else(|| "-".to_owned(), |n| n.to_string()))
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Administration"</h1>
                <p>"Vue d'ensemble de la plateforme MedInsight"</p>
            </header>
            <div class="stats-grid">
                <StatsCard label="Utilisateurs" value=count(users)/>
                <StatsCard label="Rendez-vous" value=count(appointments)/>
                <StatsCard label="Disponibilité système" value={"99.9%".to_owned()} hint="30 derniers jours"/>
            </div>
            <section class="card">
                <h3>"Accès Rapide"</h3>
                <a class="quick-action" href={AppRoute::AdminUsers.path()}>"Gérer les utilisateurs"</a>
                <a class="quick-action" href={AppRoute::AdminReports.path()}>"Voir les rapports"</a>
                <a class="quick-action" href={AppRoute::AdminAudit.path()}>"Journaux d'audit"</a>
            </section>
        </div>
    }
}
