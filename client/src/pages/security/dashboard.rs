//! Security centre: audit counters, monitoring consoles and the latest
//! audit events.

use leptos::prelude::*;
use portal::filters;
use portal::guard::AppRoute;
use portal::navigation::sidebar;
use portal::roles::Area;
use portal::types::AuditLog;

use crate::components::audit_table::AuditTable;
use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::config::external_links;
use crate::util::task::spawn;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn SecurityDashboardPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::SecurityDashboard>
            <SecurityDashboard/>
        </DashboardLayout>
    }
}

#[component]
fn SecurityDashboard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logs = RwSignal::new(Vec::<AuditLog>::new());
    let loading = RwSignal::new(true);

    spawn(async move {
        match api::audit_logs().await {
            Ok(found) => logs.set(found),
            Err(_) => toasts.update(|t| t.error("Impossible de charger les journaux d'audit")),
        }
        loading.set(false);
    });

    let total = Signal::derive(move || logs.with(Vec::len).to_string());
    let failed = Signal::derive(move || logs.with(|all| filters::failed_audit_count(all)).to_string());
    let services =
        Signal::derive(move || logs.with(|all| filters::audit_services(all).len().saturating_sub(1)).to_string());
    let recent = Signal::derive(move || logs.with(|all| all.iter().take(RECENT_LIMIT).cloned().collect::<Vec<_>>()));

    let consoles = sidebar(Area::Security, false, &external_links())
        .into_iter()
        .filter(|item| item.external)
        .map(|item| {
            view! {
                <a class="quick-link" href=item.href target="_blank" rel="noopener noreferrer">
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Centre de Sécurité"</h1>
                <p>"Monitoring et supervision des logs d'audit"</p>
            </header>
            <div class="stats-grid">
                <StatsCard label="Logs enregistrés" value=total/>
                <StatsCard label="Tentatives échouées" value=failed/>
                <StatsCard label="Services actifs" value=services/>
            </div>
            <section class="card">
                <h3>"Infrastructure"</h3>
                <div class="quick-links">{consoles}</div>
            </section>
            <section class="card">
                <header class="card__header">
                    <h3>"Logs d'Audit Récents"</h3>
                    <a class="button button--ghost" href={AppRoute::SecurityAuditLogs.path()}>"Recherche avancée"</a>
                </header>
                <AuditTable logs=recent loading=loading/>
            </section>
        </div>
    }
}
