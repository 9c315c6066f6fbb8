//! Detailed audit log search for the security officer.

#[cfg(test)]
#[path = "audit_logs_test.rs"]
mod audit_logs_test;

use leptos::prelude::*;
use portal::filters::{self, ALL};
use portal::guard::AppRoute;
use portal::types::AuditLog;

use crate::components::audit_table::AuditTable;
use crate::components::layout::DashboardLayout;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

/// Result filter value for any non-success status.
pub(crate) const FAILED: &str = "FAILED";

/// Search on actor, action and client IP, then restrict by service and
/// result.
pub(crate) fn search_logs<'a>(logs: &'a [AuditLog], search: &str, service: &str, result: &str) -> Vec<&'a AuditLog> {
    let needle = search.trim().to_lowercase();
    logs.iter()
        .filter(|log| {
            needle.is_empty()
                || log.user_id.to_lowercase().contains(&needle)
                || log.user_email.as_deref().is_some_and(|e| e.to_lowercase().contains(&needle))
                || log.action.to_lowercase().contains(&needle)
                || log.ip_address.as_deref().is_some_and(|ip| ip.contains(&needle))
        })
        .filter(|log| service == ALL || log.service_name == service)
        .filter(|log| {
            let success = log.status.eq_ignore_ascii_case("SUCCESS");
            match result {
                ALL => true,
                FAILED => !success,
                _ => success,
            }
        })
        .collect()
}

#[component]
pub fn SecurityAuditLogsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::SecurityAuditLogs>
            <AuditSearch/>
        </DashboardLayout>
    }
}

#[component]
fn AuditSearch() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logs = RwSignal::new(Vec::<AuditLog>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let service = RwSignal::new(ALL.to_owned());
    let result = RwSignal::new(ALL.to_owned());

    spawn(async move {
        match api::audit_logs().await {
            Ok(found) => logs.set(found),
            Err(_) => toasts.update(|t| t.error("Impossible de charger les journaux d'audit")),
        }
        loading.set(false);
    });

    let visible = Signal::derive(move || {
        let query = search.get();
        let wanted_service = service.get();
        let wanted_result = result.get();
        logs.with(|all| {
            search_logs(all, &query, &wanted_service, &wanted_result).into_iter().cloned().collect::<Vec<_>>()
        })
    });

    let total = Signal::derive(move || logs.with(Vec::len).to_string());
    let failures = Memo::new(move |_| logs.with(|all| filters::failed_audit_count(all)));
    let successes = Signal::derive(move || (logs.with(Vec::len) - failures.get()).to_string());
    let failed = Signal::derive(move || failures.get().to_string());
    let services =
        Signal::derive(move || logs.with(|all| filters::audit_services(all).len().saturating_sub(1)).to_string());

    let service_options = move || {
        logs.with(|all| filters::audit_services(all))
            .into_iter()
            .map(|name| {
                let label = if name == ALL { "Tous les services".to_owned() } else { name.clone() };
                view! { <option value=name>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Logs d'Audit"</h1>
                <p>"Consultation détaillée des événements système"</p>
            </header>
            <div class="filters">
                <input
                    class="search"
                    type="search"
                    placeholder="Rechercher par utilisateur, action ou IP..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select prop:value=move || service.get() on:change=move |ev| service.set(event_target_value(&ev))>
                    {service_options}
                </select>
                <select prop:value=move || result.get() on:change=move |ev| result.set(event_target_value(&ev))>
                    <option value=ALL>"Tous les résultats"</option>
                    <option value="SUCCESS">"Succès"</option>
                    <option value=FAILED>"Échecs"</option>
                </select>
            </div>
            <div class="stats-grid">
                <StatsCard label="Total Logs" value=total/>
                <StatsCard label="Succès" value=successes/>
                <StatsCard label="Échecs" value=failed/>
                <StatsCard label="Services Actifs" value=services/>
            </div>
            <AuditTable logs=visible loading=loading show_ip=true/>
        </div>
    }
}
