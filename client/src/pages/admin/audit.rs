//! Administration view of the system audit trail.

use leptos::prelude::*;
use portal::filters;
use portal::guard::AppRoute;
use portal::types::AuditLog;

use crate::components::audit_table::AuditTable;
use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

#[component]
pub fn AdminAuditPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::AdminAudit>
            <AdminAudit/>
        </DashboardLayout>
    }
}

#[component]
fn AdminAudit() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let logs = RwSignal::new(Vec::<AuditLog>::new());
    let loading = RwSignal::new(true);
    let version = RwSignal::new(0_u32);
    let search = RwSignal::new(String::new());
    let service = RwSignal::new(filters::ALL.to_owned());

    Effect::new(move || {
        version.track();
        loading.set(true);
        spawn(async move {
            match api::audit_logs().await {
                Ok(found) => logs.set(found),
                Err(_) => toasts.update(|t| t.error("Impossible de charger les journaux d'audit")),
            }
            loading.set(false);
        });
    });

    let visible = Signal::derive(move || {
        let query = search.get();
        let wanted = service.get();
        logs.with(|all| filters::filter_audit_logs(all, &query, &wanted).into_iter().cloned().collect::<Vec<_>>())
    });

    let options = move || {
        logs.with(|all| filters::audit_services(all))
            .into_iter()
            .map(|name| {
                let label = if name == filters::ALL { "Tous les services".to_owned() } else { name.clone() };
                view! { <option value=name>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Journaux d'Audit Système"</h1>
                    <p>"Surveillance en temps réel des actions critiques"</p>
                </div>
                <button type="button" class="button button--ghost" on:click=move |_| version.update(|v| *v += 1)>
                    "Rafraîchir"
                </button>
            </header>
            <div class="filters">
                <input
                    class="search"
                    type="search"
                    placeholder="Rechercher par action, description ou ID utilisateur..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select prop:value=move || service.get() on:change=move |ev| service.set(event_target_value(&ev))>
                    {options}
                </select>
            </div>
            <AuditTable logs=visible loading=loading/>
        </div>
    }
}
