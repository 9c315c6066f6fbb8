//! Audit log table shared by the administration and security areas.

#[cfg(test)]
#[path = "audit_table_test.rs"]
mod audit_table_test;

use leptos::prelude::*;
use portal::types::AuditLog;

use crate::util::format;

pub(crate) fn audit_status_class(status: &str) -> &'static str {
    if status.eq_ignore_ascii_case("SUCCESS") {
        "badge badge--success"
    } else if status.eq_ignore_ascii_case("FAILURE") || status.eq_ignore_ascii_case("FAILED") {
        "badge badge--failure"
    } else {
        "badge badge--info"
    }
}

/// Actor column: email when the service recorded one, else the user id.
pub(crate) fn actor(log: &AuditLog) -> String {
    log.user_email.clone().filter(|e| !e.is_empty()).unwrap_or_else(|| log.user_id.clone())
}

#[component]
pub fn AuditTable(
    #[prop(into)] logs: Signal<Vec<AuditLog>>,
    #[prop(into)] loading: Signal<bool>,
    /// Adds the client IP column.
    #[prop(optional)]
    show_ip: bool,
) -> impl IntoView {
    let columns = if show_ip { "7" } else { "6" };

    let rows = move || {
        if loading.get() {
            return view! { <tr><td colspan=columns class="table__empty">"Chargement des journaux..."</td></tr> }
                .into_any();
        }
        let list = logs.get();
        if list.is_empty() {
            return view! { <tr><td colspan=columns class="table__empty">"Aucun journal trouvé."</td></tr> }.into_any();
        }
        list.into_iter()
            .map(|log| {
                let who = actor(&log);
                view! {
                    <tr>
                        <td class="table__mono">{format::timestamp(&log.timestamp)}</td>
                        <td class="table__strong">{log.action.clone()}</td>
                        <td>{log.service_name.clone()}</td>
                        <td title={log.user_id.clone()}>{who}</td>
                        <td>{log.details.clone().unwrap_or_default()}</td>
                        {show_ip.then(|| view! { <td class="table__mono">{log.ip_address.clone().unwrap_or_default()}</td> })}
                        <td><span class={audit_status_class(&log.status)}>{log.status.clone()}</span></td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Horodatage"</th>
                    <th>"Action"</th>
                    <th>"Service"</th>
                    <th>"Utilisateur"</th>
                    <th>"Détails"</th>
                    {show_ip.then(|| view! { <th>"IP"</th> })}
                    <th>"Statut"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
