//! Médecin appointment history with status and day filters.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, AppointmentStatus, AppointmentUpdate};

use crate::components::layout::DashboardLayout;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::dialog::confirm;
use crate::util::format;
use crate::util::task::spawn;

/// `ALL` (or anything unknown) means no status filter.
pub(crate) fn status_filter(raw: &str) -> Option<AppointmentStatus> {
    AppointmentStatus::parse(raw)
}

/// An empty date input shows every day.
pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn on_selected_day(appointment: &AppointmentResponse, day: Option<NaiveDate>) -> bool {
    day.is_none_or(|d| appointment.appointment_date_time.date() == d)
}

#[component]
pub fn MedecinAppointmentsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::MedecinAppointments>
            <DoctorAppointments/>
        </DashboardLayout>
    }
}

#[component]
fn DoctorAppointments() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let doctor_id = StoredValue::new(auth.get_untracked().keycloak_id().unwrap_or_default());

    let appointments = RwSignal::new(Vec::<AppointmentResponse>::new());
    let loading = RwSignal::new(true);
    let status = RwSignal::new(String::from("ALL"));
    let day = RwSignal::new(String::new());
    let version = RwSignal::new(0_u32);

    Effect::new(move || {
        version.track();
        let filter = AppointmentFilter {
            status: status_filter(&status.get()),
            ..AppointmentFilter::for_doctor(&doctor_id.get_value(), 50)
        };
        loading.set(true);
        spawn(async move {
            match api::list_appointments(&filter).await {
                Ok(page) => appointments.set(page.content),
                Err(_) => toasts.update(|t| t.error("Erreur lors du chargement des rendez-vous")),
            }
            loading.set(false);
        });
    });

    let set_status = move |id: String, next: AppointmentStatus| {
        if !confirm("Voulez-vous vraiment changer le statut de ce rendez-vous ?") {
            return;
        }
        let update = AppointmentUpdate { status: Some(next), ..AppointmentUpdate::default() };
        spawn(async move {
            match api::update_appointment(&id, &update).await {
                Ok(_) => version.update(|v| *v += 1),
                Err(_) => toasts.update(|t| t.error("Erreur lors de la mise à jour")),
            }
        });
    };

    let rows = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Chargement des rendez-vous..."</p> }.into_any();
        }
        let selected_day = parse_day(&day.get());
        let list: Vec<AppointmentResponse> =
            appointments.get().into_iter().filter(|a| on_selected_day(a, selected_day)).collect();
        if list.is_empty() {
            return view! { <p class="empty-state">"Aucun rendez-vous trouvé pour cette date."</p> }.into_any();
        }
        list.into_iter()
            .map(|a| {
                let complete_id = a.id.clone();
                let cancel_id = a.id.clone();
                let consult = AppRoute::MedecinConsultation(a.id.clone()).path();
                let open = a.status.is_open();
                view! {
                    <div class="appointment">
                        <div class="appointment__date">{format::day_month(a.appointment_date_time.date())}</div>
                        <div class="appointment__body">
                            <h3>{a.patient_name.unwrap_or_else(|| "Patient inconnu".to_owned())}</h3>
                            <p>
                                {format::time(a.appointment_date_time)}
                                " • "
                                {a.reason.unwrap_or_default()}
                            </p>
                            {a.notes.map(|n| view! { <p class="appointment__notes">"Note: " {n}</p> })}
                        </div>
                        <StatusBadge status=a.status/>
                        {if open {
                            view! {
                                <div class="appointment__actions">
                                    <a class="button" href=consult>"Démarrer"</a>
                                    <button
                                        type="button"
                                        class="button button--ghost"
                                        on:click=move |_| set_status(complete_id.clone(), AppointmentStatus::Completed)
                                    >
                                        "Terminer"
                                    </button>
                                    <button
                                        type="button"
                                        class="button button--danger"
                                        on:click=move |_| set_status(cancel_id.clone(), AppointmentStatus::Cancelled)
                                    >
                                        "Annuler"
                                    </button>
                                </div>
                            }
                            .into_any()
                        } else {
                            ().into_any()
                        }}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Mes Rendez-vous"</h1>
                <p>"Gérez votre planning et vos consultations"</p>
            </header>
            <div class="filters">
                <input type="date" prop:value=move || day.get() on:input=move |ev| day.set(event_target_value(&ev))/>
                <select prop:value=move || status.get() on:change=move |ev| status.set(event_target_value(&ev))>
                    <option value="ALL">"Tous les statuts"</option>
                    <option value="SCHEDULED">"En attente"</option>
                    <option value="CONFIRMED">"Confirmé"</option>
                    <option value="COMPLETED">"Terminé"</option>
                    <option value="CANCELLED">"Annulé"</option>
                </select>
            </div>
            <div class="appointment-list">{rows}</div>
        </div>
    }
}
