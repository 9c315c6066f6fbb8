//! Patient appointments: the booking wizard above the appointment list.
//!
//! The wizard state lives in a single `RwSignal<BookingWizard>`; every
//! transition goes through the wizard so incomplete steps cannot be
//! skipped. Rejected transitions surface as error toasts.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use chrono::Local;
use leptos::prelude::*;
use portal::booking::{BookingError, BookingStep, BookingWizard, REASON_MAX_CHARS, booking_days};
use portal::guard::AppRoute;
use portal::types::{AppointmentFilter, AppointmentResponse, TimeSlot, UserResponse};

use crate::components::layout::DashboardLayout;
use crate::components::slot_picker::SlotPicker;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

pub(crate) fn doctor_label(doctor: &UserResponse) -> String {
    format!("Dr. {}", doctor.full_name())
}

pub(crate) fn step_class(step: BookingStep, current: BookingStep) -> &'static str {
    if step == current {
        "wizard__step wizard__step--current"
    } else if step.index() < current.index() {
        "wizard__step wizard__step--done"
    } else {
        "wizard__step"
    }
}

#[component]
pub fn PatientAppointmentsPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::PatientAppointments>
            <PatientAppointments/>
        </DashboardLayout>
    }
}

#[component]
fn PatientAppointments() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let patient_id = StoredValue::new(auth.get_untracked().keycloak_id().unwrap_or_default());

    let appointments = RwSignal::new(Vec::<AppointmentResponse>::new());
    let loading = RwSignal::new(true);
    let version = RwSignal::new(0_u32);

    Effect::new(move || {
        version.track();
        let id = patient_id.get_value();
        spawn(async move {
            match api::list_appointments(&AppointmentFilter::for_patient(&id, 100)).await {
                Ok(page) => appointments.set(page.content),
                Err(_) => toasts.update(|t| t.error("Erreur lors du chargement des rendez-vous")),
            }
            loading.set(false);
        });
    });

    let on_booked = Callback::new(move |()| version.update(|v| *v += 1));

    let list = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Chargement..."</p> }.into_any();
        }
        let items = appointments.get();
        if items.is_empty() {
            return view! { <p class="empty-state">"Aucun rendez-vous trouvé"</p> }.into_any();
        }
        items
            .into_iter()
            .map(|a| {
                view! {
                    <div class="appointment">
                        <div class="appointment__body">
                            <p class="appointment__doctor">
                                {format!("Dr. {}", a.doctor_name.unwrap_or_else(|| "Non spécifié".to_owned()))}
                            </p>
                            <p class="appointment__time">{format::date_time(a.appointment_date_time)}</p>
                            {a.reason.map(|r| view! { <p><strong>"Raison: "</strong>{r}</p> })}
                            {a.notes.map(|n| view! { <p class="appointment__notes">"Note: " {n}</p> })}
                        </div>
                        <StatusBadge status=a.status/>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <h1>"Mes Rendez-vous"</h1>
            <BookingPanel patient_id=patient_id.get_value() on_booked=on_booked/>
            <section class="card">
                <h2>"Historique"</h2>
                {list}
            </section>
        </div>
    }
}

#[component]
fn BookingPanel(patient_id: String, on_booked: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let today = Local::now().date_naive();
    let wizard = RwSignal::new(BookingWizard::new(today));
    let step = Memo::new(move |_| wizard.with(BookingWizard::step));
    let doctors = RwSignal::new(Vec::<UserResponse>::new());
    let submitting = RwSignal::new(false);
    let patient_id = StoredValue::new(patient_id);

    spawn(async move {
        match api::medecins(0, 100).await {
            Ok(page) => doctors.set(page.content),
            Err(_) => toasts.update(|t| t.error("Impossible de charger la liste des médecins")),
        }
    });

    let report = move |result: Result<(), BookingError>| {
        if let Err(e) = result {
            toasts.update(|t| t.error(e.to_string()));
        }
    };

    let on_date = Callback::new(move |day| {
        let mut result = Ok(());
        wizard.update(|w| result = w.select_date(day));
        report(result);
    });
    let on_select = Callback::new(move |slot: TimeSlot| {
        let mut result = Ok(());
        wizard.update(|w| result = w.select_slot(&slot, Local::now().naive_local()));
        report(result);
    });
    let on_next = move |_| {
        let mut result = Ok(());
        wizard.update(|w| result = w.next().map(|_| ()));
        report(result);
    };
    let on_back = move |_| {
        wizard.update(|w| {
            w.back();
        });
    };

    let on_confirm = move |_| {
        let request = match wizard.with_untracked(|w| w.request(&patient_id.get_value())) {
            Ok(request) => request,
            Err(e) => {
                report(Err(e));
                return;
            }
        };
        submitting.set(true);
        spawn(async move {
            match api::create_appointment(&request).await {
                Ok(_) => {
                    let mut result = Ok(());
                    wizard.update(|w| result = w.mark_submitted());
                    report(result);
                    toasts.update(|t| t.success("Rendez-vous réservé avec succès"));
                    on_booked.run(());
                }
                Err(e) => toasts.update(|t| t.error(e.user_message())),
            }
            submitting.set(false);
        });
    };

    let step_body = move || match step.get() {
        BookingStep::ChooseDoctor => {
            let chosen = move || wizard.with(|w| w.doctor().map(|d| d.id.clone()));
            view! {
                <div class="doctor-list">
                    <For
                        each=move || doctors.get()
                        key=|d: &UserResponse| d.keycloak_id.clone()
                        children=move |d: UserResponse| {
                            let id = d.keycloak_id.clone();
                            let name = doctor_label(&d);
                            let profile = d.medecin_profile.clone().unwrap_or_default();
                            let is_chosen = {
                                let id = id.clone();
                                move || chosen().as_deref() == Some(id.as_str())
                            };
                            let label = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=move || if is_chosen() { "doctor-card doctor-card--selected" } else { "doctor-card" }
                                    on:click=move |_| {
                                        let mut result = Ok(());
                                        wizard.update(|w| result = w.select_doctor(&id, &name));
                                        report(result);
                                    }
                                >
                                    <span class="doctor-card__name">{label}</span>
                                    <span class="doctor-card__specialty">{profile.specialization.unwrap_or_default()}</span>
                                    {profile.consultation_fee.map(|fee| view! { <span class="doctor-card__fee">{format::fee(fee)}</span> })}
                                </button>
                            }
                        }
                    />
                </div>
            }
            .into_any()
        }
        BookingStep::ChooseSlot => {
            let doctor_id = wizard.with_untracked(|w| w.doctor().map(|d| d.id.clone())).unwrap_or_default();
            view! {
                <SlotPicker
                    doctor_id=doctor_id
                    days=booking_days(today)
                    date=Signal::derive(move || wizard.with(BookingWizard::date))
                    on_date=on_date
                    selected=Signal::derive(move || wizard.with(|w| w.slot().cloned()))
                    on_select=on_select
                />
            }
            .into_any()
        }
        BookingStep::Details => view! {
            <div class="form-field">
                <label for="reason">"Motif de la consultation"</label>
                <textarea
                    id="reason"
                    rows="4"
                    maxlength={REASON_MAX_CHARS.to_string()}
                    placeholder="Décrivez brièvement vos symptômes ou le motif de votre visite"
                    prop:value=move || wizard.with_untracked(|w| w.reason().to_owned())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let mut result = Ok(());
                        wizard.update(|w| result = w.set_reason(&text));
                        report(result);
                    }
                ></textarea>
                <p class="form-field__hint">
                    {move || format!("{}/{REASON_MAX_CHARS}", wizard.with(|w| w.reason().chars().count()))}
                </p>
            </div>
        }
        .into_any(),
        BookingStep::Confirm => {
            let (doctor, when, reason) = wizard.with_untracked(|w| {
                (
                    w.doctor().map(|d| d.name.clone()).unwrap_or_default(),
                    w.slot().map(|s| format::date_time(s.start_time)).unwrap_or_default(),
                    w.reason().to_owned(),
                )
            });
            view! {
                <dl class="wizard__summary">
                    <dt>"Médecin"</dt><dd>{doctor}</dd>
                    <dt>"Date"</dt><dd>{when}</dd>
                    <dt>"Motif"</dt><dd>{reason}</dd>
                </dl>
            }
            .into_any()
        }
        BookingStep::Submitted => view! {
            <div class="wizard__done">
                <p>"Votre demande de rendez-vous a été envoyée."</p>
                <button type="button" class="button" on:click=move |_| wizard.update(|w| w.reset(Local::now().date_naive()))>
                    "Nouveau rendez-vous"
                </button>
            </div>
        }
        .into_any(),
    };

    let controls = move || {
        let current = step.get();
        let can_advance = move || wizard.with(BookingWizard::can_advance);
        match current {
            BookingStep::Submitted => ().into_any(),
            BookingStep::Confirm => view! {
                <div class="wizard__controls">
                    <button type="button" class="button button--ghost" on:click=on_back>"Retour"</button>
                    <button type="button" class="button" disabled=move || submitting.get() on:click=on_confirm>
                        {move || if submitting.get() { "Réservation..." } else { "Confirmer le rendez-vous" }}
                    </button>
                </div>
            }
            .into_any(),
            _ => view! {
                <div class="wizard__controls">
                    <button
                        type="button"
                        class="button button--ghost"
                        disabled={current == BookingStep::ChooseDoctor}
                        on:click=on_back
                    >
                        "Retour"
                    </button>
                    <button type="button" class="button" disabled=move || !can_advance() on:click=on_next>
                        "Suivant"
                    </button>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <section class="card wizard">
            <h2>"Prendre un rendez-vous"</h2>
            <ol class="wizard__steps">
                {BookingStep::ALL
                    .into_iter()
                    .map(|s| view! { <li class=move || step_class(s, step.get())>{s.label()}</li> })
                    .collect_view()}
            </ol>
            {step_body}
            {controls}
        </section>
    }
}
