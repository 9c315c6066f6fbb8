//! Weekly working hours and absence periods for a médecin.
//!
//! Each change to a day row is saved immediately by merging the edited
//! field over the stored row (or the 09:00–17:00 default). Absences are
//! validated locally before the create call.

#[cfg(test)]
#[path = "schedule_manager_test.rs"]
mod schedule_manager_test;

use leptos::prelude::*;
use portal::types::{DAYS_OF_WEEK, DoctorSchedule, ScheduleUpdate, Unavailability};
use portal::validation::UnavailabilityForm;

use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

pub(crate) const SLOT_DURATIONS: [u32; 5] = [15, 20, 30, 45, 60];

pub(crate) fn day_label(day: &str) -> &'static str {
    match day {
        "MONDAY" => "Lundi",
        "TUESDAY" => "Mardi",
        "WEDNESDAY" => "Mercredi",
        "THURSDAY" => "Jeudi",
        "FRIDAY" => "Vendredi",
        "SATURDAY" => "Samedi",
        "SUNDAY" => "Dimanche",
        _ => "",
    }
}

/// Trim `HH:MM:SS` to what a time input accepts.
pub(crate) fn time_input_value(raw: &str) -> String {
    raw.chars().take(5).collect()
}

/// One field changed on a day row.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DayEdit {
    Start(String),
    End(String),
    Duration(u32),
    Active(bool),
}

pub(crate) fn apply_edit(doctor_id: &str, day: &str, existing: &[DoctorSchedule], edit: DayEdit) -> ScheduleUpdate {
    let row = existing.iter().find(|s| s.day_of_week == day);
    let (start, end, duration, active) = match edit {
        DayEdit::Start(v) => (Some(v), None, None, None),
        DayEdit::End(v) => (None, Some(v), None, None),
        DayEdit::Duration(v) => (None, None, Some(v), None),
        DayEdit::Active(v) => (None, None, None, Some(v)),
    };
    ScheduleUpdate::merged(doctor_id, day, row, start, end, duration, active)
}

#[component]
pub fn ScheduleManager(doctor_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let schedules = RwSignal::new(Vec::<DoctorSchedule>::new());
    let absences = RwSignal::new(Vec::<Unavailability>::new());
    let loading = RwSignal::new(true);
    let version = RwSignal::new(0_u32);
    let doctor = StoredValue::new(doctor_id);

    Effect::new(move || {
        version.track();
        let id = doctor.get_value();
        spawn(async move {
            match api::doctor_schedule(&id).await {
                Ok(list) => schedules.set(list),
                Err(_) => toasts.update(|t| t.error("Erreur lors du chargement de l'emploi du temps")),
            }
            match api::unavailabilities(&id).await {
                Ok(list) => absences.set(list),
                Err(e) => toasts.update(|t| t.api_error(&e)),
            }
            loading.set(false);
        });
    });
    let reload = move || version.update(|v| *v += 1);

    let save_day = move |day: &'static str, edit: DayEdit| {
        let update = apply_edit(&doctor.get_value(), day, &schedules.get_untracked(), edit);
        spawn(async move {
            match api::save_schedule(&update).await {
                Ok(_) => {
                    toasts.update(|t| t.success(format!("Planning du {} mis à jour", day_label(day))));
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de la mise à jour")),
            }
        });
    };

    let on_default = move |_| {
        let id = doctor.get_value();
        spawn(async move {
            match api::create_default_schedule(&id).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Planning par défaut créé (Lun-Ven, 9h-17h)"));
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de la création du planning par défaut")),
            }
        });
    };

    let form = RwSignal::new(UnavailabilityForm::default());
    let on_add_absence = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let window = match form.get_untracked().validate() {
            Ok(window) => window,
            Err(errors) => {
                toasts.update(|t| t.error(errors.first().unwrap_or_default()));
                return;
            }
        };
        let id = doctor.get_value();
        spawn(async move {
            match api::add_unavailability(&id, &window).await {
                Ok(_) => {
                    toasts.update(|t| t.success("Période d'indisponibilité ajoutée"));
                    form.set(UnavailabilityForm::default());
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de l'ajout")),
            }
        });
    };

    let on_delete_absence = move |id: String| {
        spawn(async move {
            match api::delete_unavailability(&id).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Période supprimée"));
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de la suppression")),
            }
        });
    };

    let day_rows = move || {
        let list = schedules.get();
        DAYS_OF_WEEK
            .into_iter()
            .map(|day| {
                let row = list.iter().find(|s| s.day_of_week == day).cloned();
                let start = row.as_ref().map_or_else(|| "09:00".to_owned(), |r| time_input_value(&r.start_time));
                let end = row.as_ref().map_or_else(|| "17:00".to_owned(), |r| time_input_value(&r.end_time));
                let duration = row.as_ref().map_or(30, |r| r.slot_duration_minutes);
                let active = row.as_ref().is_some_and(|r| r.is_active);
                view! {
                    <div class="schedule-row">
                        <span class="schedule-row__day">{day_label(day)}</span>
                        <input type="time" prop:value=start on:change=move |ev| save_day(day, DayEdit::Start(event_target_value(&ev)))/>
                        <span>"à"</span>
                        <input type="time" prop:value=end on:change=move |ev| save_day(day, DayEdit::End(event_target_value(&ev)))/>
                        <label>
                            "Durée RDV: "
                            <select
                                prop:value={duration.to_string()}
                                on:change=move |ev| {
                                    if let Ok(minutes) = event_target_value(&ev).parse() {
                                        save_day(day, DayEdit::Duration(minutes));
                                    }
                                }
                            >
                                {SLOT_DURATIONS
                                    .into_iter()
                                    .map(|m| view! { <option value=m.to_string() selected={m == duration}>{format!("{m} min")}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="schedule-row__toggle">
                            <input
                                type="checkbox"
                                prop:checked=active
                                on:change=move |ev| save_day(day, DayEdit::Active(event_target_checked(&ev)))
                            />
                            {if active { "Actif" } else { "Repos" }}
                        </label>
                    </div>
                }
            })
            .collect_view()
    };

    let absence_list = move || {
        let list = absences.get();
        if list.is_empty() {
            return view! { <p class="schedule__empty">"Aucune absence programmée"</p> }.into_any();
        }
        list.into_iter()
            .map(|u| {
                let id = u.id.clone();
                let period = format!(
                    "{} - {} ({} - {})",
                    format::day_month(u.start_date_time.date()),
                    format::day_month(u.end_date_time.date()),
                    format::time(u.start_date_time),
                    format::time(u.end_date_time),
                );
                view! {
                    <div class="absence">
                        <span class="absence__period">{period}</span>
                        <span class="absence__reason">{u.reason.unwrap_or_default()}</span>
                        <button type="button" on:click=move |_| on_delete_absence(id.clone())>"Supprimer"</button>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="page-loading">"Chargement de votre emploi du temps..."</p> }
        >
            <section class="card">
                <header class="card__header">
                    <h2>"Heures de Travail Hebdomadaires"</h2>
                    <button type="button" on:click=on_default>"Planning par défaut"</button>
                </header>
                {day_rows}
            </section>
            <section class="card">
                <h2>"Ajouter une Absence"</h2>
                <form class="absence-form" on:submit=on_add_absence>
                    <label>"Début"</label>
                    <input type="date" prop:value=move || form.get().start_date on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))/>
                    <input type="time" prop:value=move || form.get().start_time on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))/>
                    <label>"Fin"</label>
                    <input type="date" prop:value=move || form.get().end_date on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))/>
                    <input type="time" prop:value=move || form.get().end_time on:input=move |ev| form.update(|f| f.end_time = event_target_value(&ev))/>
                    <label>"Motif (Optionnel)"</label>
                    <input
                        type="text"
                        placeholder="Ex: Vacances, Congrès..."
                        prop:value=move || form.get().reason
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    />
                    <button type="submit">"Ajouter"</button>
                </form>
            </section>
            <section class="card">
                <h2>"Absences & Congés Programmés"</h2>
                {absence_list}
            </section>
        </Show>
    }
}
