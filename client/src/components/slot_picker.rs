//! Day strip and slot grid for the booking wizard.
//!
//! Slots are fetched for the selected day whenever it changes; the latest
//! response wins. Selection is delegated to the parent so the wizard can
//! reject past or booked slots.

#[cfg(test)]
#[path = "slot_picker_test.rs"]
mod slot_picker_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use portal::types::{SlotStatus, TimeSlot};

use crate::net::api;
use crate::util::format;
use crate::util::task::spawn;

const LOAD_ERROR: &str = "Impossible de charger les créneaux disponibles";

pub(crate) fn day_class(selected: bool, today: bool) -> String {
    let mut class = String::from("slot-picker__day");
    if selected {
        class.push_str(" slot-picker__day--selected");
    }
    if today {
        class.push_str(" slot-picker__day--today");
    }
    class
}

pub(crate) fn slot_class(slot: &TimeSlot, selected: Option<&TimeSlot>) -> String {
    let status = match slot.status {
        SlotStatus::Available if slot.is_available => "slot--available",
        SlotStatus::Available | SlotStatus::Booked => "slot--booked",
        SlotStatus::Unavailable => "slot--unavailable",
    };
    let is_selected = selected.is_some_and(|s| s.start_time == slot.start_time);
    if is_selected { format!("slot {status} slot--selected") } else { format!("slot {status}") }
}

#[component]
pub fn SlotPicker(
    doctor_id: String,
    days: Vec<NaiveDate>,
    #[prop(into)] date: Signal<NaiveDate>,
    on_date: Callback<NaiveDate>,
    #[prop(into)] selected: Signal<Option<TimeSlot>>,
    on_select: Callback<TimeSlot>,
) -> impl IntoView {
    let slots = RwSignal::new(Vec::<TimeSlot>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        let day = date.get();
        let doctor = doctor_id.clone();
        loading.set(true);
        error.set(None);
        spawn(async move {
            match api::available_slots(&doctor, day).await {
                Ok(list) => slots.set(list),
                Err(_) => {
                    slots.set(Vec::new());
                    error.set(Some(LOAD_ERROR));
                }
            }
            loading.set(false);
        });
    });

    let today = days.first().copied();
    let day_buttons = days
        .into_iter()
        .map(|day| {
            view! {
                <button
                    type="button"
                    class=move || day_class(day == date.get(), Some(day) == today)
                    on:click=move |_| on_date.run(day)
                >
                    {format::short_day(day)}
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        if loading.get() {
            return view! { <p class="slot-picker__status">"Chargement des créneaux..."</p> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <p class="slot-picker__error">{message}</p> }.into_any();
        }
        let list = slots.get();
        if list.is_empty() {
            return view! {
                <div class="slot-picker__empty">
                    <p>"Aucun créneau disponible pour cette date"</p>
                    <p>"Veuillez sélectionner une autre date"</p>
                </div>
            }
            .into_any();
        }
        let current = selected.get();
        view! {
            <div class="slot-picker__grid">
                {list
                    .into_iter()
                    .map(|slot| {
                        let class = slot_class(&slot, current.as_ref());
                        let label = format::time(slot.start_time);
                        let minutes = slot.duration_minutes;
                        let disabled = !slot.is_available;
                        view! {
                            <button type="button" class=class disabled=disabled on:click=move |_| on_select.run(slot.clone())>
                                <span class="slot__time">{label}</span>
                                <span class="slot__duration">{format!("{minutes} min")}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="slot-picker__legend">
                <span class="slot slot--available">"Disponible"</span>
                <span class="slot slot--booked">"Réservé"</span>
                <span class="slot slot--unavailable">"Indisponible"</span>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="slot-picker">
            <h3>"Sélectionnez une date"</h3>
            <div class="slot-picker__days">{day_buttons}</div>
            <h3>{move || format!("Créneaux disponibles - {}", format::long_date(date.get()))}</h3>
            {grid}
        </div>
    }
}
