//! Labelled input bound to a string signal, with its validation message.

use leptos::prelude::*;
use portal::validation::FieldErrors;

#[component]
pub fn FormField(
    label: &'static str,
    /// Wire field name; also the key looked up in `errors`.
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(name));
    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=kind
                placeholder=placeholder
                class={move || if message().is_some() { "form-field__input form-field__input--invalid" } else { "form-field__input" }}
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || message().map(|m| view! { <p class="form-field__error">{m}</p> })}
        </div>
    }
}
