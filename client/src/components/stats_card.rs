//! Dashboard metric tile.

use leptos::prelude::*;

#[component]
pub fn StatsCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <p class="stats-card__label">{label}</p>
            <p class="stats-card__value">{move || value.get()}</p>
            {hint.map(|hint| view! { <p class="stats-card__hint">{hint}</p> })}
        </div>
    }
}
