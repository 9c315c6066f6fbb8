//! Renders the toast queue and auto-dismisses each entry.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u64 = 4_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_LIFETIME_MS)).await;
                        toasts.update(|t| t.dismiss(id));
                    });
                    view! {
                        <div class=toast.kind.class() role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
