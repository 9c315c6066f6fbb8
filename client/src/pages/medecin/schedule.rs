//! Médecin agenda settings.

use leptos::prelude::*;
use portal::guard::AppRoute;

use crate::components::layout::DashboardLayout;
use crate::components::schedule_manager::ScheduleManager;
use crate::state::auth::AuthState;

#[component]
pub fn MedecinSchedulePage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::MedecinSchedule>
            <Schedule/>
        </DashboardLayout>
    }
}

#[component]
fn Schedule() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let doctor_id = auth.get_untracked().keycloak_id().unwrap_or_default();
    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Mon Agenda"</h1>
                <p>"Configurez vos heures de consultation et vos absences"</p>
            </header>
            <ScheduleManager doctor_id=doctor_id/>
        </div>
    }
}
