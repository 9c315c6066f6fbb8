//! The signed-in patient's own dossier.

use leptos::prelude::*;
use portal::guard::AppRoute;
use portal::types::Dossier;

use crate::components::dossier_view::DossierView;
use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

#[component]
pub fn PatientDossierPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::PatientDossier>
            <PatientDossier/>
        </DashboardLayout>
    }
}

#[component]
fn PatientDossier() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dossier = RwSignal::new(None::<Dossier>);
    let loading = RwSignal::new(true);
    let patient_id = auth.get_untracked().keycloak_id().unwrap_or_default();

    spawn(async move {
        match api::dossier(&patient_id).await {
            Ok(found) => dossier.set(Some(found)),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        loading.set(false);
    });

    view! {
        <div class="page">
            <h1>"Mon Dossier Médical"</h1>
            {move || {
                if loading.get() {
                    return view! { <p class="page-loading">"Récupération des données cliniques..."</p> }.into_any();
                }
                match dossier.get() {
                    Some(d) => view! { <DossierView dossier=d/> }.into_any(),
                    None => view! { <p class="empty-state">"Dossier non trouvé."</p> }.into_any(),
                }
            }}
        </div>
    }
}
