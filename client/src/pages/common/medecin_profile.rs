//! Read-only practitioner profile, reachable from the staff directories.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use portal::guard::AppRoute;
use portal::types::UserResponse;

use crate::components::dossier_view::or_fallback;
use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::toast::ToastState;
use crate::util::format;
use crate::util::task::spawn;

/// Directory page searched for the practitioner; the gateway has no
/// single-user lookup for staff.
const DIRECTORY_SIZE: u32 = 500;

#[component]
pub fn MedecinProfilePage() -> impl IntoView {
    let id = use_params_map().with_untracked(|p| p.get("id")).unwrap_or_default();
    view! {
        <DashboardLayout route=AppRoute::MedecinProfile(id.clone())>
            <PractitionerProfile keycloak_id=id.clone()/>
        </DashboardLayout>
    }
}

#[component]
fn PractitionerProfile(keycloak_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let doctor = RwSignal::new(None::<UserResponse>);
    let loading = RwSignal::new(true);

    spawn(async move {
        match api::admin_users(0, DIRECTORY_SIZE).await {
            Ok(page) => doctor.set(page.content.into_iter().find(|u| u.keycloak_id == keycloak_id)),
            Err(e) => toasts.update(|t| t.api_error(&e)),
        }
        loading.set(false);
    });

    let body = move || {
        if loading.get() {
            return view! { <p class="page-loading">"Chargement du profil..."</p> }.into_any();
        }
        let Some(d) = doctor.get() else {
            return view! { <p class="empty-state">"Médecin non trouvé."</p> }.into_any();
        };
        let profile = d.medecin_profile.clone().unwrap_or_default();
        let specialty = or_fallback(profile.specialization.as_deref(), "Spécialiste");
        let location = format!(
            "{}, {}",
            or_fallback(d.city.as_deref(), "Ville non renseignée"),
            or_fallback(d.country.as_deref(), "Pays non renseigné")
        );
        let experience = profile.years_of_experience.map_or_else(|| "Non renseigné".to_owned(), |y| format!("{y} ans"));
        let fee = profile.consultation_fee.map_or_else(|| "Non renseigné".to_owned(), format::fee);
        view! {
            <div class="profile-grid">
                <section class="card profile-card">
                    <span class="avatar avatar--large">{d.initials()}</span>
                    <h2>{format!("Dr. {}", d.full_name())}</h2>
                    <p class="card__muted">{specialty}</p>
                    <dl>
                        <dt>"Email"</dt>
                        <dd>{d.email.clone()}</dd>
                        <dt>"Téléphone"</dt>
                        <dd>{or_fallback(d.phone_number.as_deref(), "Non renseigné")}</dd>
                    </dl>
                </section>
                <section class="card">
                    <h3>"Informations Professionnelles"</h3>
                    <dl>
                        <dt>"Numéro de Licence"</dt>
                        <dd>{or_fallback(profile.license_number.as_deref(), "Non renseigné")}</dd>
                        <dt>"Années d'expérience"</dt>
                        <dd>{experience}</dd>
                        <dt>"Tarif de consultation"</dt>
                        <dd>{fee}</dd>
                        <dt>"Localisation"</dt>
                        <dd>{location}</dd>
                        <dt>"Statut du Compte"</dt>
                        <dd>
                            <span class=if d.enabled { "badge badge--success" } else { "badge badge--failure" }>
                                {if d.enabled { "ACTIF" } else { "INACTIF" }}
                            </span>
                        </dd>
                        <dt>"Disponibilité"</dt>
                        <dd>{if profile.available == Some(false) { "Indisponible" } else { "Accepte de nouveaux patients" }}</dd>
                    </dl>
                </section>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Profil Praticien"</h1>
                    <p>"Informations détaillées du médecin"</p>
                </div>
                <button type="button" class="button button--ghost" on:click=move |_| go_back()>"Retour"</button>
            </header>
            {body}
        </div>
    }
}

fn go_back() {
    #[cfg(feature = "hydrate")]
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
