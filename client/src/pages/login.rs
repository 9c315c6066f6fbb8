//! Login page: password grant through the portal server, then redirect to
//! the role's landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::ApiError;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::auth::sign_in;
use crate::util::task::spawn;

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Veuillez saisir votre email et votre mot de passe.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

pub(crate) fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized | ApiError::Status { status: 400, .. } => "Email ou mot de passe incorrect.".to_owned(),
        other => other.user_message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the landing route.
    Effect::new(move || {
        let state = auth.get();
        if let (false, Some(user)) = (state.loading, state.user.as_ref()) {
            navigate(user.landing_route(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        spawn(async move {
            match api::login(&user, &pass).await {
                Ok(token) => {
                    if sign_in(auth, &token.access_token).is_err() {
                        info.set("Jeton d'authentification invalide.".to_owned());
                    }
                }
                Err(e) => info.set(login_error_message(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MedInsight"</h1>
                <p class="login-card__subtitle">"Connectez-vous à votre espace"</p>
                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Email"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="nom@exemple.com"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="password">"Mot de passe"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Pas encore de compte ?"</p>
                <a class="login-link" href="/register/patient">"Inscription patient"</a>
                <a class="login-link" href="/register/medecin">"Inscription médecin"</a>
            </div>
        </div>
    }
}
