//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let landing = move || auth.get().user.map(|u| u.landing_route());

    view! {
        <div class="home">
            <header class="home__nav">
                <a class="home__brand" href="/">"MedInsight"</a>
                {move || match landing() {
                    Some(href) => view! { <a class="button" href=href>"Mon espace"</a> }.into_any(),
                    None => view! {
                        <div class="home__actions">
                            <a class="button button--ghost" href="/login">"Se connecter"</a>
                            <a class="button" href="/login">"Commencer"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </header>
            <section class="home__hero">
                <p class="home__tagline">"La référence E-Santé en Tunisie"</p>
                <h1>"Une plateforme de santé Connectée & Intelligente."</h1>
                <a class="button" href="/register/patient">"Créer un compte patient"</a>
            </section>
            <section class="home__features" id="features">
                <h2>"Tout ce dont vous avez besoin"</h2>
                <p>"Des outils puissants conçus pour simplifier votre parcours de soin."</p>
                <div class="home__cta">
                    <a class="button button--ghost" href="/register/medecin">"Je suis médecin"</a>
                    <a class="button" href="/register/patient">"Je suis patient"</a>
                </div>
            </section>
            <footer class="home__footer">"© MedInsight"</footer>
        </div>
    }
}
