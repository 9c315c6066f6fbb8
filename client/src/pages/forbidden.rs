//! Shown when the signed-in role may not open the requested page.

use leptos::prelude::*;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Accès Refusé"</h1>
            <p>"Vous n'avez pas les autorisations nécessaires pour accéder à cette page."</p>
            <div class="status-page__actions">
                <a class="button button--ghost" href="/">"Retour à l'accueil"</a>
                <a class="button" href="/login">"Changer de compte"</a>
            </div>
        </div>
    }
}
