use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <p class="status-page__code">"404"</p>
            <h1>"Page Introuvable"</h1>
            <p>"La page que vous recherchez n'existe pas ou a été déplacée."</p>
            <a class="button" href="/">"Retour à l'accueil"</a>
        </div>
    }
}
