//! User administration: paginated directory, role changes, deletion,
//! identity-provider sync and account creation.
//!
//! Search and the role filter apply to the loaded page only; paging goes
//! back to the gateway.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use portal::filters;
use portal::guard::AppRoute;
use portal::roles::{self, Role};
use portal::types::{AdminUserCreationRequest, Page, UserResponse};
use portal::validation::{prune_admin_user, validate_admin_user};

use crate::components::layout::DashboardLayout;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::dialog::confirm;
use crate::util::task::spawn;

pub(crate) const PAGE_SIZE: u32 = 10;

const ROLE_FILTERS: [(&str, &str); 6] = [
    (filters::ALL, "Tous les rôles"),
    ("ROLE_PATIENT", "Patients"),
    ("ROLE_MEDECIN", "Médecins"),
    ("ROLE_ADMIN", "Administrateurs"),
    ("ROLE_GESTIONNAIRE", "Gestionnaires"),
    ("ROLE_RESPONSABLE_SECURITE", "Sécurité"),
];

const GENDERS: [(&str, &str); 4] =
    [("MALE", "Homme"), ("FEMALE", "Femme"), ("OTHER", "Autre"), ("PREFER_NOT_TO_SAY", "Non spécifié")];

/// Backend role name for a user row; accounts without a role are patients.
pub(crate) fn role_key(raw: Option<&str>) -> String {
    raw.map(roles::normalize).filter(|key| !key.is_empty()).unwrap_or_else(|| "PATIENT".to_owned())
}

pub(crate) fn role_badge_class(key: &str) -> &'static str {
    match key {
        "PATIENT" => "badge badge--patient",
        "MEDECIN" => "badge badge--medecin",
        "GESTIONNAIRE" => "badge badge--gestionnaire",
        "ADMIN" => "badge badge--admin",
        "RESPONSABLE_SECURITE" => "badge badge--security",
        _ => "badge",
    }
}

pub(crate) fn page_label(number: u32, total_pages: u32) -> String {
    format!("Page {} sur {}", number + 1, total_pages.max(1))
}

/// Creation form defaults.
pub(crate) fn blank_request() -> AdminUserCreationRequest {
    AdminUserCreationRequest {
        role: Role::Patient.backend_name().to_owned(),
        country: Some("Tunisie".to_owned()),
        gender: Some("MALE".to_owned()),
        years_of_experience: Some(0),
        consultation_fee: Some(50.0),
        ..AdminUserCreationRequest::default()
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <DashboardLayout route=AppRoute::AdminUsers>
            <AdminUsers/>
        </DashboardLayout>
    }
}

#[component]
fn AdminUsers() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let own_email = StoredValue::new(auth.get_untracked().user.map(|u| u.email).unwrap_or_default());

    let page = RwSignal::new(Page::<UserResponse>::default());
    let current = RwSignal::new(0_u32);
    let version = RwSignal::new(0_u32);
    let loading = RwSignal::new(true);
    let syncing = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let role_filter = RwSignal::new(filters::ALL.to_owned());
    let creating = RwSignal::new(false);

    Effect::new(move || {
        version.track();
        let number = current.get();
        loading.set(true);
        spawn(async move {
            match api::admin_users(number, PAGE_SIZE).await {
                Ok(found) => page.set(found),
                Err(_) => toasts.update(|t| t.error("Erreur de chargement des utilisateurs")),
            }
            loading.set(false);
        });
    });

    let reload = move || version.update(|v| *v += 1);

    let on_sync = move |_| {
        syncing.set(true);
        spawn(async move {
            match api::sync_users().await {
                Ok(()) => {
                    toasts.update(|t| t.success("Synchronisation avec Keycloak réussie !"));
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de la synchronisation.")),
            }
            syncing.set(false);
        });
    };

    let change_role = move |keycloak_id: String, role: String| {
        spawn(async move {
            match api::assign_role(&keycloak_id, &role).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Rôle mis à jour avec succès."));
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de la mise à jour du rôle.")),
            }
        });
    };

    let remove = move |keycloak_id: String| {
        if !confirm("Êtes-vous sûr de vouloir supprimer cet utilisateur ? Cette action est irréversible.") {
            return;
        }
        spawn(async move {
            match api::delete_user(&keycloak_id).await {
                Ok(()) => {
                    toasts.update(|t| t.success("Utilisateur supprimé avec succès."));
                    reload();
                }
                Err(_) => toasts.update(|t| t.error("Erreur lors de la suppression.")),
            }
        });
    };

    let visible = move || {
        let query = search.get();
        let role = role_filter.get();
        page.with(|p| filters::filter_users(&p.content, &query, &role).into_iter().cloned().collect::<Vec<_>>())
    };

    let rows = move || {
        if loading.get() {
            return view! { <tr><td colspan="3" class="table__empty">"Chargement..."</td></tr> }.into_any();
        }
        let users = visible();
        if users.is_empty() {
            return view! { <tr><td colspan="3" class="table__empty">"Aucun utilisateur trouvé."</td></tr> }.into_any();
        }
        users
            .into_iter()
            .map(|user| {
                let key = role_key(user.role.as_deref());
                let is_self = own_email.with_value(|own| *own == user.email);
                let kc_role = user.keycloak_id.clone();
                let kc_delete = user.keycloak_id.clone();
                let selected = key.clone();
                view! {
                    <tr>
                        <td>
                            <div class="user-cell">
                                <span class="avatar">{user.initials()}</span>
                                <div>
                                    <p class="user-cell__name">{user.full_name()}</p>
                                    <p class="card__muted">{user.email.clone()}</p>
                                </div>
                            </div>
                        </td>
                        <td><span class={role_badge_class(&key)}>{key.clone()}</span></td>
                        <td class="table__actions">
                            <select
                                prop:value=selected
                                on:change=move |ev| change_role(kc_role.clone(), event_target_value(&ev))
                            >
                                {Role::ALL
                                    .into_iter()
                                    .map(|role| view! {
                                        <option value={role.backend_name()} selected={role.backend_name() == key}>
                                            {role.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                            <button
                                type="button"
                                class="button button--danger"
                                title="Supprimer"
                                disabled=is_self
                                on:click=move |_| remove(kc_delete.clone())
                            >
                                "Supprimer"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let on_created = Callback::new(move |()| {
        creating.set(false);
        reload();
    });

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Gestion des Utilisateurs"</h1>
                    <p>{move || format!("Total: {} utilisateurs enregistrés", page.with(|p| p.total_elements))}</p>
                </div>
                <div class="page__actions">
                    <button type="button" class="button button--ghost" disabled=move || syncing.get() on:click=on_sync>
                        {move || if syncing.get() { "Synchronisation..." } else { "Synchroniser Keycloak" }}
                    </button>
                    <button type="button" class="button" on:click=move |_| creating.set(true)>
                        "Nouvel utilisateur"
                    </button>
                </div>
            </header>
            <div class="filters">
                <input
                    class="search"
                    type="search"
                    placeholder="Rechercher un utilisateur..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select prop:value=move || role_filter.get() on:change=move |ev| role_filter.set(event_target_value(&ev))>
                    {ROLE_FILTERS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Utilisateur"</th>
                        <th>"Rôle Actuel"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <footer class="pagination">
                <span>{move || page.with(|p| page_label(p.number, p.total_pages))}</span>
                <button
                    type="button"
                    class="button button--ghost"
                    disabled=move || !page.with(Page::has_previous)
                    on:click=move |_| current.update(|n| *n = n.saturating_sub(1))
                >
                    "Précédent"
                </button>
                <button
                    type="button"
                    class="button button--ghost"
                    disabled=move || !page.with(Page::has_next)
                    on:click=move |_| current.update(|n| *n += 1)
                >
                    "Suivant"
                </button>
            </footer>
            <Show when=move || creating.get()>
                <CreateUserModal on_close=Callback::new(move |()| creating.set(false)) on_created=on_created/>
            </Show>
        </div>
    }
}

type Getter = fn(&AdminUserCreationRequest) -> String;
type Setter = fn(&mut AdminUserCreationRequest, String);

#[component]
fn RequestField(
    label: &'static str,
    form: RwSignal<AdminUserCreationRequest>,
    get: Getter,
    set: Setter,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                class="form-field__input"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|req| set(req, value));
                }
            />
        </div>
    }
}

#[component]
fn CreateUserModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(blank_request());
    let submitting = RwSignal::new(false);
    let role = Memo::new(move |_| form.with(|req| Role::parse(&req.role)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.get_untracked();
        if let Err(errors) = validate_admin_user(&request) {
            toasts.update(|t| t.error(errors.first().unwrap_or_default()));
            return;
        }
        let request = prune_admin_user(request);
        submitting.set(true);
        spawn(async move {
            match api::create_user(&request).await {
                Ok(_) => {
                    toasts.update(|t| t.success("Utilisateur créé avec succès !"));
                    form.set(blank_request());
                    on_created.run(());
                }
                Err(e) => toasts.update(|t| t.error(format!("Erreur lors de la création : {}", e.user_message()))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="modal">
            <div class="modal__backdrop" on:click=move |_| on_close.run(())></div>
            <form class="modal__panel" on:submit=on_submit>
                <header class="modal__header">
                    <h2>"Créer un nouvel utilisateur"</h2>
                    <button type="button" on:click=move |_| on_close.run(())>"Fermer"</button>
                </header>
                <h3>"Informations de base"</h3>
                <div class="form-grid">
                    <RequestField label="Prénom" form=form get={|r| r.first_name.clone()} set={|r, v| r.first_name = v}/>
                    <RequestField label="Nom" form=form get={|r| r.last_name.clone()} set={|r, v| r.last_name = v}/>
                    <RequestField label="Email" kind="email" form=form get={|r| r.email.clone()} set={|r, v| r.email = v}/>
                    <RequestField
                        label="Mot de passe"
                        kind="password"
                        form=form
                        get={|r| r.password.clone()}
                        set={|r, v| r.password = v}
                    />
                    <RequestField
                        label="Téléphone"
                        form=form
                        get={|r| r.phone_number.clone().unwrap_or_default()}
                        set={|r, v| r.phone_number = Some(v)}
                    />
                    <div class="form-field">
                        <label>"Rôle"</label>
                        <select
                            prop:value=move || form.with(|r| r.role.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|r| r.role = value);
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| {
                                    let name = role.backend_name();
                                    view! { <option value=name>{format!("{} ({name})", role.label())}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <RequestField
                        label="Adresse"
                        form=form
                        get={|r| r.address_line.clone().unwrap_or_default()}
                        set={|r, v| r.address_line = Some(v)}
                    />
                    <RequestField
                        label="Ville"
                        form=form
                        get={|r| r.city.clone().unwrap_or_default()}
                        set={|r, v| r.city = Some(v)}
                    />
                </div>
                <Show when=move || role.get() == Some(Role::Patient)>
                    <h3>"Profil Patient"</h3>
                    <div class="form-grid">
                        <RequestField
                            label="Date de naissance"
                            kind="date"
                            form=form
                            get={|r| r.date_of_birth.clone().unwrap_or_default()}
                            set={|r, v| r.date_of_birth = Some(v)}
                        />
                        <div class="form-field">
                            <label>"Genre"</label>
                            <select
                                prop:value=move || form.with(|r| r.gender.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|r| r.gender = Some(value));
                                }
                            >
                                {GENDERS
                                    .into_iter()
                                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <RequestField
                            label="Groupe Sanguin"
                            placeholder="ex: A+"
                            form=form
                            get={|r| r.blood_type.clone().unwrap_or_default()}
                            set={|r, v| r.blood_type = Some(v)}
                        />
                        <RequestField
                            label="Assurance"
                            form=form
                            get={|r| r.insurance_provider.clone().unwrap_or_default()}
                            set={|r, v| r.insurance_provider = Some(v)}
                        />
                    </div>
                </Show>
                <Show when=move || role.get() == Some(Role::Medecin)>
                    <h3>"Profil Médecin"</h3>
                    <div class="form-grid">
                        <RequestField
                            label="Spécialisation"
                            form=form
                            get={|r| r.specialization.clone().unwrap_or_default()}
                            set={|r, v| r.specialization = Some(v)}
                        />
                        <RequestField
                            label="Numéro de licence"
                            form=form
                            get={|r| r.license_number.clone().unwrap_or_default()}
                            set={|r, v| r.license_number = Some(v)}
                        />
                        <RequestField
                            label="Années d'expérience"
                            kind="number"
                            form=form
                            get={|r| r.years_of_experience.map(|y| y.to_string()).unwrap_or_default()}
                            set={|r, v| r.years_of_experience = v.trim().parse().ok()}
                        />
                        <RequestField
                            label="Frais de consultation (TND)"
                            kind="number"
                            form=form
                            get={|r| r.consultation_fee.map(|f| f.to_string()).unwrap_or_default()}
                            set={|r, v| r.consultation_fee = v.trim().parse().ok()}
                        />
                    </div>
                </Show>
                <footer class="modal__footer">
                    <button type="button" class="button button--ghost" on:click=move |_| on_close.run(())>"Annuler"</button>
                    <button type="submit" class="button" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Création..." } else { "Créer l'utilisateur" }}
                    </button>
                </footer>
            </form>
        </div>
    }
}
