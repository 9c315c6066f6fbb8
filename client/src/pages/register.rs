//! Self-registration for patients and médecins.
//!
//! Patients land on a success card pointing to `/login`. Médecins are
//! signed in right after registration and fall back to the same card when
//! the automatic login fails.

use chrono::Local;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::validation::{AccountForm, FieldErrors, MedecinForm, PatientForm};

use crate::components::form_field::FormField;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::auth::sign_in;
use crate::util::task::spawn;

/// Signals backing the fields shared by both forms.
#[derive(Clone, Copy)]
struct AccountSignals {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
    phone_number: RwSignal<String>,
    address_line: RwSignal<String>,
    city: RwSignal<String>,
    country: RwSignal<String>,
}

impl AccountSignals {
    fn new(country: &str) -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            address_line: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            country: RwSignal::new(country.to_owned()),
        }
    }

    fn form(self) -> AccountForm {
        AccountForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            phone_number: self.phone_number.get_untracked(),
            address_line: self.address_line.get_untracked(),
            city: self.city.get_untracked(),
            country: self.country.get_untracked(),
        }
    }
}

#[component]
fn AccountFields(account: AccountSignals, errors: RwSignal<FieldErrors>, email_label: &'static str) -> impl IntoView {
    view! {
        <div class="form-row">
            <FormField label="Prénom" name="firstName" value=account.first_name errors=errors/>
            <FormField label="Nom" name="lastName" value=account.last_name errors=errors/>
        </div>
        <FormField label=email_label name="email" kind="email" value=account.email errors=errors placeholder="nom@exemple.com"/>
        <div class="form-row">
            <FormField label="Mot de passe" name="password" kind="password" value=account.password errors=errors/>
            <FormField label="Confirmer" name="confirmPassword" kind="password" value=account.confirm_password errors=errors/>
        </div>
        <FormField label="Téléphone" name="phoneNumber" kind="tel" value=account.phone_number errors=errors/>
        <FormField label="Adresse" name="addressLine" value=account.address_line errors=errors/>
        <div class="form-row">
            <FormField label="Ville" name="city" value=account.city errors=errors/>
            <FormField label="Pays" name="country" value=account.country errors=errors/>
        </div>
    }
}

#[component]
fn RegistrationSuccess(message: &'static str) -> impl IntoView {
    view! {
        <div class="register-card register-card--success">
            <h1>"Inscription réussie !"</h1>
            <p>{message}</p>
            <a class="button" href="/login">"Se connecter"</a>
        </div>
    }
}

#[component]
pub fn RegisterPatientPage() -> impl IntoView {
    let account = AccountSignals::new("");
    let date_of_birth = RwSignal::new(String::new());
    let gender = RwSignal::new(String::from("MALE"));
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = PatientForm {
            account: account.form(),
            date_of_birth: date_of_birth.get_untracked(),
            gender: gender.get_untracked(),
        };
        let payload = match form.validate(Local::now().date_naive()) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        banner.set(None);
        busy.set(true);
        spawn(async move {
            match api::register_patient(&payload).await {
                Ok(()) => success.set(true),
                Err(e) => banner.set(Some(match e {
                    portal::ApiError::Status { message, .. } => message,
                    _ => "Une erreur est survenue lors de l'inscription. Veuillez réessayer.".to_owned(),
                })),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="register-page">
            <Show
                when=move || !success.get()
                fallback=|| view! {
                    <RegistrationSuccess message="Votre compte patient a été créé avec succès. Vous pouvez maintenant vous connecter."/>
                }
            >
                <form class="register-card" on:submit=on_submit>
                    <h1>"Créer un compte patient"</h1>
                    {move || banner.get().map(|m| view! { <p class="form-banner form-banner--error">{m}</p> })}
                    <AccountFields account=account errors=errors email_label="Email"/>
                    <div class="form-row">
                        <FormField label="Date de naissance" name="dateOfBirth" kind="date" value=date_of_birth errors=errors/>
                        <div class="form-field">
                            <label for="gender">"Genre"</label>
                            <select id="gender" prop:value=move || gender.get() on:change=move |ev| gender.set(event_target_value(&ev))>
                                <option value="MALE">"Homme"</option>
                                <option value="FEMALE">"Femme"</option>
                            </select>
                        </div>
                    </div>
                    <button class="button" type="submit" disabled=move || busy.get()>"S'inscrire"</button>
                    <p>"Déjà inscrit ? " <a href="/login">"Se connecter"</a></p>
                </form>
            </Show>
        </div>
    }
}

#[component]
pub fn RegisterMedecinPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let defaults = MedecinForm::default();
    let account = AccountSignals::new(&defaults.account.country);
    let specialization = RwSignal::new(String::new());
    let license_number = RwSignal::new(String::new());
    let years = RwSignal::new(defaults.years_of_experience);
    let fee = RwSignal::new(defaults.consultation_fee);
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if let (false, Some(user)) = (state.loading, state.user.as_ref()) {
            navigate(user.landing_route(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = MedecinForm {
            account: account.form(),
            specialization: specialization.get_untracked(),
            license_number: license_number.get_untracked(),
            years_of_experience: years.get_untracked(),
            consultation_fee: fee.get_untracked(),
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        banner.set(None);
        busy.set(true);
        spawn(async move {
            if let Err(e) = api::register_medecin(&payload).await {
                banner.set(Some(match e {
                    portal::ApiError::Status { message, .. } => message,
                    _ => "Une erreur est survenue lors de l'inscription.".to_owned(),
                }));
                busy.set(false);
                return;
            }
            // The redirect effect takes over once the session is set.
            let signed_in = match api::login(&payload.email, &payload.password).await {
                Ok(token) => sign_in(auth, &token.access_token).is_ok(),
                Err(_) => false,
            };
            if !signed_in {
                success.set(true);
            }
            busy.set(false);
        });
    };

    view! {
        <div class="register-page">
            <Show
                when=move || !success.get()
                fallback=|| view! {
                    <RegistrationSuccess message="Votre compte médecin a été créé avec succès. Vous pouvez maintenant vous connecter."/>
                }
            >
                <form class="register-card" on:submit=on_submit>
                    <h1>"Inscription Médecin"</h1>
                    {move || banner.get().map(|m| view! { <p class="form-banner form-banner--error">{m}</p> })}
                    <AccountFields account=account errors=errors email_label="Email Professionnel"/>
                    <div class="form-row">
                        <FormField label="Spécialité" name="specialization" value=specialization errors=errors/>
                        <FormField label="Numéro de Licence (CNOM)" name="licenseNumber" value=license_number errors=errors/>
                    </div>
                    <div class="form-row">
                        <FormField label="Années d'expérience" name="yearsOfExperience" kind="number" value=years errors=errors/>
                        <FormField label="Tarif de consultation (DT)" name="consultationFee" kind="number" value=fee errors=errors/>
                    </div>
                    <button class="button" type="submit" disabled=move || busy.get()>"Créer mon compte"</button>
                    <p>"Déjà inscrit ? " <a href="/login">"Se connecter"</a></p>
                </form>
            </Show>
        </div>
    }
}
