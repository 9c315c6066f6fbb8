//! Form validation.
//!
//! Forms hold raw input strings as typed by the user. Validation either
//! yields the wire payload or a [`FieldErrors`] listing every failing field
//! with its display message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::endpoints::format_date_time;
use crate::roles::Role;
use crate::types::{AdminUserCreationRequest, MedecinRegistration, PatientRegistration, PrescriptionDraft};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} champ(s) invalide(s)", .0.len())]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// First message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// Message of the first failing field, for single-line toasts.
    #[must_use]
    pub fn first(&self) -> Option<&'static str> {
        self.0.first().map(|e| e.message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Loose address shape check: one `@`, non-empty local part, dotted domain.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Fields shared by both self-registration forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub address_line: String,
    pub city: String,
    pub country: String,
}

impl AccountForm {
    fn check(&self, errors: &mut FieldErrors) {
        if self.first_name.trim().chars().count() < 2 {
            errors.push("firstName", "Le prénom doit contenir au moins 2 caractères");
        }
        if self.last_name.trim().chars().count() < 2 {
            errors.push("lastName", "Le nom doit contenir au moins 2 caractères");
        }
        if !is_valid_email(&self.email) {
            errors.push("email", "Email invalide");
        }
        if self.password.chars().count() < 8 {
            errors.push("password", "Le mot de passe doit contenir au moins 8 caractères");
        }
        if self.password != self.confirm_password {
            errors.push("confirmPassword", "Les mots de passe ne correspondent pas");
        }
        if self.phone_number.trim().chars().count() < 8 {
            errors.push("phoneNumber", "Numéro de téléphone requis");
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub account: AccountForm,
    /// `YYYY-MM-DD` from a date input.
    pub date_of_birth: String,
    pub gender: String,
}

impl PatientForm {
    /// # Errors
    ///
    /// Every failing field, including a birth date that is not strictly
    /// before `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<PatientRegistration, FieldErrors> {
        let mut errors = FieldErrors::default();
        self.account.check(&mut errors);
        let birth = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d").ok().filter(|d| *d < today);
        if birth.is_none() {
            errors.push("dateOfBirth", "Date invalide");
        }
        let gender = self.gender.trim().to_uppercase();
        if gender != "MALE" && gender != "FEMALE" {
            errors.push("gender", "Genre invalide");
        }
        let Some(date_of_birth) = birth else {
            return Err(errors);
        };
        let a = &self.account;
        errors.into_result(|| PatientRegistration {
            first_name: a.first_name.trim().to_owned(),
            last_name: a.last_name.trim().to_owned(),
            email: a.email.trim().to_owned(),
            password: a.password.clone(),
            phone_number: a.phone_number.trim().to_owned(),
            date_of_birth,
            gender,
            address_line: non_blank(&a.address_line),
            city: non_blank(&a.city),
            country: non_blank(&a.country),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MedecinForm {
    pub account: AccountForm,
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: String,
    pub consultation_fee: String,
}

impl Default for MedecinForm {
    fn default() -> Self {
        Self {
            account: AccountForm { country: "Tunisie".to_owned(), ..AccountForm::default() },
            specialization: String::new(),
            license_number: String::new(),
            years_of_experience: "0".to_owned(),
            consultation_fee: "0".to_owned(),
        }
    }
}

impl MedecinForm {
    /// # Errors
    ///
    /// Every failing field.
    pub fn validate(&self) -> Result<MedecinRegistration, FieldErrors> {
        let mut errors = FieldErrors::default();
        self.account.check(&mut errors);
        if self.specialization.trim().chars().count() < 2 {
            errors.push("specialization", "Spécialité requise");
        }
        if self.license_number.trim().chars().count() < 4 {
            errors.push("licenseNumber", "Numéro de licence requis");
        }
        let years = self.years_of_experience.trim().parse::<u32>().ok();
        if years.is_none() {
            errors.push("yearsOfExperience", "Années d'expérience invalides");
        }
        let fee = self.consultation_fee.trim().parse::<f64>().ok().filter(|f| f.is_finite() && *f >= 0.0);
        if fee.is_none() {
            errors.push("consultationFee", "Tarif de consultation invalide");
        }
        let (Some(years_of_experience), Some(consultation_fee)) = (years, fee) else {
            return Err(errors);
        };
        let a = &self.account;
        errors.into_result(|| MedecinRegistration {
            first_name: a.first_name.trim().to_owned(),
            last_name: a.last_name.trim().to_owned(),
            email: a.email.trim().to_owned(),
            password: a.password.clone(),
            phone_number: a.phone_number.trim().to_owned(),
            specialization: self.specialization.trim().to_owned(),
            license_number: self.license_number.trim().to_owned(),
            years_of_experience,
            consultation_fee,
            address_line: non_blank(&a.address_line),
            city: non_blank(&a.city),
            country: non_blank(&a.country),
        })
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// Check the base fields of an admin-created account.
///
/// # Errors
///
/// Every failing field.
pub fn validate_admin_user(req: &AdminUserCreationRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if req.first_name.trim().is_empty() {
        errors.push("firstName", "Prénom requis");
    }
    if req.last_name.trim().is_empty() {
        errors.push("lastName", "Nom requis");
    }
    if !is_valid_email(&req.email) {
        errors.push("email", "Email invalide");
    }
    if req.password.chars().count() < 8 {
        errors.push("password", "Le mot de passe doit contenir au moins 8 caractères");
    }
    if Role::parse(&req.role).is_none() {
        errors.push("role", "Rôle invalide");
    }
    errors.into_result(|| ())
}

/// Drop profile fields that do not belong to the chosen role and blank
/// optional strings.
#[must_use]
pub fn prune_admin_user(mut req: AdminUserCreationRequest) -> AdminUserCreationRequest {
    let role = Role::parse(&req.role);
    if let Some(role) = role {
        req.role = role.backend_name().to_owned();
    }
    if role != Some(Role::Patient) {
        req.date_of_birth = None;
        req.gender = None;
        req.blood_type = None;
        req.emergency_contact_name = None;
        req.emergency_contact_phone = None;
        req.insurance_provider = None;
        req.insurance_number = None;
    }
    if role != Some(Role::Medecin) {
        req.specialization = None;
        req.license_number = None;
        req.years_of_experience = None;
        req.consultation_fee = None;
    }
    for field in [
        &mut req.phone_number,
        &mut req.address_line,
        &mut req.city,
        &mut req.country,
        &mut req.date_of_birth,
        &mut req.gender,
        &mut req.blood_type,
        &mut req.emergency_contact_name,
        &mut req.emergency_contact_phone,
        &mut req.insurance_provider,
        &mut req.insurance_number,
        &mut req.specialization,
        &mut req.license_number,
    ] {
        *field = field.take().and_then(|v| non_blank(&v));
    }
    req
}

// =============================================================================
// SCHEDULE & PRESCRIPTIONS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnavailabilityForm {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub reason: String,
}

/// A validated unavailability period in wire form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnavailabilityWindow {
    /// `YYYY-MM-DDTHH:MM:00`
    pub start: String,
    pub end: String,
    pub reason: Option<String>,
}

fn join_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?;
    Some(date.and_time(time))
}

impl UnavailabilityForm {
    /// # Errors
    ///
    /// A single form-level error when any input is missing, and an `end`
    /// error when the period is empty or reversed.
    pub fn validate(&self) -> Result<UnavailabilityWindow, FieldErrors> {
        let mut errors = FieldErrors::default();
        let inputs = [&self.start_date, &self.start_time, &self.end_date, &self.end_time];
        if inputs.iter().any(|s| s.trim().is_empty()) {
            errors.push("form", "Veuillez remplir toutes les dates et heures");
            return Err(errors);
        }
        let (Some(start), Some(end)) =
            (join_date_time(&self.start_date, &self.start_time), join_date_time(&self.end_date, &self.end_time))
        else {
            errors.push("form", "Date ou heure invalide");
            return Err(errors);
        };
        if start >= end {
            errors.push("end", "La date de fin doit être après la date de début");
            return Err(errors);
        }
        Ok(UnavailabilityWindow {
            start: format_date_time(start),
            end: format_date_time(end),
            reason: non_blank(&self.reason),
        })
    }
}

/// Validate one prescription line before it joins the consultation list.
///
/// # Errors
///
/// Medication and dosage are required.
pub fn validate_prescription(medication: &str, dosage: &str, duration: &str) -> Result<PrescriptionDraft, FieldErrors> {
    let mut errors = FieldErrors::default();
    if medication.trim().is_empty() {
        errors.push("medicationName", "Médicament requis");
    }
    if dosage.trim().is_empty() {
        errors.push("dosage", "Posologie requise");
    }
    errors.into_result(|| PrescriptionDraft {
        medication_name: medication.trim().to_owned(),
        dosage: dosage.trim().to_owned(),
        duration: duration.trim().to_owned(),
        instructions: String::new(),
    })
}
