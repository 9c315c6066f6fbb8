//! Gateway wire-schema DTOs.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies the gateway services emit (camelCase,
//! offset-less ISO-8601 date-times). Optional backend fields stay `Option`
//! and collection fields default to empty so partial payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::roles::Role;

// =============================================================================
// USERS
// =============================================================================

/// A user as returned by the auth service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Local user identifier (UUID string).
    pub id: String,
    /// Identity-provider subject; most gateway routes key users by this.
    pub keycloak_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Role claim, either `ROLE_X` or bare `X`.
    pub role: Option<String>,
    pub patient_profile: Option<PatientProfile>,
    pub medecin_profile: Option<MedecinProfile>,
}

impl UserResponse {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    /// Parsed role; users without one are patients.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role.as_deref().and_then(Role::parse).unwrap_or(Role::Patient)
    }

    /// Two-letter initials for avatar badges.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub id: String,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedecinProfile {
    pub id: String,
    pub specialization: Option<String>,
    pub license_number: Option<String>,
    pub years_of_experience: Option<u32>,
    pub consultation_fee: Option<f64>,
    pub available: Option<bool>,
}

/// Spring-style page envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub size: u32,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_pages: 0, total_elements: 0, size: 0, number: 0 }
    }
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

/// `POST /admin/users` payload. Role-specific fields are pruned by
/// [`crate::validation::prune_admin_user`] before sending.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserCreationRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Backend enum name (`PATIENT`, `MEDECIN`, ...).
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `POST /auth/register/patient` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// `POST /auth/register/medecin` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedecinRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: u32,
    pub consultation_fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::Confirmed, Self::Cancelled, Self::Completed];

    /// Wire name, also used as a query value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// User-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Planifié",
            Self::Confirmed => "Confirmé",
            Self::Cancelled => "Annulé",
            Self::Completed => "Terminé",
        }
    }

    /// Whether the appointment still occupies the doctor's agenda.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Scheduled | Self::Confirmed)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
}

/// `POST /appointments` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date_time: NaiveDateTime,
    pub reason: String,
}

/// `PUT /appointments/{id}` payload; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date_time: Option<NaiveDateTime>,
}

/// Query filter for `GET /appointments`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for AppointmentFilter {
    fn default() -> Self {
        Self { status: None, patient_id: None, doctor_id: None, start_date: None, end_date: None, page: 0, size: 10 }
    }
}

impl AppointmentFilter {
    #[must_use]
    pub fn for_patient(patient_id: &str, size: u32) -> Self {
        Self { patient_id: Some(patient_id.to_owned()), size, ..Self::default() }
    }

    #[must_use]
    pub fn for_doctor(doctor_id: &str, size: u32) -> Self {
        Self { doctor_id: Some(doctor_id.to_owned()), size, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
}

/// A bookable time slot from `GET /appointments/slots/available`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub is_available: bool,
    pub status: SlotStatus,
}

impl TimeSlot {
    /// Bookable only when both the flag and the status agree.
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.is_available && self.status == SlotStatus::Available
    }
}

/// Weekly working hours for one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSchedule {
    pub id: String,
    pub doctor_id: String,
    pub day_of_week: String,
    /// `HH:MM[:SS]`.
    pub start_time: String,
    pub end_time: String,
    pub slot_duration_minutes: u32,
    pub is_active: bool,
}

/// `POST /appointments/schedule` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    pub doctor_id: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub slot_duration_minutes: u32,
    pub is_active: bool,
}

pub const DAYS_OF_WEEK: [&str; 7] = ["MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY", "SUNDAY"];

impl ScheduleUpdate {
    /// Merge a partial edit of `day` over the existing row, falling back to
    /// 09:00–17:00, 30-minute slots, active.
    #[must_use]
    pub fn merged(
        doctor_id: &str,
        day: &str,
        existing: Option<&DoctorSchedule>,
        start_time: Option<String>,
        end_time: Option<String>,
        slot_duration_minutes: Option<u32>,
        is_active: Option<bool>,
    ) -> Self {
        Self {
            doctor_id: doctor_id.to_owned(),
            day_of_week: day.to_owned(),
            start_time: start_time
                .or_else(|| existing.map(|s| s.start_time.clone()))
                .unwrap_or_else(|| "09:00".to_owned()),
            end_time: end_time
                .or_else(|| existing.map(|s| s.end_time.clone()))
                .unwrap_or_else(|| "17:00".to_owned()),
            slot_duration_minutes: slot_duration_minutes
                .or_else(|| existing.map(|s| s.slot_duration_minutes))
                .unwrap_or(30),
            is_active: is_active.or_else(|| existing.map(|s| s.is_active)).unwrap_or(true),
        }
    }
}

/// A blocked period in a doctor's agenda.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unavailability {
    pub id: String,
    pub doctor_id: Option<String>,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    pub reason: Option<String>,
}

// =============================================================================
// PRESCRIPTIONS & RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub appointment_id: Option<String>,
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub medication_name: String,
    pub dosage: String,
    pub duration: Option<String>,
    pub instructions: Option<String>,
    pub issued_at: Option<NaiveDateTime>,
}

/// `POST /appointments/{id}/prescriptions` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRequest {
    pub patient_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub duration: String,
    pub instructions: String,
}

/// A prescription line drafted during a consultation, before it has a patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrescriptionDraft {
    pub medication_name: String,
    pub dosage: String,
    pub duration: String,
    pub instructions: String,
}

impl PrescriptionDraft {
    #[must_use]
    pub fn into_request(self, patient_id: &str) -> PrescriptionRequest {
        PrescriptionRequest {
            patient_id: patient_id.to_owned(),
            medication_name: self.medication_name,
            dosage: self.dosage,
            duration: self.duration,
            instructions: self.instructions,
        }
    }
}

/// Clinical data held by the medical-record service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub patient_id: String,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub medical_history: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// `PUT /records/patient/{id}` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordUpdate {
    pub blood_type: String,
    pub allergies: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronic_conditions: Option<String>,
    pub medical_history: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
}

impl MedicalRecordUpdate {
    /// Prefill an edit form from the stored record.
    #[must_use]
    pub fn from_record(record: &MedicalRecord) -> Self {
        Self {
            blood_type: record.blood_type.clone().unwrap_or_default(),
            allergies: record.allergies.clone().unwrap_or_default(),
            chronic_conditions: record.chronic_conditions.clone(),
            medical_history: record.medical_history.clone().unwrap_or_default(),
            emergency_contact_name: record.emergency_contact_name.clone(),
            emergency_contact_phone: record.emergency_contact_phone.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationNote {
    pub id: String,
    pub appointment_id: Option<String>,
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub note_content: String,
    pub created_at: Option<NaiveDateTime>,
}

/// `POST /records/notes` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationNoteRequest {
    pub appointment_id: String,
    pub patient_id: String,
    pub note_content: String,
}

/// A patient's aggregated medical record view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dossier {
    #[serde(default)]
    pub patient_id: String,
    pub medical_record: Option<MedicalRecord>,
    #[serde(default)]
    pub consultation_notes: Vec<ConsultationNote>,
    #[serde(default)]
    pub appointment_history: Vec<DossierAppointment>,
    #[serde(default)]
    pub prescription_history: Vec<Prescription>,
}

/// Appointment summary embedded in a dossier (no display names).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DossierAppointment {
    pub id: String,
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub appointment_date_time: NaiveDateTime,
    pub status: String,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

// =============================================================================
// AUDIT, MAIL, ML
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub timestamp: String,
    pub service_name: String,
    pub user_id: String,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    pub action: String,
    pub resource_id: Option<String>,
    pub status: String,
    pub details: Option<String>,
    pub ip_address: Option<String>,
}

/// `POST /audit/logs` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogRequest {
    pub service_name: String,
    pub action: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// `POST /mail/send` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub is_html: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub symptoms: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentRequest {
    pub symptoms: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
}

// =============================================================================
// IDENTITY PROVIDER
// =============================================================================

/// OIDC token endpoint response (snake_case, as OAuth 2.0 defines it).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

/// Credentials posted to the portal server's `/auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordLogin {
    pub username: String,
    pub password: String,
}
