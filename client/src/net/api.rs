//! REST API helpers for communicating with the gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR): every call resolves to [`ApiError::NotAvailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Non-success
//! responses carry the backend's `message` field through; pages surface it
//! as a toast. There is no retry and no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chrono::NaiveDate;
use portal::ApiError;
use portal::consultation::ConsultationStep;
use portal::endpoints;
use portal::types::{
    AdminUserCreationRequest, AppointmentFilter, AppointmentRequest, AppointmentResponse, AppointmentUpdate,
    AuditLog, ConsultationNote, ConsultationNoteRequest, DiagnosisRequest, DoctorSchedule, Dossier, MailRequest,
    MedecinRegistration, MedicalRecord, MedicalRecordUpdate, Page, PasswordLogin, PatientRegistration, Prescription,
    PrescriptionRequest, RoleAssignment, ScheduleUpdate, TimeSlot, TokenResponse, TreatmentRequest, Unavailability,
    UserResponse,
};
use portal::validation::UnavailabilityWindow;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{}{path}", endpoints::API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send(method: Method, url: &str, body: Option<Value>) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    if let Some(token) = crate::util::storage::read_token() {
        builder = builder.header("Authorization", &bearer(&token));
    }
    let sent = match body {
        Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &text))
}

async fn fetch<T: DeserializeOwned>(method: Method, path: &str, body: Option<Value>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(method, &api_url(path), body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::NotAvailable)
    }
}

/// Like [`fetch`] for endpoints whose response body is irrelevant.
async fn execute(method: Method, path: &str, body: Option<Value>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(method, &api_url(path), body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::NotAvailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a token via the portal server's password-grant
/// proxy.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] for rejected credentials, otherwise any
/// transport or decode failure.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let body = to_body(&PasswordLogin { username: username.to_owned(), password: password.to_owned() })?;
    #[cfg(feature = "hydrate")]
    {
        let resp = send(Method::Post, endpoints::PORTAL_TOKEN, Some(body)).await?;
        resp.json::<TokenResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::NotAvailable)
    }
}

/// # Errors
///
/// Gateway rejection (e.g. email already used) or transport failure.
pub async fn register_patient(payload: &PatientRegistration) -> Result<(), ApiError> {
    execute(Method::Post, endpoints::REGISTER_PATIENT, Some(to_body(payload)?)).await
}

/// # Errors
///
/// Gateway rejection or transport failure.
pub async fn register_medecin(payload: &MedecinRegistration) -> Result<(), ApiError> {
    execute(Method::Post, endpoints::REGISTER_MEDECIN, Some(to_body(payload)?)).await
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// # Errors
///
/// Any gateway or transport failure.
pub async fn list_appointments(filter: &AppointmentFilter) -> Result<Page<AppointmentResponse>, ApiError> {
    fetch(Method::Get, &endpoints::appointments(filter), None).await
}

/// # Errors
///
/// Any gateway or transport failure, including slot conflicts.
pub async fn create_appointment(request: &AppointmentRequest) -> Result<AppointmentResponse, ApiError> {
    fetch(Method::Post, endpoints::APPOINTMENTS, Some(to_body(request)?)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn update_appointment(id: &str, update: &AppointmentUpdate) -> Result<AppointmentResponse, ApiError> {
    fetch(Method::Put, &endpoints::appointment(id), Some(to_body(update)?)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn available_slots(doctor_id: &str, date: NaiveDate) -> Result<Vec<TimeSlot>, ApiError> {
    fetch(Method::Get, &endpoints::available_slots(doctor_id, date), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn appointment_prescriptions(appointment_id: &str) -> Result<Vec<Prescription>, ApiError> {
    fetch(Method::Get, &endpoints::appointment_prescriptions(appointment_id), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn add_prescription(appointment_id: &str, request: &PrescriptionRequest) -> Result<Prescription, ApiError> {
    fetch(Method::Post, &endpoints::appointment_prescriptions(appointment_id), Some(to_body(request)?)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn patient_prescriptions(patient_id: &str, page: u32, size: u32) -> Result<Page<Prescription>, ApiError> {
    fetch(Method::Get, &endpoints::patient_prescriptions(patient_id, page, size), None).await
}

// =============================================================================
// SCHEDULE
// =============================================================================

/// # Errors
///
/// Any gateway or transport failure.
pub async fn doctor_schedule(doctor_id: &str) -> Result<Vec<DoctorSchedule>, ApiError> {
    fetch(Method::Get, &endpoints::doctor_schedule(doctor_id), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn save_schedule(update: &ScheduleUpdate) -> Result<DoctorSchedule, ApiError> {
    fetch(Method::Post, endpoints::SCHEDULE, Some(to_body(update)?)).await
}

/// Monday to Friday, 09:00 to 17:00.
///
/// # Errors
///
/// Any gateway or transport failure.
pub async fn create_default_schedule(doctor_id: &str) -> Result<(), ApiError> {
    execute(Method::Post, &endpoints::default_schedule(doctor_id), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn add_unavailability(doctor_id: &str, window: &UnavailabilityWindow) -> Result<Unavailability, ApiError> {
    let path = endpoints::add_unavailability(doctor_id, &window.start, &window.end, window.reason.as_deref());
    fetch(Method::Post, &path, None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn unavailabilities(doctor_id: &str) -> Result<Vec<Unavailability>, ApiError> {
    fetch(Method::Get, &endpoints::doctor_unavailabilities(doctor_id), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn delete_unavailability(id: &str) -> Result<(), ApiError> {
    execute(Method::Delete, &endpoints::unavailability(id), None).await
}

// =============================================================================
// DIRECTORY & RECORDS
// =============================================================================

/// # Errors
///
/// Any gateway or transport failure.
pub async fn medecins(page: u32, size: u32) -> Result<Page<UserResponse>, ApiError> {
    fetch(Method::Get, &endpoints::medecins(page, size), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn patients(page: u32, size: u32) -> Result<Page<UserResponse>, ApiError> {
    fetch(Method::Get, &endpoints::patients(page, size), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn patient(keycloak_id: &str) -> Result<UserResponse, ApiError> {
    fetch(Method::Get, &endpoints::patient_by_keycloak(keycloak_id), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn dossier(patient_id: &str) -> Result<Dossier, ApiError> {
    fetch(Method::Get, &endpoints::dossier(patient_id), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn update_medical_record(patient_id: &str, update: &MedicalRecordUpdate) -> Result<MedicalRecord, ApiError> {
    fetch(Method::Put, &endpoints::medical_record(patient_id), Some(to_body(update)?)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn add_consultation_note(request: &ConsultationNoteRequest) -> Result<ConsultationNote, ApiError> {
    fetch(Method::Post, endpoints::RECORD_NOTES, Some(to_body(request)?)).await
}

// =============================================================================
// ADMIN & AUDIT
// =============================================================================

/// # Errors
///
/// Any gateway or transport failure.
pub async fn admin_users(page: u32, size: u32) -> Result<Page<UserResponse>, ApiError> {
    fetch(Method::Get, &endpoints::admin_users(page, size), None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn create_user(request: &AdminUserCreationRequest) -> Result<UserResponse, ApiError> {
    fetch(Method::Post, endpoints::ADMIN_USERS, Some(to_body(request)?)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn assign_role(keycloak_id: &str, role: &str) -> Result<(), ApiError> {
    let body = to_body(&RoleAssignment { role: role.to_owned() })?;
    execute(Method::Put, &endpoints::admin_user_roles(keycloak_id), Some(body)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn delete_user(keycloak_id: &str) -> Result<(), ApiError> {
    execute(Method::Delete, &endpoints::admin_user(keycloak_id), None).await
}

/// Pull identity-provider accounts into the user directory.
///
/// # Errors
///
/// Any gateway or transport failure.
pub async fn sync_users() -> Result<(), ApiError> {
    execute(Method::Post, endpoints::ADMIN_SYNC, None).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn audit_logs() -> Result<Vec<AuditLog>, ApiError> {
    fetch(Method::Get, endpoints::AUDIT_LOGS, None).await
}

// =============================================================================
// ML & MAIL
// =============================================================================

/// The ML service response is rendered as-is.
///
/// # Errors
///
/// Any gateway or transport failure.
pub async fn predict_diagnosis(symptoms: &str) -> Result<Value, ApiError> {
    let body = to_body(&DiagnosisRequest { symptoms: symptoms.to_owned() })?;
    fetch(Method::Post, endpoints::ML_DIAGNOSIS, Some(body)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn suggest_treatment(symptoms: &str, diagnosis: Option<String>) -> Result<Value, ApiError> {
    let body = to_body(&TreatmentRequest { symptoms: symptoms.to_owned(), diagnosis })?;
    fetch(Method::Post, endpoints::ML_TREATMENT, Some(body)).await
}

/// # Errors
///
/// Any gateway or transport failure.
pub async fn send_mail(request: &MailRequest) -> Result<(), ApiError> {
    execute(Method::Post, endpoints::MAIL_SEND, Some(to_body(request)?)).await
}

/// Execute a consultation completion plan in order. Stops at the first
/// failing required step; best-effort steps only log their failure.
///
/// # Errors
///
/// The error of the first required step that failed.
pub async fn run_consultation(steps: Vec<ConsultationStep>) -> Result<(), ApiError> {
    for step in steps {
        let best_effort = step.is_best_effort();
        let result = match &step {
            ConsultationStep::AddNote(note) => add_consultation_note(note).await.map(|_| ()),
            ConsultationStep::AddPrescription { appointment_id, request } => {
                add_prescription(appointment_id, request).await.map(|_| ())
            }
            ConsultationStep::Complete { appointment_id, update } => {
                update_appointment(appointment_id, update).await.map(|_| ())
            }
            ConsultationStep::Notify(mail) => send_mail(mail).await,
        };
        match result {
            Err(e) if best_effort => {
                #[cfg(feature = "hydrate")]
                log::warn!("consultation notification failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
            }
            Err(e) => return Err(e),
            Ok(()) => {}
        }
    }
    Ok(())
}
