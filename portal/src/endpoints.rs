//! Gateway route builders.
//!
//! All paths are relative to the API base (`/api` in the browser, the
//! portal server's `/api` for the CLI). Path segments and query values are
//! percent-encoded here so callers can pass raw identifiers.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::AppointmentFilter;

/// Default API base used by the browser client.
pub const API_BASE: &str = "/api";

pub const REGISTER_PATIENT: &str = "/auth/register/patient";
pub const REGISTER_MEDECIN: &str = "/auth/register/medecin";
pub const APPOINTMENTS: &str = "/appointments";
pub const SCHEDULE: &str = "/appointments/schedule";
pub const RECORD_NOTES: &str = "/records/notes";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_SYNC: &str = "/admin/sync-keycloak";
pub const AUDIT_LOGS: &str = "/audit/logs";
pub const AUDIT_SEED: &str = "/audit/seed";
pub const ML_DIAGNOSIS: &str = "/ml/predict/diagnosis";
pub const ML_TREATMENT: &str = "/ml/predict/treatment";
pub const MAIL_SEND: &str = "/mail/send";

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn seg(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Append `key=value` pairs, skipping `None` values.
fn with_query(path: &str, pairs: &[(&str, Option<String>)]) -> String {
    let query = pairs
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={}", urlencoding::encode(v))))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

fn paged(path: &str, page: u32, size: u32) -> String {
    with_query(path, &[("page", Some(page.to_string())), ("size", Some(size.to_string()))])
}

/// Wire form of a local date-time (`YYYY-MM-DDTHH:MM:SS`).
#[must_use]
pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

#[must_use]
pub fn appointments(filter: &AppointmentFilter) -> String {
    with_query(
        APPOINTMENTS,
        &[
            ("status", filter.status.map(|s| s.as_str().to_owned())),
            ("patientId", filter.patient_id.clone()),
            ("doctorId", filter.doctor_id.clone()),
            ("startDate", filter.start_date.clone()),
            ("endDate", filter.end_date.clone()),
            ("page", Some(filter.page.to_string())),
            ("size", Some(filter.size.to_string())),
        ],
    )
}

#[must_use]
pub fn appointment(id: &str) -> String {
    format!("{APPOINTMENTS}/{}", seg(id))
}

#[must_use]
pub fn appointment_prescriptions(appointment_id: &str) -> String {
    format!("{APPOINTMENTS}/{}/prescriptions", seg(appointment_id))
}

#[must_use]
pub fn patient_prescriptions(patient_id: &str, page: u32, size: u32) -> String {
    paged(&format!("/prescriptions/patient/{}", seg(patient_id)), page, size)
}

#[must_use]
pub fn available_slots(doctor_id: &str, date: NaiveDate) -> String {
    with_query(
        "/appointments/slots/available",
        &[("doctorId", Some(doctor_id.to_owned())), ("date", Some(date.format("%Y-%m-%d").to_string()))],
    )
}

// =============================================================================
// SCHEDULE
// =============================================================================

#[must_use]
pub fn doctor_schedule(doctor_id: &str) -> String {
    format!("{SCHEDULE}/{}", seg(doctor_id))
}

#[must_use]
pub fn default_schedule(doctor_id: &str) -> String {
    format!("{SCHEDULE}/{}/default", seg(doctor_id))
}

/// The gateway takes unavailability parameters in the query string, not the body.
#[must_use]
pub fn add_unavailability(doctor_id: &str, start: &str, end: &str, reason: Option<&str>) -> String {
    with_query(
        &format!("{SCHEDULE}/unavailability"),
        &[
            ("doctorId", Some(doctor_id.to_owned())),
            ("startDateTime", Some(start.to_owned())),
            ("endDateTime", Some(end.to_owned())),
            ("reason", reason.filter(|r| !r.trim().is_empty()).map(str::to_owned)),
        ],
    )
}

#[must_use]
pub fn doctor_unavailabilities(doctor_id: &str) -> String {
    format!("{SCHEDULE}/unavailability/{}", seg(doctor_id))
}

/// Same shape as [`doctor_unavailabilities`]; the gateway disambiguates by method.
#[must_use]
pub fn unavailability(id: &str) -> String {
    format!("{SCHEDULE}/unavailability/{}", seg(id))
}

// =============================================================================
// DIRECTORY
// =============================================================================

#[must_use]
pub fn medecins(page: u32, size: u32) -> String {
    paged("/medecins", page, size)
}

#[must_use]
pub fn patients(page: u32, size: u32) -> String {
    paged("/patients", page, size)
}

#[must_use]
pub fn patient_by_keycloak(keycloak_id: &str) -> String {
    format!("/patients/keycloak/{}", seg(keycloak_id))
}

// =============================================================================
// RECORDS
// =============================================================================

#[must_use]
pub fn dossier(patient_id: &str) -> String {
    format!("/records/patient/{}/dossier", seg(patient_id))
}

#[must_use]
pub fn medical_record(patient_id: &str) -> String {
    format!("/records/patient/{}", seg(patient_id))
}

// =============================================================================
// ADMIN & AUDIT
// =============================================================================

#[must_use]
pub fn admin_users(page: u32, size: u32) -> String {
    paged(ADMIN_USERS, page, size)
}

#[must_use]
pub fn admin_user(keycloak_id: &str) -> String {
    format!("{ADMIN_USERS}/{}", seg(keycloak_id))
}

#[must_use]
pub fn admin_user_roles(keycloak_id: &str) -> String {
    format!("{ADMIN_USERS}/{}/roles", seg(keycloak_id))
}

#[must_use]
pub fn audit_user_logs(user_id: &str) -> String {
    format!("{AUDIT_LOGS}/user/{}", seg(user_id))
}

#[must_use]
pub fn audit_service_logs(service: &str) -> String {
    format!("{AUDIT_LOGS}/service/{}", seg(service))
}

// =============================================================================
// IDENTITY PROVIDER
// =============================================================================

/// Password-grant proxy served by the portal server itself (outside `/api`).
pub const PORTAL_TOKEN: &str = "/auth/token";

/// OIDC scope requested by the password grant.
pub const TOKEN_SCOPE: &str = "openid profile email";

/// `{idp}/realms/{realm}/protocol/openid-connect/token`.
#[must_use]
pub fn idp_token_url(idp_base: &str, realm: &str) -> String {
    format!("{}/realms/{}/protocol/openid-connect/token", idp_base.trim_end_matches('/'), seg(realm))
}

/// Form fields for the resource-owner password grant.
#[must_use]
pub fn password_grant_form<'a>(client_id: &'a str, username: &'a str, password: &'a str) -> [(&'static str, &'a str); 5] {
    [
        ("client_id", client_id),
        ("grant_type", "password"),
        ("username", username),
        ("password", password),
        ("scope", TOKEN_SCOPE),
    ]
}

/// Identity-provider admin console.
#[must_use]
pub fn idp_console_url(idp_base: &str) -> String {
    format!("{}/admin/master/console/", idp_base.trim_end_matches('/'))
}
