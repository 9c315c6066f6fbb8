use super::*;
use crate::types::AppointmentStatus;

#[test]
fn appointments_default_filter_has_paging_only() {
    assert_eq!(appointments(&AppointmentFilter::default()), "/appointments?page=0&size=10");
}

#[test]
fn appointments_filter_includes_set_fields_in_order() {
    let filter = AppointmentFilter {
        status: Some(AppointmentStatus::Confirmed),
        doctor_id: Some("doc-1".to_owned()),
        size: 100,
        ..AppointmentFilter::default()
    };
    assert_eq!(appointments(&filter), "/appointments?status=CONFIRMED&doctorId=doc-1&page=0&size=100");
}

#[test]
fn path_segments_are_percent_encoded() {
    assert_eq!(appointment("a b/c"), "/appointments/a%20b%2Fc");
    assert_eq!(audit_service_logs("auth service"), "/audit/logs/service/auth%20service");
}

#[test]
fn prescription_routes() {
    assert_eq!(appointment_prescriptions("a1"), "/appointments/a1/prescriptions");
    assert_eq!(patient_prescriptions("p1", 2, 20), "/prescriptions/patient/p1?page=2&size=20");
}

#[test]
fn available_slots_formats_date() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 8).expect("date");
    assert_eq!(available_slots("d1", date), "/appointments/slots/available?doctorId=d1&date=2026-01-08");
}

#[test]
fn schedule_routes() {
    assert_eq!(doctor_schedule("d1"), "/appointments/schedule/d1");
    assert_eq!(default_schedule("d1"), "/appointments/schedule/d1/default");
    assert_eq!(doctor_unavailabilities("d1"), "/appointments/schedule/unavailability/d1");
    assert_eq!(unavailability("u9"), "/appointments/schedule/unavailability/u9");
}

#[test]
fn add_unavailability_encodes_query_and_skips_blank_reason() {
    let with_reason = add_unavailability("d1", "2026-02-01T08:00:00", "2026-02-01T12:00:00", Some("Congrès médical"));
    assert_eq!(
        with_reason,
        "/appointments/schedule/unavailability?doctorId=d1&startDateTime=2026-02-01T08%3A00%3A00\
         &endDateTime=2026-02-01T12%3A00%3A00&reason=Congr%C3%A8s%20m%C3%A9dical"
    );
    let blank = add_unavailability("d1", "s", "e", Some("  "));
    assert_eq!(blank, "/appointments/schedule/unavailability?doctorId=d1&startDateTime=s&endDateTime=e");
}

#[test]
fn directory_and_record_routes() {
    assert_eq!(medecins(0, 50), "/medecins?page=0&size=50");
    assert_eq!(patients(1, 10), "/patients?page=1&size=10");
    assert_eq!(patient_by_keycloak("kc-1"), "/patients/keycloak/kc-1");
    assert_eq!(dossier("p1"), "/records/patient/p1/dossier");
    assert_eq!(medical_record("p1"), "/records/patient/p1");
}

#[test]
fn admin_routes() {
    assert_eq!(admin_users(0, 100), "/admin/users?page=0&size=100");
    assert_eq!(admin_user("kc-2"), "/admin/users/kc-2");
    assert_eq!(admin_user_roles("kc-2"), "/admin/users/kc-2/roles");
    assert_eq!(audit_user_logs("u1"), "/audit/logs/user/u1");
}

#[test]
fn idp_token_url_trims_trailing_slash() {
    assert_eq!(
        idp_token_url("http://localhost:8180/", "medinsight"),
        "http://localhost:8180/realms/medinsight/protocol/openid-connect/token"
    );
    assert_eq!(idp_console_url("http://kc:8180"), "http://kc:8180/admin/master/console/");
}

#[test]
fn password_grant_form_carries_openid_scope() {
    let form = password_grant_form("medinsight-frontend", "alice", "pw");
    assert_eq!(form[0], ("client_id", "medinsight-frontend"));
    assert_eq!(form[1], ("grant_type", "password"));
    assert_eq!(form[4], ("scope", "openid profile email"));
}

#[test]
fn format_date_time_has_no_offset() {
    let value = NaiveDate::from_ymd_opt(2026, 1, 18).and_then(|d| d.and_hms_opt(10, 30, 0)).expect("dt");
    assert_eq!(format_date_time(value), "2026-01-18T10:30:00");
}
