use super::*;

fn log(status: &str, email: Option<&str>) -> AuditLog {
    AuditLog {
        id: "1".to_owned(),
        timestamp: "2026-01-11T14:25:30".to_owned(),
        service_name: "auth-service".to_owned(),
        user_id: "kc-42".to_owned(),
        user_email: email.map(str::to_owned),
        user_role: None,
        action: "LOGIN_SUCCESS".to_owned(),
        resource_id: None,
        status: status.to_owned(),
        details: None,
        ip_address: None,
    }
}

#[test]
fn status_class_covers_both_failure_spellings() {
    assert_eq!(audit_status_class("SUCCESS"), "badge badge--success");
    assert_eq!(audit_status_class("FAILURE"), "badge badge--failure");
    assert_eq!(audit_status_class("failed"), "badge badge--failure");
    assert_eq!(audit_status_class("PENDING"), "badge badge--info");
}

#[test]
fn actor_prefers_email() {
    assert_eq!(actor(&log("SUCCESS", Some("ahmed@example.com"))), "ahmed@example.com");
    assert_eq!(actor(&log("SUCCESS", Some(""))), "kc-42");
    assert_eq!(actor(&log("SUCCESS", None)), "kc-42");
}
