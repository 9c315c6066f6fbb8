use super::*;

fn log(id: &str, service: &str, action: &str, status: &str, ip: Option<&str>) -> AuditLog {
    AuditLog {
        id: id.to_owned(),
        timestamp: "2026-01-11T15:25:30".to_owned(),
        service_name: service.to_owned(),
        user_id: format!("kc-{id}"),
        user_email: Some(format!("user{id}@example.com")),
        user_role: None,
        action: action.to_owned(),
        resource_id: None,
        status: status.to_owned(),
        details: None,
        ip_address: ip.map(str::to_owned),
    }
}

fn sample() -> Vec<AuditLog> {
    vec![
        log("1", "auth-service", "LOGIN_SUCCESS", "SUCCESS", Some("197.0.0.1")),
        log("2", "appointment-service", "APPOINTMENT_CREATED", "SUCCESS", Some("197.0.0.2")),
        log("3", "auth-service", "LOGIN_FAILED", "FAILURE", Some("45.12.34.56")),
    ]
}

fn ids(found: &[&AuditLog]) -> Vec<String> {
    found.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn search_matches_ip_email_and_action() {
    let logs = sample();
    assert_eq!(ids(&search_logs(&logs, "45.12", ALL, ALL)), vec!["3"]);
    assert_eq!(ids(&search_logs(&logs, "USER2@", ALL, ALL)), vec!["2"]);
    assert_eq!(ids(&search_logs(&logs, "login", ALL, ALL)), vec!["1", "3"]);
}

#[test]
fn service_and_result_filters_combine() {
    let logs = sample();
    assert_eq!(ids(&search_logs(&logs, "", "auth-service", FAILED)), vec!["3"]);
    assert_eq!(ids(&search_logs(&logs, "", "auth-service", "SUCCESS")), vec!["1"]);
    assert_eq!(search_logs(&logs, "", ALL, ALL).len(), 3);
}
