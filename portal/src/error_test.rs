use super::*;

#[test]
fn message_from_body_prefers_message_field() {
    let body = r#"{"message":"Créneau déjà réservé","error":"Conflict"}"#;
    assert_eq!(message_from_body(409, body), "Créneau déjà réservé");
}

#[test]
fn message_from_body_falls_back_to_error_field() {
    assert_eq!(message_from_body(400, r#"{"error":"Bad Request"}"#), "Bad Request");
}

#[test]
fn message_from_body_ignores_blank_message() {
    assert_eq!(message_from_body(400, r#"{"message":"  ","error":"Bad"}"#), "Bad");
}

#[test]
fn message_from_body_defaults_on_non_json() {
    assert_eq!(message_from_body(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(message_from_body(503, ""), "request failed: 503");
}

#[test]
fn from_status_maps_401_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, "{}"), ApiError::Unauthorized);
    assert_eq!(ApiError::Unauthorized.status(), Some(401));
}

#[test]
fn from_status_keeps_code_and_message() {
    let err = ApiError::from_status(404, r#"{"message":"Patient introuvable"}"#);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Patient introuvable");
    assert_eq!(err.to_string(), "Patient introuvable");
}

#[test]
fn network_errors_have_generic_user_message() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.user_message(), "Impossible de joindre le serveur");
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn only_404_counts_as_not_found() {
    assert!(ApiError::from_status(404, r#"{"message":"Dossier introuvable"}"#).is_not_found());
    assert!(!ApiError::from_status(500, "").is_not_found());
    assert!(!ApiError::Network("refused".to_owned()).is_not_found());
}
