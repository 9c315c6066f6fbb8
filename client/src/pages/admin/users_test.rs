use super::*;

#[test]
fn role_key_strips_prefix_and_defaults_to_patient() {
    assert_eq!(role_key(Some("ROLE_MEDECIN")), "MEDECIN");
    assert_eq!(role_key(Some("admin")), "ADMIN");
    assert_eq!(role_key(Some("")), "PATIENT");
    assert_eq!(role_key(None), "PATIENT");
}

#[test]
fn badge_class_per_role() {
    assert_eq!(role_badge_class("RESPONSABLE_SECURITE"), "badge badge--security");
    assert_eq!(role_badge_class("MEDECIN"), "badge badge--medecin");
    assert_eq!(role_badge_class("UNKNOWN"), "badge");
}

#[test]
fn page_label_is_one_based_with_at_least_one_page() {
    assert_eq!(page_label(0, 3), "Page 1 sur 3");
    assert_eq!(page_label(2, 3), "Page 3 sur 3");
    assert_eq!(page_label(0, 0), "Page 1 sur 1");
}

#[test]
fn blank_request_carries_form_defaults() {
    let req = blank_request();
    assert_eq!(req.role, "PATIENT");
    assert_eq!(req.country.as_deref(), Some("Tunisie"));
    assert_eq!(req.gender.as_deref(), Some("MALE"));
    assert_eq!(req.consultation_fee, Some(50.0));
    assert_eq!(req.years_of_experience, Some(0));
    assert!(req.email.is_empty());
}

#[test]
fn blank_patient_request_prunes_doctor_defaults() {
    let pruned = prune_admin_user(blank_request());
    assert_eq!(pruned.consultation_fee, None);
    assert_eq!(pruned.years_of_experience, None);
    assert_eq!(pruned.gender.as_deref(), Some("MALE"));
}
