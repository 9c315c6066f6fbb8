use super::*;

fn doctor(id: &str, keycloak_id: &str, first: &str, last: &str) -> UserResponse {
    UserResponse {
        id: id.to_owned(),
        keycloak_id: keycloak_id.to_owned(),
        email: format!("{first}@example.com"),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        phone_number: None,
        address_line: None,
        city: None,
        country: None,
        enabled: true,
        created_at: None,
        updated_at: None,
        role: Some("ROLE_MEDECIN".to_owned()),
        patient_profile: None,
        medecin_profile: None,
    }
}

#[test]
fn prescriber_name_matches_keycloak_or_local_id() {
    let doctors = vec![doctor("1", "kc-1", "Fatma", "Gharbi"), doctor("2", "kc-2", "Karim", "Trabelsi")];
    assert_eq!(prescriber_name(&doctors, Some("kc-2")), "Karim Trabelsi");
    assert_eq!(prescriber_name(&doctors, Some("1")), "Fatma Gharbi");
}

#[test]
fn prescriber_name_falls_back_to_platform() {
    assert_eq!(prescriber_name(&[], Some("kc-9")), "MedInsight");
    assert_eq!(prescriber_name(&[], None), "MedInsight");
}
