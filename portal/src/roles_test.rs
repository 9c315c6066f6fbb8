use super::*;

#[test]
fn parse_accepts_claim_and_bare_forms() {
    assert_eq!(Role::parse("ROLE_MEDECIN"), Some(Role::Medecin));
    assert_eq!(Role::parse("medecin"), Some(Role::Medecin));
    assert_eq!(Role::parse("role_responsable_securite"), Some(Role::ResponsableSecurite));
    assert_eq!(Role::parse(" Admin "), Some(Role::Admin));
}

#[test]
fn parse_rejects_unknown_roles() {
    assert_eq!(Role::parse("ROLE_NURSE"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("offline_access"), None);
}

#[test]
fn claim_and_backend_name_round_trip() {
    for role in Role::ALL {
        assert_eq!(Role::parse(&role.claim()), Some(role));
        assert_eq!(Role::parse(role.backend_name()), Some(role));
    }
    assert_eq!(Role::Gestionnaire.claim(), "ROLE_GESTIONNAIRE");
    assert_eq!(Role::Admin.to_string(), "ADMIN");
}

#[test]
fn landing_routes_match_dashboard_map() {
    assert_eq!(Role::Patient.landing_route(), "/patient/dashboard");
    assert_eq!(Role::Medecin.landing_route(), "/medecin/dashboard");
    assert_eq!(Role::Gestionnaire.landing_route(), "/admin/dashboard");
    assert_eq!(Role::Admin.landing_route(), "/admin/dashboard");
    assert_eq!(Role::ResponsableSecurite.landing_route(), "/security/dashboard");
}

#[test]
fn unknown_claim_lands_on_patient_dashboard() {
    assert_eq!(landing_route_for("ROLE_UNKNOWN"), DEFAULT_LANDING);
    assert_eq!(landing_route_for("ROLE_MEDECIN"), "/medecin/dashboard");
}

#[test]
fn admin_and_gestionnaire_share_admin_area() {
    assert_eq!(Role::Admin.area(), Area::Admin);
    assert_eq!(Role::Gestionnaire.area(), Area::Admin);
    assert_eq!(Role::ResponsableSecurite.area(), Area::Security);
    assert_eq!(Role::Medecin.area(), Area::Medecin);
    assert_eq!(Role::Patient.area(), Area::Patient);
}

#[test]
fn normalize_strips_prefix_once() {
    assert_eq!(normalize("role_admin"), "ADMIN");
    assert_eq!(normalize("ROLE_ROLE_X"), "ROLE_X");
    assert_eq!(normalize("patient"), "PATIENT");
}
