use super::*;

fn user(role: &str) -> SessionUser {
    SessionUser {
        id: "kc-1".to_owned(),
        keycloak_id: "kc-1".to_owned(),
        email: "u@example.com".to_owned(),
        name: "U".to_owned(),
        first_name: "U".to_owned(),
        last_name: String::new(),
        role: role.to_owned(),
    }
}

// =============================================================================
// ROUTES
// =============================================================================

#[test]
fn parse_and_path_agree_for_every_route() {
    let routes = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::RegisterPatient,
        AppRoute::RegisterMedecin,
        AppRoute::Forbidden,
        AppRoute::Profile,
        AppRoute::PatientDashboard,
        AppRoute::PatientAppointments,
        AppRoute::PatientDossier,
        AppRoute::PatientPrescriptions,
        AppRoute::MedecinDashboard,
        AppRoute::MedecinPatients,
        AppRoute::MedecinPatient("p1".to_owned()),
        AppRoute::MedecinAppointments,
        AppRoute::MedecinSchedule,
        AppRoute::MedecinAssistant,
        AppRoute::MedecinConsultation("a1".to_owned()),
        AppRoute::AdminDashboard,
        AppRoute::AdminUsers,
        AppRoute::AdminAudit,
        AppRoute::AdminReports,
        AppRoute::GestionnaireDashboard,
        AppRoute::GestionnairePatients,
        AppRoute::GestionnaireMedecins,
        AppRoute::SecurityDashboard,
        AppRoute::SecurityAuditLogs,
        AppRoute::MedecinProfile("d1".to_owned()),
    ];
    for route in routes {
        assert_eq!(AppRoute::parse(&route.path()), route, "{}", route.path());
    }
}

#[test]
fn parse_ignores_query_and_trailing_slash() {
    assert_eq!(AppRoute::parse("/patient/dashboard/"), AppRoute::PatientDashboard);
    assert_eq!(AppRoute::parse("/medecin/consultation/a9?tab=notes"), AppRoute::MedecinConsultation("a9".to_owned()));
    assert_eq!(AppRoute::parse(""), AppRoute::Home);
}

#[test]
fn parse_maps_unknown_paths_to_not_found() {
    assert_eq!(AppRoute::parse("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/patient/dashboard/extra"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/security/audit"), AppRoute::NotFound);
}

#[test]
fn allowed_roles_per_area() {
    assert_eq!(AppRoute::PatientDossier.allowed_roles(), Some(&[Role::Patient][..]));
    assert_eq!(AppRoute::MedecinSchedule.allowed_roles(), Some(&[Role::Medecin][..]));
    assert_eq!(AppRoute::AdminUsers.allowed_roles(), Some(&[Role::Admin, Role::Gestionnaire][..]));
    assert_eq!(AppRoute::SecurityAuditLogs.allowed_roles(), Some(&[Role::ResponsableSecurite, Role::Admin][..]));
    assert_eq!(AppRoute::Profile.allowed_roles(), None);
    assert!(AppRoute::Login.is_public());
    assert!(!AppRoute::Profile.is_public());
}

// =============================================================================
// evaluate
// =============================================================================

#[test]
fn loading_wins_over_everything() {
    assert_eq!(evaluate(&AppRoute::Home, true, None), GuardOutcome::Loading);
    assert_eq!(evaluate(&AppRoute::AdminUsers, true, Some(&user("ROLE_ADMIN"))), GuardOutcome::Loading);
}

#[test]
fn public_routes_allow_anonymous() {
    for route in [AppRoute::Home, AppRoute::Login, AppRoute::RegisterMedecin, AppRoute::Forbidden, AppRoute::NotFound] {
        assert_eq!(evaluate(&route, false, None), GuardOutcome::Allow);
    }
}

#[test]
fn protected_routes_redirect_anonymous_to_login() {
    let outcome = evaluate(&AppRoute::PatientDashboard, false, None);
    assert_eq!(outcome, GuardOutcome::RedirectLogin);
    assert_eq!(outcome.redirect(), Some("/login"));
    assert_eq!(evaluate(&AppRoute::Profile, false, None), GuardOutcome::RedirectLogin);
}

#[test]
fn wrong_role_is_forbidden() {
    let outcome = evaluate(&AppRoute::MedecinDashboard, false, Some(&user("ROLE_PATIENT")));
    assert_eq!(outcome, GuardOutcome::Forbidden);
    assert_eq!(outcome.redirect(), Some("/forbidden"));
    assert_eq!(evaluate(&AppRoute::PatientDossier, false, Some(&user("ROLE_ADMIN"))), GuardOutcome::Forbidden);
}

#[test]
fn unknown_role_is_treated_as_patient() {
    let stranger = user("ROLE_UMA_AUTHORIZATION");
    assert_eq!(evaluate(&AppRoute::PatientDashboard, false, Some(&stranger)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::Profile, false, Some(&stranger)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::MedecinDashboard, false, Some(&stranger)), GuardOutcome::Forbidden);
}

#[test]
fn keycloak_default_roles_reach_patient_pages() {
    let roles: Vec<String> = ["default-roles-medinsight", "offline_access", "uma_authorization", "PATIENT"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    let patient = user(&crate::session::primary_role(&roles));
    assert_eq!(patient.landing_route(), "/patient/dashboard");
    assert_eq!(evaluate(&AppRoute::PatientDashboard, false, Some(&patient)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::PatientDossier, false, Some(&patient)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::AdminUsers, false, Some(&patient)), GuardOutcome::Forbidden);
}

#[test]
fn shared_pages_admit_listed_roles() {
    let admin = user("ROLE_ADMIN");
    let gestionnaire = user("ROLE_GESTIONNAIRE");
    let medecin = user("ROLE_MEDECIN");
    assert_eq!(evaluate(&AppRoute::AdminDashboard, false, Some(&gestionnaire)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::GestionnairePatients, false, Some(&admin)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::SecurityDashboard, false, Some(&admin)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::MedecinProfile("d".to_owned()), false, Some(&medecin)), GuardOutcome::Allow);
    assert_eq!(evaluate(&AppRoute::MedecinProfile("d".to_owned()), false, Some(&user("ROLE_PATIENT"))), GuardOutcome::Forbidden);
    assert_eq!(evaluate(&AppRoute::AdminUsers, false, Some(&medecin)), GuardOutcome::Forbidden);
}
