use super::*;

fn user(role: &str) -> SessionUser {
    SessionUser {
        id: "kc-1".to_owned(),
        keycloak_id: "kc-1".to_owned(),
        email: "a@b.fr".to_owned(),
        name: "Alice Martin".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Martin".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn restoring_is_loading_without_user() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.outcome(&AppRoute::PatientDashboard), GuardOutcome::Loading);
}

#[test]
fn signed_out_redirects_protected_routes() {
    let state = AuthState::signed_out();
    assert_eq!(state.outcome(&AppRoute::AdminUsers), GuardOutcome::RedirectLogin);
    assert_eq!(state.outcome(&AppRoute::Login), GuardOutcome::Allow);
    assert_eq!(state.keycloak_id(), None);
}

#[test]
fn signed_in_user_is_checked_against_route_roles() {
    let state = AuthState { user: Some(user("ROLE_MEDECIN")), loading: false };
    assert_eq!(state.role(), Some(Role::Medecin));
    assert_eq!(state.keycloak_id().as_deref(), Some("kc-1"));
    assert_eq!(state.outcome(&AppRoute::MedecinSchedule), GuardOutcome::Allow);
    assert_eq!(state.outcome(&AppRoute::PatientDossier), GuardOutcome::Forbidden);
}
