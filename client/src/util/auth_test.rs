use super::*;

// {"sub":"kc-7","email":"sana@medinsight.tn","given_name":"Sana","family_name":"Trabelsi",
//  "realm_access":{"roles":["offline_access","MEDECIN"]}}
const MEDECIN_TOKEN: &str = "eyJhbGciOiJub25lIn0.eyJzdWIiOiJrYy03IiwiZW1haWwiOiJzYW5hQG1lZGluc2lnaHQudG4iLCJnaXZlbl9uYW1lIjoiU2FuYSIsImZhbWlseV9uYW1lIjoiVHJhYmVsc2kiLCJyZWFsbV9hY2Nlc3MiOnsicm9sZXMiOlsib2ZmbGluZV9hY2Nlc3MiLCJNRURFQ0lOIl19fQ.sig";

fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.set();
    test();
}

#[test]
fn sign_in_sets_user_from_token_claims() {
    with_owner(|| {
        let auth = RwSignal::new(AuthState::restoring());
        let session = sign_in(auth, MEDECIN_TOKEN).expect("token decodes");
        assert_eq!(session.user.role, "ROLE_MEDECIN");
        assert_eq!(session.landing_route(), AppRoute::MedecinDashboard.path());

        let state = auth.get_untracked();
        assert!(!state.loading);
        assert_eq!(state.keycloak_id().as_deref(), Some("kc-7"));
        assert_eq!(state.user.map(|u| u.name), Some("Sana Trabelsi".to_owned()));
    });
}

#[test]
fn sign_in_rejects_malformed_token_and_keeps_state() {
    with_owner(|| {
        let auth = RwSignal::new(AuthState::signed_out());
        assert!(sign_in(auth, "not-a-token").is_err());
        assert_eq!(auth.get_untracked(), AuthState::signed_out());
    });
}

#[test]
fn restore_without_stored_token_signs_out() {
    with_owner(|| {
        let auth = RwSignal::new(AuthState::restoring());
        restore_session(auth);
        assert_eq!(auth.get_untracked(), AuthState::signed_out());
    });
}
