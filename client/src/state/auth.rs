//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the app root as `RwSignal<AuthState>`. The route guard reads
//! it to decide between rendering, redirecting to `/login`, or `/forbidden`.
//! It starts in the loading state and settles once the stored token has
//! been checked on mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use portal::guard::{self, AppRoute, GuardOutcome};
use portal::{Role, Session, SessionUser};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the stored token has been read.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(session: &Session) -> Self {
        Self { user: Some(session.user.clone()), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(SessionUser::role)
    }

    /// Keycloak subject of the signed-in user, used as patient/doctor id.
    pub fn keycloak_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.keycloak_id.clone())
    }

    pub fn outcome(&self, route: &AppRoute) -> GuardOutcome {
        guard::evaluate(route, self.loading, self.user.as_ref())
    }
}
