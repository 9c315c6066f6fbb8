//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated page applies the same guard: wait for session restore, then
//! send anonymous users to `/login` and users of the wrong role to
//! `/forbidden`. Login, restore and logout keep storage and the
//! `AuthState` signal in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::guard::{AppRoute, LOGIN_PATH};
use portal::{Session, SessionError};

use crate::state::auth::AuthState;
use crate::util::storage;

/// Navigate away whenever the guard outcome for `route` is a redirect.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, route: AppRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = auth.get().outcome(&route).redirect() {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Rebuild the session from the stored token. Undecodable or expired
/// tokens are discarded.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let stored = storage::read_token();
    match Session::restore(stored.as_deref(), Utc::now()) {
        Some(session) => auth.set(AuthState::signed_in(&session)),
        None => {
            if stored.is_some() {
                storage::clear_session();
            }
            auth.set(AuthState::signed_out());
        }
    }
}

/// Accept a freshly issued token and return the session for redirecting.
///
/// # Errors
///
/// The token could not be decoded; nothing is stored in that case.
pub fn sign_in(auth: RwSignal<AuthState>, token: &str) -> Result<Session, SessionError> {
    let session = Session::from_token(token)?;
    storage::store_token(&session.token);
    auth.set(AuthState::signed_in(&session));
    Ok(session)
}

pub fn logout<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    storage::clear_session();
    auth.set(AuthState::signed_out());
    navigate(LOGIN_PATH, NavigateOptions::default());
}
