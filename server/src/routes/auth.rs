//! Token exchange: the login form posts JSON here and the server performs
//! the password grant against the identity provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::response::{Json, Response};
use portal::endpoints::{idp_token_url, password_grant_form};
use serde::Deserialize;

use super::proxy::{bad_gateway, relay};
use crate::state::AppState;

pub(crate) const IDP_UNAVAILABLE: &str = "Le service d'authentification est indisponible.";

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/token`. The provider's JSON and status are returned as-is,
/// so a rejected password surfaces the provider's own error body.
pub async fn token(State(state): State<AppState>, Json(body): Json<TokenRequest>) -> Response {
    let config = &state.config;
    let url = idp_token_url(&config.idp_url, &config.idp_realm);
    let form = password_grant_form(&config.idp_client_id, &body.username, &body.password);

    match state.http.post(&url).form(&form).send().await {
        Ok(upstream) => {
            if !upstream.status().is_success() {
                tracing::info!(username = %body.username, status = upstream.status().as_u16(), "token request rejected");
            }
            relay(upstream).await
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "identity provider unreachable");
            bad_gateway(IDP_UNAVAILABLE)
        }
    }
}
