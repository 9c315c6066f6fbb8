//! Session derivation from an identity-provider access token.
//!
//! DESIGN
//! ======
//! The browser never verifies the token signature; the gateway does that on
//! every call. Decoding here only reads the payload to learn who the user is
//! and where to send them. A token that cannot be read, or whose `exp` has
//! passed, yields no session and the stored copy is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::roles::{self, Role};

/// `localStorage` key holding the raw access token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Roles that win over any others the token carries, in priority order.
const PRIORITY_ROLES: [&str; 4] = ["ADMIN", "MEDECIN", "GESTIONNAIRE", "RESPONSABLE_SECURITE"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Json(String),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The subset of OIDC claims the portal reads.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub preferred_username: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub realm_access: Option<RealmAccess>,
    /// Expiry, seconds since the epoch.
    pub exp: Option<i64>,
}

impl Claims {
    #[must_use]
    pub fn roles(&self) -> &[String] {
        self.realm_access.as_ref().map(|access| access.roles.as_slice()).unwrap_or_default()
    }
}

/// Decode the payload segment of `token` without verifying it.
///
/// # Errors
///
/// Returns [`SessionError`] when the token does not have three segments,
/// the payload is not base64url, or it is not a claims object.
pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(SessionError::Malformed);
    };
    if payload.is_empty() {
        return Err(SessionError::Malformed);
    }
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized).map_err(|e| SessionError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::Json(e.to_string()))
}

/// Pick the role claim that drives routing.
///
/// Roles are normalized (uppercase, `ROLE_` stripped). The highest priority
/// role present wins regardless of token order; otherwise the first role;
/// otherwise `PATIENT`.
#[must_use]
pub fn primary_role(raw_roles: &[String]) -> String {
    let normalized: Vec<String> = raw_roles.iter().map(|r| roles::normalize(r)).collect();
    let key = PRIORITY_ROLES
        .into_iter()
        .find(|key| normalized.iter().any(|r| r == key))
        .or_else(|| normalized.first().map(String::as_str))
        .unwrap_or("PATIENT");
    format!("ROLE_{key}")
}

/// The signed-in user as derived from token claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub keycloak_id: String,
    pub email: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    /// Role claim, e.g. `ROLE_MEDECIN`.
    pub role: String,
}

impl SessionUser {
    #[must_use]
    pub fn from_claims(claims: &Claims) -> Self {
        let first_name = claims.given_name.clone().unwrap_or_default();
        let last_name = claims.family_name.clone().unwrap_or_default();
        Self {
            id: claims.sub.clone(),
            keycloak_id: claims.sub.clone(),
            email: claims.email.clone().or_else(|| claims.preferred_username.clone()).unwrap_or_default(),
            name: format!("{first_name} {last_name}").trim().to_owned(),
            first_name,
            last_name,
            role: primary_role(claims.roles()),
        }
    }

    /// Parsed role. Claims the portal does not know (Keycloak defaults such
    /// as `default-roles-*` or `offline_access`) act as `Patient`, the same
    /// role the landing route and sidebar assume.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::parse(&self.role).unwrap_or(Role::Patient)
    }

    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        roles::landing_route_for(&self.role)
    }

    /// Name for greetings, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.email } else { &self.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// # Errors
    ///
    /// Propagates [`decode_claims`] failures.
    pub fn from_token(token: &str) -> Result<Self, SessionError> {
        let claims = decode_claims(token)?;
        Ok(Self {
            token: token.trim().to_owned(),
            user: SessionUser::from_claims(&claims),
            expires_at: claims.exp.and_then(|exp| DateTime::from_timestamp(exp, 0)),
        })
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        self.user.landing_route()
    }

    /// Rebuild a session from a stored token. `None` means the caller should
    /// clear storage and treat the user as anonymous.
    #[must_use]
    pub fn restore(stored: Option<&str>, now: DateTime<Utc>) -> Option<Self> {
        let token = stored.map(str::trim).filter(|t| !t.is_empty())?;
        Self::from_token(token).ok().filter(|session| !session.is_expired(now))
    }
}
