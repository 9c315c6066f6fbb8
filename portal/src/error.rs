//! Gateway call errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single gateway request.
///
/// There is no retry policy; callers surface [`ApiError::user_message`] as a
/// toast or inline message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("not available on this target")]
    NotAvailable,
}

impl ApiError {
    /// Build an error from a non-success response, passing through the
    /// backend's `message` field when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Status { status, message: message_from_body(status, body) }
    }

    /// Message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Impossible de joindre le serveur".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "Réponse inattendue du serveur".to_owned(),
            Self::Unauthorized => "Session expirée, veuillez vous reconnecter".to_owned(),
            Self::NotAvailable => "Action indisponible".to_owned(),
        }
    }

    /// The resource does not exist; pages show their empty state instead.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Extract `message` (or `error`) from a JSON error body, else
/// `request failed: {status}`.
#[must_use]
pub fn message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].into_iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(serde_json::Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| format!("request failed: {status}"))
}
