//! Server configuration parsed from environment variables.
//!
//! Every key has a development default, so an empty environment starts a
//! server pointed at a local gateway and identity provider.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";
pub const DEFAULT_IDP_URL: &str = "http://localhost:8180";
pub const DEFAULT_IDP_REALM: &str = "medinsight";
pub const DEFAULT_IDP_CLIENT_ID: &str = "medinsight-frontend";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Gateway origin; `/api/...` is appended per request.
    pub gateway_url: String,
    pub idp_url: String,
    pub idp_realm: String,
    pub idp_client_id: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GATEWAY_URL`: default `http://localhost:8080`
    /// - `IDP_URL`: default `http://localhost:8180`
    /// - `IDP_REALM`: default `medinsight`
    /// - `IDP_CLIENT_ID`: default `medinsight-frontend`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// A numeric variable that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// A numeric variable that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |key: &str, default: &str| {
            lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_owned())
        };
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_number(&lookup, "UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        Ok(Self {
            port,
            gateway_url: text("GATEWAY_URL", DEFAULT_GATEWAY_URL).trim_end_matches('/').to_owned(),
            idp_url: text("IDP_URL", DEFAULT_IDP_URL).trim_end_matches('/').to_owned(),
            idp_realm: text("IDP_REALM", DEFAULT_IDP_REALM),
            idp_client_id: text("IDP_CLIENT_ID", DEFAULT_IDP_CLIENT_ID),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
