//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! proxy holds no mutable state: config plus one pooled HTTP client shared
//! by every request.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Upstream client for the gateway and the identity provider.
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// The HTTP client could not be constructed.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
