//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds nothing mutable: just the optional HTTP client for the dayboard
//! backend, built once at startup.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, UpstreamTimeouts};

/// Failure to build the upstream HTTP client.
#[derive(Debug, thiserror::Error)]
#[error("HTTP client build failed: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// Connection to the dayboard backend.
pub struct Upstream {
    pub http: reqwest::Client,
    pub base_url: String,
}

impl Upstream {
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the TLS backend cannot initialise.
    pub fn new(base_url: String, timeouts: UpstreamTimeouts) -> Result<Self, ClientBuildError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn dayboard_url(&self) -> String {
        format!("{}/dayboard", self.base_url)
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub upstream: Option<Arc<Upstream>>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if an upstream is configured and its
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ClientBuildError> {
        let upstream = config
            .upstream_url
            .clone()
            .map(|url| Upstream::new(url, config.timeouts).map(Arc::new))
            .transpose()?;
        Ok(Self { upstream })
    }
}
