//! Client configuration loaded via OrthoConfig.
//!
//! The timeout carries an OrthoConfig default; the remaining values are
//! optional and accessors fall back to the public randomuser.me endpoint and
//! the default request of ten Spanish identities.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ports::{DEFAULT_NATIONALITY, DEFAULT_RESULTS, FetchRequest};
use crate::outbound::randomuser::{ClientBuildError, DEFAULT_ENDPOINT, RandomUserHttpSource};

/// Configuration values for the randomuser.me client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RANDOMUSER")]
pub struct ClientSettings {
    /// Base endpoint override.
    pub endpoint: Option<String>,
    /// Nationality filter override.
    pub nationality: Option<String>,
    /// Requested record count override.
    pub results: Option<u32>,
    /// Request timeout in seconds.
    #[ortho_config(default = 30)]
    pub timeout_seconds: u64,
    /// User-agent override.
    pub user_agent: Option<String>,
}

impl ClientSettings {
    /// Return the configured endpoint, falling back to the public API.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Return the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Build the fetch request described by these settings.
    #[must_use]
    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest::new(
            self.nationality.as_deref().unwrap_or(DEFAULT_NATIONALITY),
            self.results.unwrap_or(DEFAULT_RESULTS),
        )
    }

    /// Build the HTTP adapter described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the endpoint does not parse or the
    /// HTTP client cannot be built.
    pub fn build_source(&self) -> Result<RandomUserHttpSource, ClientBuildError> {
        RandomUserHttpSource::from_endpoint_str(
            self.endpoint(),
            self.timeout(),
            self.user_agent.as_deref(),
        )
    }
}
