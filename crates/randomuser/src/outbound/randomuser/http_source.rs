//! Reqwest-backed randomuser.me source adapter.
//!
//! This adapter owns transport details only: query construction, timeout and
//! HTTP status mapping, and handing the body to [`ResultSet::from_slice`].

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ResultSet;
use crate::domain::ports::{FetchError, FetchRequest, UserSource};

/// Base endpoint of the versioned randomuser.me API.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/1.3/";
const DEFAULT_USER_AGENT: &str = concat!("randomuser-client/", env!("CARGO_PKG_VERSION"));

/// Errors raised while constructing [`RandomUserHttpSource`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured endpoint is not an absolute URL.
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// Endpoint text as configured.
        endpoint: String,
        /// URL parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// Underlying reqwest error.
        #[from]
        source: reqwest::Error,
    },
}

/// randomuser.me source that performs one blocking GET per fetch.
#[derive(Debug, Clone)]
pub struct RandomUserHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl RandomUserHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ClientBuildError> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter that sends `user_agent` with every request.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, ClientBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }

    /// Parse `endpoint` and build an adapter for it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::InvalidEndpoint`] when `endpoint` does not
    /// parse, or [`ClientBuildError::Client`] when the client cannot be built.
    pub fn from_endpoint_str(
        endpoint: &str,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Self, ClientBuildError> {
        let parsed = Url::parse(endpoint).map_err(|source| ClientBuildError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            source,
        })?;
        Self::with_user_agent(parsed, timeout, user_agent.unwrap_or(DEFAULT_USER_AGENT))
    }

    /// Base endpoint that query parameters are appended to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl UserSource for RandomUserHttpSource {
    fn fetch(&self, request: &FetchRequest) -> Result<ResultSet, FetchError> {
        let url = build_request_url(&self.endpoint, request);
        debug!(%url, "requesting randomuser results");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "randomuser returned non-success status");
            let body = response.bytes().map_or_else(
                |error| {
                    debug!(%error, "failed to read non-success response body");
                    Vec::new()
                },
                |bytes| bytes.to_vec(),
            );
            return Err(map_status_error(status, &body));
        }

        let body = response.bytes().map_err(map_transport_error)?;
        let users = ResultSet::from_slice(body.as_ref())?;
        debug!(
            requested = request.results,
            returned = users.len(),
            transfer_bytes = body.len(),
            "decoded randomuser results"
        );
        Ok(users)
    }
}

fn build_request_url(endpoint: &Url, request: &FetchRequest) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("nat", &request.nationality)
        .append_pair("results", &request.results.to_string())
        .append_key_only("noinfo");
    url
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::transport(format!("request timed out: {error}"))
    } else {
        FetchError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> FetchError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };
    FetchError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
