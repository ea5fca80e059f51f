//! Driven port for fetching generated identities.
//!
//! The domain owns the request shape and error taxonomy so callers can swap
//! the HTTP adapter for a fixture or mock without touching accessor code.

use super::define_port_error;
use crate::domain::ResultSet;

/// Nationality used when the caller does not choose one.
pub const DEFAULT_NATIONALITY: &str = "es";
/// Result count used when the caller does not choose one.
pub const DEFAULT_RESULTS: u32 = 10;

/// Query parameters for one fetch.
///
/// Both values are forwarded verbatim; the upstream service decides whether
/// they are acceptable and how many records to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Nationality filter sent as `nat`, for example `es`.
    pub nationality: String,
    /// Requested record count sent as `results`.
    pub results: u32,
}

impl FetchRequest {
    /// Build a request for `results` records of `nationality`.
    pub fn new(nationality: impl Into<String>, results: u32) -> Self {
        Self {
            nationality: nationality.into(),
            results,
        }
    }
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self::new(DEFAULT_NATIONALITY, DEFAULT_RESULTS)
    }
}

define_port_error! {
    /// Errors surfaced while fetching identities.
    pub enum FetchError {
        /// No response was received (connectivity, DNS, or timeout).
        Transport {
            /// Underlying transport failure.
            message: String,
        } => "randomuser transport failed: {message}",
        /// The service answered with a non-success status.
        Status {
            /// Observed HTTP status code.
            status: u16,
            /// Status line and a compact preview of the body.
            message: String,
        } => "randomuser returned {message}",
        /// The body could not be decoded into a result set.
        Decode {
            /// Parser diagnostic.
            message: String,
        } => "randomuser response decode failed: {message}",
    }
}

impl FetchError {
    /// Whether the failure happened at the transport level, including
    /// non-success statuses.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }

    /// HTTP status carried by [`Self::Status`].
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for fetching one batch of generated identities.
pub trait UserSource {
    /// Fetch records matching `request`.
    ///
    /// Performs exactly one upstream call with no retry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the call fails, the status is not a
    /// success, or the body does not decode.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomuser::{FetchRequest, FixtureUserSource, ResultSet, UserSource};
    ///
    /// let source = FixtureUserSource::new(ResultSet::default());
    /// let users = source.fetch(&FetchRequest::new("fr", 5))?;
    /// assert!(users.is_empty());
    /// # Ok::<(), randomuser::FetchError>(())
    /// ```
    fn fetch(&self, request: &FetchRequest) -> Result<ResultSet, FetchError>;

    /// Fetch with [`FetchRequest::default`]: ten Spanish identities.
    ///
    /// # Errors
    ///
    /// See [`UserSource::fetch`].
    fn fetch_default(&self) -> Result<ResultSet, FetchError> {
        self.fetch(&FetchRequest::default())
    }
}

/// Fixture implementation returning a preset result set.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserSource {
    users: ResultSet,
}

impl FixtureUserSource {
    /// Serve `users` for every request.
    #[must_use]
    pub const fn new(users: ResultSet) -> Self {
        Self { users }
    }
}

impl UserSource for FixtureUserSource {
    fn fetch(&self, _request: &FetchRequest) -> Result<ResultSet, FetchError> {
        Ok(self.users.clone())
    }
}
