//! Decoded fetch results and index-based accessors.
//!
//! A [`ResultSet`] is built in one pass from a response body and never
//! mutated afterwards. Accessors address records by zero-based position and
//! report out-of-range positions as [`AccessError`] instead of panicking.

use std::collections::BTreeMap;
use std::slice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::picture_variant::PictureVariant;
use super::ports::FetchError;
use super::record::UserRecord;

/// Errors raised by index-based accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The requested position lies outside the result set.
    #[error("record index {index} out of range for {len} records")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of records available.
        len: usize,
    },
}

/// Flattened projection of one record.
///
/// Serializes to an object with exactly the keys `name`, `gender`,
/// `picture`, and `age`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// Title, first, and last name joined by spaces.
    pub name: String,
    /// Gender label as supplied upstream.
    pub gender: String,
    /// Medium portrait URL.
    pub picture: String,
    /// Date-of-birth age rendered as a decimal string.
    pub age: String,
}

impl UserSummary {
    /// Convert the summary into a string map keyed by field name.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("name".to_owned(), self.name),
            ("gender".to_owned(), self.gender),
            ("picture".to_owned(), self.picture),
            ("age".to_owned(), self.age),
        ])
    }
}

/// Ordered records returned by a single fetch, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    results: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct RawResultSet {
    results: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDto {
    error: String,
}

impl ResultSet {
    /// Decode a response body shaped as `{"results": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decode`] when the body is not valid JSON, lacks
    /// the `results` array, or any record misses a field or carries a field
    /// of the wrong type. No partial result is produced.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice::<RawResultSet>(body)
            .map(|raw| Self {
                results: raw.results,
            })
            .map_err(|error| decode_error(body, &error))
    }

    /// Decode a response body held as text.
    ///
    /// # Errors
    ///
    /// See [`Self::from_slice`].
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Self::from_slice(body.as_bytes())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the upstream returned no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Borrow the record at `id`, if present.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&UserRecord> {
        self.results.get(id)
    }

    /// Borrow the record at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfRange`] when `id >= self.len()`.
    pub fn record(&self, id: usize) -> Result<&UserRecord, AccessError> {
        self.get(id).ok_or(AccessError::IndexOutOfRange {
            index: id,
            len: self.len(),
        })
    }

    /// Borrow all records in upstream order.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.results
    }

    /// Iterate over records in upstream order.
    pub fn iter(&self) -> slice::Iter<'_, UserRecord> {
        self.results.iter()
    }

    /// Title, first, and last name of record `id`, joined by single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfRange`] when `id` is out of range.
    pub fn full_name(&self, id: usize) -> Result<String, AccessError> {
        self.record(id).map(UserRecord::full_name)
    }

    /// Portrait URL of record `id` for `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfRange`] when `id` is out of range.
    pub fn picture(&self, id: usize, variant: PictureVariant) -> Result<&str, AccessError> {
        self.record(id).map(|record| record.picture(variant))
    }

    /// Gender label of record `id`, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfRange`] when `id` is out of range.
    pub fn gender(&self, id: usize) -> Result<&str, AccessError> {
        self.record(id).map(UserRecord::gender)
    }

    /// Date-of-birth age of record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfRange`] when `id` is out of range.
    pub fn age(&self, id: usize) -> Result<u32, AccessError> {
        self.record(id).map(UserRecord::age)
    }

    /// Summary of record `id` with the medium portrait and a string age.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfRange`] when `id` is out of range.
    pub fn summary(&self, id: usize) -> Result<UserSummary, AccessError> {
        self.record(id).map(UserRecord::summary)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a UserRecord;
    type IntoIter = slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn decode_error(body: &[u8], error: &serde_json::Error) -> FetchError {
    match serde_json::from_slice::<UpstreamErrorDto>(body) {
        Ok(upstream) => FetchError::decode(format!(
            "upstream reported error '{}': {error}",
            upstream.error
        )),
        Err(_) => FetchError::decode(format!("invalid randomuser JSON payload: {error}")),
    }
}
