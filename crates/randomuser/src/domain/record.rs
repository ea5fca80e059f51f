//! Generated identity record types.
//!
//! Each nested object in the upstream payload gets a named type so the shape
//! can be reused by adapters and tests without anonymous structs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::picture_variant::PictureVariant;
use super::result_set::UserSummary;

/// One generated fake identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Gender label as supplied upstream (for example `female`).
    pub gender: String,
    /// Title, first, and last name.
    pub name: Name,
    /// Postal address, coordinates, and timezone.
    pub location: Location,
    /// Contact e-mail address.
    pub email: String,
    /// Generated credentials.
    pub login: Login,
    /// Date of birth and the age derived from it upstream.
    pub dob: DatedAge,
    /// Registration date and the account age derived from it upstream.
    pub registered: DatedAge,
    /// Landline phone number.
    pub phone: String,
    /// Mobile phone number.
    pub cell: String,
    /// Nationality-specific identity document.
    #[serde(rename = "id")]
    pub national_id: NationalId,
    /// Externally hosted portrait URLs.
    pub picture: Picture,
    /// Two-letter nationality code.
    #[serde(rename = "nat")]
    pub nationality: String,
}

impl UserRecord {
    /// Join title, first, and last name with single spaces.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }

    /// Return the portrait URL for `variant`.
    #[must_use]
    pub fn picture(&self, variant: PictureVariant) -> &str {
        self.picture.url(variant)
    }

    /// Return the stored gender label unchanged.
    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Return the age attached to the date of birth.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.dob.age
    }

    /// Build the flattened summary for this record.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            name: self.full_name(),
            gender: self.gender().to_owned(),
            picture: self.picture(PictureVariant::Medium).to_owned(),
            age: self.age().to_string(),
        }
    }
}

/// Personal name parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Name {
    /// Honorific such as `Mr` or `Mrs`.
    pub title: String,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

/// Postal location of a generated identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    /// Street number and name.
    pub street: Street,
    /// City name.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country name.
    pub country: String,
    /// Numeric postal code.
    pub postcode: u32,
    /// String-encoded latitude and longitude.
    pub coordinates: Coordinates,
    /// UTC offset and a description of the zone.
    pub timezone: Timezone,
}

/// Street address line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Street {
    /// House number.
    pub number: u32,
    /// Street name.
    pub name: String,
}

/// Geographic coordinates, kept in the upstream string encoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Coordinates {
    /// Latitude as a decimal string.
    pub latitude: String,
    /// Longitude as a decimal string.
    pub longitude: String,
}

/// Timezone attached to a location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timezone {
    /// Offset from UTC, for example `+1:00`.
    pub offset: String,
    /// Human-readable list of places in the zone.
    pub description: String,
}

/// Upstream-generated login credentials. Nothing here is computed locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Login {
    /// Unique identifier.
    pub uuid: Uuid,
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
    /// Salt used for the digests below.
    pub salt: String,
    /// MD5 digest.
    pub md5: String,
    /// SHA-1 digest.
    pub sha1: String,
    /// SHA-256 digest.
    pub sha256: String,
}

/// A timestamp paired with the age in whole years supplied alongside it.
///
/// The age is not recomputed from the date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatedAge {
    /// RFC 3339 timestamp.
    pub date: DateTime<Utc>,
    /// Age in whole years.
    pub age: u32,
}

/// National identity document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NationalId {
    /// Document kind, for example `DNI`. May be empty.
    pub name: String,
    /// Document number. Some nationalities send `null`.
    pub value: Option<String>,
}

/// Portrait URLs in three sizes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Picture {
    /// Large portrait URL.
    pub large: String,
    /// Medium portrait URL.
    pub medium: String,
    /// Thumbnail URL.
    pub thumbnail: String,
}

impl Picture {
    /// Select the URL for `variant`.
    #[must_use]
    pub fn url(&self, variant: PictureVariant) -> &str {
        match variant {
            PictureVariant::Large => &self.large,
            PictureVariant::Medium => &self.medium,
            PictureVariant::Thumbnail => &self.thumbnail,
        }
    }
}
