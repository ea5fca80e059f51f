//! Blocking client and accessors for randomuser.me fake identity records.
//!
//! The crate issues a single HTTP GET against the randomuser.me API, decodes
//! the `results` array into strongly typed [`UserRecord`] values, and exposes
//! index-based accessors over the resulting [`ResultSet`].
//!
//! # Overview
//!
//! - [`domain`] owns the record shape, accessor semantics, and the
//!   [`UserSource`] port.
//! - [`outbound`] provides the reqwest-backed [`RandomUserHttpSource`].
//! - [`settings`] loads client configuration from the environment.
//!
//! # Example
//!
//! ```
//! use randomuser::{PictureVariant, ResultSet};
//!
//! let body = r#"{"results": [{
//!     "gender": "male",
//!     "name": {"title": "Mr", "first": "John", "last": "Smith"},
//!     "location": {
//!         "street": {"number": 12, "name": "Calle Mayor"},
//!         "city": "Madrid", "state": "Madrid", "country": "Spain",
//!         "postcode": 28013,
//!         "coordinates": {"latitude": "40.4168", "longitude": "-3.7038"},
//!         "timezone": {"offset": "+1:00", "description": "Brussels, Madrid"}
//!     },
//!     "email": "john.smith@example.com",
//!     "login": {
//!         "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00",
//!         "username": "bluecat123", "password": "hunter", "salt": "abc",
//!         "md5": "m", "sha1": "s1", "sha256": "s256"
//!     },
//!     "dob": {"date": "1990-03-10T08:00:00.000Z", "age": 34},
//!     "registered": {"date": "2010-06-01T12:00:00.000Z", "age": 14},
//!     "phone": "912-345-678", "cell": "612-345-678",
//!     "id": {"name": "DNI", "value": "12345678-Z"},
//!     "picture": {
//!         "large": "http://x/l.jpg",
//!         "medium": "http://x/m.jpg",
//!         "thumbnail": "http://x/t.jpg"
//!     },
//!     "nat": "ES"
//! }]}"#;
//!
//! let users = ResultSet::from_json(body).expect("body decodes");
//! assert_eq!(users.full_name(0).expect("in range"), "Mr John Smith");
//! assert_eq!(
//!     users.picture(0, PictureVariant::from_name("huge")).expect("in range"),
//!     "http://x/m.jpg"
//! );
//! ```

pub mod domain;
pub mod outbound;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use domain::ports::{FetchError, FetchRequest, FixtureUserSource, UserSource};
pub use domain::{
    AccessError, Coordinates, DatedAge, Location, Login, Name, NationalId, Picture,
    PictureVariant, ResultSet, Street, Timezone, UserRecord, UserSummary,
};
pub use outbound::randomuser::{ClientBuildError, RandomUserHttpSource};
pub use settings::ClientSettings;
