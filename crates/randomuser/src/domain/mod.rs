//! Domain model for randomuser records and the ports used to fetch them.

pub mod ports;

mod picture_variant;
mod record;
mod result_set;

pub use picture_variant::PictureVariant;
pub use record::{
    Coordinates, DatedAge, Location, Login, Name, NationalId, Picture, Street, Timezone,
    UserRecord,
};
pub use result_set::{AccessError, ResultSet, UserSummary};
