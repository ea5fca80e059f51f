//! Domain ports and supporting types for the outbound boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_source;

pub use user_source::{
    DEFAULT_NATIONALITY, DEFAULT_RESULTS, FetchError, FetchRequest, FixtureUserSource,
    UserSource,
};
