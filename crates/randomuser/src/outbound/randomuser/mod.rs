//! randomuser.me outbound adapters.
//!
//! This module provides a thin blocking HTTP implementation of the
//! `UserSource` port.

mod http_source;

pub use http_source::{ClientBuildError, DEFAULT_ENDPOINT, RandomUserHttpSource};
