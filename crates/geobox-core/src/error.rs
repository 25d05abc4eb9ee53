//! Crate error type.
//!
//! Reduction over an empty sequence is the only reportable condition.  The
//! distance functions are total and never produce an error.

use thiserror::Error;

/// Errors produced by `geobox-core`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeoError {
    #[error("the coordinates are empty")]
    EmptyCoordinates,
}

/// Shorthand result type for `geobox-core`.
pub type GeoResult<T> = Result<T, GeoError>;
