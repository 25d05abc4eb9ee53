//! `geobox-core` — bounding boxes and box diagonals for latitude/longitude
//! samples.
//!
//! Pure, synchronous and stateless.  Every function is reentrant; nothing is
//! shared between calls.
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`coord`] | `Coordinate<T>`, `Degrees`, E7 conversion helpers          |
//! | [`bbox`]  | `BoundingBox<T>`, `reduce_float`, `reduce_e7`              |
//! | [`geo`]   | great-circle distance, `distance_float`, `distance_e7`     |
//! | [`error`] | `GeoError`, `GeoResult`                                    |
//!
//! Two representations share one generic implementation: `f64` degrees and
//! E7 fixed point (`i32`, degrees × 10^7).
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Coordinate` and         |
//! |         | `BoundingBox` (`lat`/`lon`, `left`/`bottom`/`right`/`top`). |

pub mod bbox;
pub mod coord;
pub mod error;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bbox::{BoundingBox, BoundingBoxE7, BoundingBoxFloat, reduce_e7, reduce_float};
pub use coord::{Coordinate, CoordinateE7, CoordinateFloat, Degrees, e7};
pub use error::{GeoError, GeoResult};
pub use geo::{EARTH_RADIUS_M, distance_e7, distance_float, great_circle_m};
