//! Great-circle distance between two points, and the diagonal of a box.
//!
//! Uses the spherical law of cosines on a sphere of mean Earth radius.  The
//! arccos argument is clamped to [-1, 1]; rounding can push it just outside
//! that range for near-identical points.

use crate::bbox::{BoundingBox, BoundingBoxE7, BoundingBoxFloat};
use crate::coord::{CoordinateFloat, Degrees};

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in metres between `a` and `b`.
pub fn great_circle_m(a: CoordinateFloat, b: CoordinateFloat) -> f64 {
    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let cos_c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();

    EARTH_RADIUS_M * cos_c.clamp(-1.0, 1.0).acos()
}

impl<T: Degrees> BoundingBox<T> {
    /// Distance in metres from the `(left, bottom)` corner to the
    /// `(right, top)` corner.
    #[inline]
    pub fn diagonal_m(&self) -> f64 {
        great_circle_m(
            self.lower_corner().to_float(),
            self.upper_corner().to_float(),
        )
    }
}

/// Diagonal of a floating-point box, in metres.
pub fn distance_float(bbox: &BoundingBoxFloat) -> f64 {
    bbox.diagonal_m()
}

/// Diagonal of an E7 box, in metres.  Edges are scaled by 10^-7 first.
pub fn distance_e7(bbox: &BoundingBoxE7) -> f64 {
    bbox.diagonal_m()
}
