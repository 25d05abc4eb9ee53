//! Axis-aligned bounding box over a set of coordinates.
//!
//! # Edge naming
//!
//! The edge names follow a fixed interchange convention rather than map
//! orientation:
//!
//! | Field    | Holds          | Alias     |
//! |----------|----------------|-----------|
//! | `left`   | min latitude   | `min_lat` |
//! | `bottom` | min longitude  | `min_lon` |
//! | `right`  | max latitude   | `max_lat` |
//! | `top`    | max longitude  | `max_lon` |
//!
//! Boxes crossing the antimeridian are not detected; the reduction is a
//! plain min/max over each axis.

use crate::coord::{Coordinate, Degrees};
use crate::error::{GeoError, GeoResult};

/// Minimal enclosing box of a non-empty coordinate sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    pub left: T,
    pub bottom: T,
    pub right: T,
    pub top: T,
}

/// Bounding box in floating-point degrees.
pub type BoundingBoxFloat = BoundingBox<f64>;

/// Bounding box in E7 fixed point.
pub type BoundingBoxE7 = BoundingBox<i32>;

impl<T: Degrees> BoundingBox<T> {
    /// Reduce `coordinates` to their bounding box in one pass.
    ///
    /// Returns [`GeoError::EmptyCoordinates`] if the sequence yields nothing.
    pub fn from_coordinates<I>(coordinates: I) -> GeoResult<Self>
    where
        I: IntoIterator<Item = Coordinate<T>>,
    {
        let mut iter = coordinates.into_iter();
        let Some(first) = iter.next() else {
            log::debug!("bounding box requested over an empty coordinate sequence");
            return Err(GeoError::EmptyCoordinates);
        };

        let mut bbox = BoundingBox {
            left: first.lat,
            bottom: first.lon,
            right: first.lat,
            top: first.lon,
        };
        let mut count = 1usize;

        for c in iter {
            // Strict comparisons: the first extremum seen is kept on ties.
            if c.lat < bbox.left {
                bbox.left = c.lat;
            }
            if c.lat > bbox.right {
                bbox.right = c.lat;
            }
            if c.lon < bbox.bottom {
                bbox.bottom = c.lon;
            }
            if c.lon > bbox.top {
                bbox.top = c.lon;
            }
            count += 1;
        }

        log::trace!("reduced {count} coordinates to {bbox:?}");
        Ok(bbox)
    }

    #[inline]
    pub fn min_lat(&self) -> T {
        self.left
    }

    #[inline]
    pub fn min_lon(&self) -> T {
        self.bottom
    }

    #[inline]
    pub fn max_lat(&self) -> T {
        self.right
    }

    #[inline]
    pub fn max_lon(&self) -> T {
        self.top
    }

    /// The `(left, bottom)` corner, i.e. (min lat, min lon).
    #[inline]
    pub fn lower_corner(&self) -> Coordinate<T> {
        Coordinate::new(self.left, self.bottom)
    }

    /// The `(right, top)` corner, i.e. (max lat, max lon).
    #[inline]
    pub fn upper_corner(&self) -> Coordinate<T> {
        Coordinate::new(self.right, self.top)
    }

    /// The same box with every edge in floating-point degrees.
    pub fn to_float(&self) -> BoundingBoxFloat {
        BoundingBox {
            left: self.left.as_degrees(),
            bottom: self.bottom.as_degrees(),
            right: self.right.as_degrees(),
            top: self.top.as_degrees(),
        }
    }
}

impl From<BoundingBoxE7> for BoundingBoxFloat {
    fn from(b: BoundingBoxE7) -> Self {
        b.to_float()
    }
}

/// Bounding box of floating-point coordinates.
pub fn reduce_float(coordinates: &[Coordinate<f64>]) -> GeoResult<BoundingBoxFloat> {
    BoundingBox::from_coordinates(coordinates.iter().copied())
}

/// Bounding box of E7 coordinates.  Comparisons are exact integer ones.
pub fn reduce_e7(coordinates: &[Coordinate<i32>]) -> GeoResult<BoundingBoxE7> {
    BoundingBox::from_coordinates(coordinates.iter().copied())
}
