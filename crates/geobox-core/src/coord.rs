//! Latitude/longitude coordinate types.
//!
//! A coordinate is stored either as `f64` degrees or as E7 fixed point
//! (`i32` holding degrees × 10^7, rounded to nearest).  Both shapes share a
//! single generic `Coordinate<T>`; the [`Degrees`] trait is the only place
//! the representations differ.
//!
//! Ranges are not checked.  Callers supply latitudes in ±90 and longitudes
//! in ±180.

use std::fmt;

/// A scalar that can stand for an angle in degrees.
///
/// Implemented for `f64` (plain degrees) and `i32` (E7 fixed point).
pub trait Degrees: Copy + PartialOrd + fmt::Debug {
    /// The value in floating-point degrees.
    fn as_degrees(self) -> f64;
}

impl Degrees for f64 {
    #[inline]
    fn as_degrees(self) -> f64 {
        self
    }
}

impl Degrees for i32 {
    #[inline]
    fn as_degrees(self) -> f64 {
        e7::to_degrees(self)
    }
}

/// Conversions between floating-point degrees and the E7 encoding.
pub mod e7 {
    /// Degrees are multiplied by this factor before rounding to `i32`.
    pub const SCALE: f64 = 1e7;

    /// Encode `degrees` as E7, rounding to the nearest integer.
    ///
    /// Values beyond ±214.7° saturate at the `i32` bounds.
    #[inline]
    pub fn from_degrees(degrees: f64) -> i32 {
        (degrees * SCALE).round() as i32
    }

    /// Decode an E7 value back to degrees.
    #[inline]
    pub fn to_degrees(value: i32) -> f64 {
        f64::from(value) * 1e-7
    }
}

/// A latitude/longitude pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate<T> {
    pub lat: T,
    pub lon: T,
}

/// Coordinate in floating-point degrees.
pub type CoordinateFloat = Coordinate<f64>;

/// Coordinate in E7 fixed point.
pub type CoordinateE7 = Coordinate<i32>;

impl<T: Degrees> Coordinate<T> {
    #[inline]
    pub fn new(lat: T, lon: T) -> Self {
        Self { lat, lon }
    }

    /// The same point in floating-point degrees.
    #[inline]
    pub fn to_float(self) -> CoordinateFloat {
        Coordinate {
            lat: self.lat.as_degrees(),
            lon: self.lon.as_degrees(),
        }
    }
}

impl CoordinateFloat {
    /// Round to the E7 encoding.
    #[inline]
    pub fn to_e7(self) -> CoordinateE7 {
        Coordinate {
            lat: e7::from_degrees(self.lat),
            lon: e7::from_degrees(self.lon),
        }
    }
}

impl From<CoordinateE7> for CoordinateFloat {
    fn from(c: CoordinateE7) -> Self {
        c.to_float()
    }
}

impl From<CoordinateFloat> for CoordinateE7 {
    fn from(c: CoordinateFloat) -> Self {
        c.to_e7()
    }
}

impl<T: Degrees> fmt::Display for Coordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6})",
            self.lat.as_degrees(),
            self.lon.as_degrees()
        )
    }
}
