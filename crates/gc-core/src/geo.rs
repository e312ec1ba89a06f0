//! Geographic coordinate type.
//!
//! `Coordinate` uses `f64` latitude/longitude in degrees.  Raw values may be
//! out of range; every great-circle operation normalizes its inputs first
//! (see [`crate::normalize`]), so construction never fails.

use crate::normalize::{self, normalize_coordinate};
use crate::{GcError, GcResult};

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a coordinate, rejecting NaN and infinite components.
    ///
    /// Out-of-range but finite values are accepted; they are normalized
    /// when used.
    pub fn try_new(lat: f64, lon: f64) -> GcResult<Self> {
        Ok(Self {
            lat: GcError::check_finite("latitude", lat)?,
            lon: GcError::check_finite("longitude", lon)?,
        })
    }

    /// Clamp latitude into `[-90, 90]` and wrap longitude into `[-180, 180)`.
    #[inline]
    pub fn normalized(self) -> Self {
        normalize_coordinate(self)
    }

    /// `true` if both components are already in their canonical ranges.
    pub fn is_normalized(self) -> bool {
        (normalize::MIN_LATITUDE..=normalize::MAX_LATITUDE).contains(&self.lat)
            && (normalize::MIN_LONGITUDE..normalize::MAX_LONGITUDE).contains(&self.lon)
    }

    /// `(lat, lon)` in radians.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    #[inline]
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
