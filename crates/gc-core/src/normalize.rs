//! Clamping and cyclic wrapping of raw angles.
//!
//! Latitude is clamped, never wrapped: walking past a pole is not a simple
//! modular step.  Longitude and bearing are wrapped into half-open ranges,
//! `[-180, 180)` and `[0, 360)` respectively.
//!
//! Wrapping is a single Euclidean remainder, so cost does not depend on how
//! far out of range the input is.

use crate::{Coordinate, GcError, GcResult};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const FULL_TURN_DEG: f64 = 360.0;

/// Clamp a latitude into `[-90, 90]`.
///
/// NaN passes through unchanged.
#[inline]
pub fn normalize_latitude(lat: f64) -> f64 {
    lat.clamp(MIN_LATITUDE, MAX_LATITUDE)
}

/// Bring `value` into the half-open range `[low, high)`.
///
/// The caller guarantees `low < high` and that both bounds are finite.  The
/// result is unspecified otherwise (debug builds panic); use
/// [`try_wrap_cyclic`] when the range is not known to be valid.
///
/// ```
/// use gc_core::wrap_cyclic;
///
/// assert_eq!(wrap_cyclic(190.0, -180.0, 180.0), -170.0);
/// assert_eq!(wrap_cyclic(-30.0, 0.0, 360.0), 330.0);
/// assert_eq!(wrap_cyclic(360.0, 0.0, 360.0), 0.0);
/// ```
#[inline]
pub fn wrap_cyclic(value: f64, low: f64, high: f64) -> f64 {
    debug_assert!(low < high, "empty cyclic range [{low}, {high})");
    let width = high - low;
    let wrapped = (value - low).rem_euclid(width) + low;
    // rem_euclid may round a tiny negative offset up to exactly `width`.
    if wrapped >= high { low } else { wrapped }
}

/// Checked form of [`wrap_cyclic`]: rejects an empty or non-finite range.
pub fn try_wrap_cyclic(value: f64, low: f64, high: f64) -> GcResult<f64> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(GcError::InvalidRange { low, high });
    }
    Ok(wrap_cyclic(value, low, high))
}

/// Wrap a longitude into `[-180, 180)`.
#[inline]
pub fn wrap_longitude(lon: f64) -> f64 {
    wrap_cyclic(lon, MIN_LONGITUDE, MAX_LONGITUDE)
}

/// Wrap a bearing into `[0, 360)`.
#[inline]
pub fn wrap_bearing(deg: f64) -> f64 {
    wrap_cyclic(deg, 0.0, FULL_TURN_DEG)
}

/// Clamp the latitude and wrap the longitude of `coord`.
#[inline]
pub fn normalize_coordinate(coord: Coordinate) -> Coordinate {
    Coordinate {
        lat: normalize_latitude(coord.lat),
        lon: wrap_longitude(coord.lon),
    }
}
