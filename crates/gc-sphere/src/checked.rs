//! Validating entry points.
//!
//! The plain functions are total: NaN or infinite input flows through the
//! trigonometry and comes out as NaN.  These wrappers reject such input up
//! front with [`GcError::NonFinite`] naming the offending argument, then
//! delegate to the plain form.

use gc_core::{Bearing, Coordinate, GcError, GcResult};

use crate::Sphere;

fn check_coordinate(c: Coordinate) -> GcResult<Coordinate> {
    Coordinate::try_new(c.lat, c.lon)
}

impl Sphere {
    /// [`Sphere::distance`], rejecting non-finite coordinates.
    pub fn try_distance(&self, a: Coordinate, b: Coordinate) -> GcResult<f64> {
        let a = check_coordinate(a)?;
        let b = check_coordinate(b)?;
        Ok(self.distance(a, b))
    }

    /// [`Sphere::destination`], rejecting non-finite start, bearing or distance.
    pub fn try_destination(
        &self,
        start: Coordinate,
        bearing: Bearing,
        distance_km: f64,
    ) -> GcResult<Coordinate> {
        let start = check_coordinate(start)?;
        let bearing = Bearing::try_new(bearing.0)?;
        let distance_km = GcError::check_finite("distance_km", distance_km)?;
        Ok(self.destination(start, bearing, distance_km))
    }
}

/// [`crate::distance`] with non-finite input rejected.
pub fn try_distance(a: Coordinate, b: Coordinate) -> GcResult<f64> {
    Sphere::EARTH.try_distance(a, b)
}

/// [`crate::destination`] with non-finite input rejected.
pub fn try_destination(
    start: Coordinate,
    bearing: Bearing,
    distance_km: f64,
) -> GcResult<Coordinate> {
    Sphere::EARTH.try_destination(start, bearing, distance_km)
}
