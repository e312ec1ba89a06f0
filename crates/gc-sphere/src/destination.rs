//! Destination point: the direct geodesic problem on a sphere.
//!
//! Given a start `(φ1, λ1)`, initial bearing `θ` and angular distance
//! `δ = d / R`:
//!
//! ```text
//! φ2 = asin(sin φ1 · cos δ + cos φ1 · sin δ · cos θ)
//! λ2 = λ1 + atan2(sin θ · sin δ · cos φ1, cos δ − sin φ1 · sin φ2)
//! ```
//!
//! # Antimeridian
//!
//! [`Sphere::destination`] does **not** wrap `λ2`, so a track that crosses
//! the antimeridian eastwards reports a longitude above 180.  Callers that
//! want the canonical range use [`Sphere::destination_wrapped`].

use gc_core::{Bearing, Coordinate, wrap_longitude};

use crate::Sphere;

impl Sphere {
    /// Point reached by travelling `distance_km` from `start` along initial
    /// `bearing`.  Both components are rounded; longitude is left unwrapped.
    pub fn destination(&self, start: Coordinate, bearing: Bearing, distance_km: f64) -> Coordinate {
        let raw = self.destination_unrounded(start, bearing, distance_km);
        Coordinate::new(self.round(raw.lat), self.round(raw.lon))
    }

    /// As [`destination`](Self::destination), with the longitude wrapped into
    /// `[-180, 180)`.
    pub fn destination_wrapped(
        &self,
        start: Coordinate,
        bearing: Bearing,
        distance_km: f64,
    ) -> Coordinate {
        let raw = self.destination_unrounded(start, bearing, distance_km);
        // Round before wrapping so a value just below 180 cannot round up
        // onto the excluded bound; round again to drop wrap noise.
        let lon = self.round(wrap_longitude(self.round(raw.lon)));
        Coordinate::new(self.round(raw.lat), lon)
    }

    fn destination_unrounded(
        &self,
        start: Coordinate,
        bearing: Bearing,
        distance_km: f64,
    ) -> Coordinate {
        let start = start.normalized();
        let theta = bearing.normalized().to_radians();
        let (lat1, lon1) = start.to_radians();
        let delta = distance_km / self.radius_km;

        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_delta, cos_delta) = delta.sin_cos();

        let sin_lat2 = sin_lat1 * cos_delta + cos_lat1 * sin_delta * theta.cos();
        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
        let lon2 = lon1
            + (theta.sin() * sin_delta * cos_lat1).atan2(cos_delta - sin_lat1 * lat2.sin());

        Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
    }
}
