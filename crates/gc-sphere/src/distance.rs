//! Great-circle distance via the haversine formula.
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! c = 2 · atan2(√a, √(1−a))
//! d = R · c
//! ```
//!
//! `a` is clamped to `[0, 1]` before the square roots; rounding error can
//! push it a hair outside for near-antipodal pairs, which would otherwise
//! yield NaN.

use gc_core::{Coordinate, normalize_coordinate};

use crate::Sphere;

/// Central angle in radians between two coordinates, after normalizing both.
pub fn central_angle(a: Coordinate, b: Coordinate) -> f64 {
    let a = normalize_coordinate(a);
    let b = normalize_coordinate(b);

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

impl Sphere {
    /// Great-circle distance in kilometres between `a` and `b`, rounded to
    /// `self.precision` places.
    ///
    /// Inputs are normalized first, so `(95.0, 190.0)` is treated as
    /// `(90.0, -170.0)`.
    pub fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        self.round(self.radius_km * central_angle(a, b))
    }
}
