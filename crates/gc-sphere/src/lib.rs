//! `gc-sphere` — great-circle distance and destination points.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`sphere`]      | `Sphere` (radius + precision), `Sphere::EARTH`            |
//! | [`distance`]    | haversine `Sphere::distance`, `central_angle`             |
//! | [`destination`] | `Sphere::destination`, `Sphere::destination_wrapped`      |
//! | [`checked`]     | `try_distance`, `try_destination` (reject NaN/∞ input)    |
//!
//! The free functions below are shorthands for the `Sphere::EARTH` methods.
//!
//! ```
//! use gc_core::{Bearing, Coordinate};
//!
//! let lands_end = Coordinate::new(50.0663, -5.7148);
//! let john_o_groats = Coordinate::new(58.6441, -3.07);
//! let d = gc_sphere::distance(lands_end, john_o_groats);
//! assert!((d - 968.0).abs() < 5.0);
//!
//! let there = gc_sphere::destination(lands_end, Bearing(9.1), d);
//! assert!((gc_sphere::distance(lands_end, there) - d).abs() < 1e-3);
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod checked;
pub mod destination;
pub mod distance;
pub mod sphere;

#[cfg(test)]
mod tests;

use gc_core::{Bearing, Coordinate};

pub use checked::{try_destination, try_distance};
pub use distance::central_angle;
pub use sphere::Sphere;

/// Great-circle distance in kilometres on [`Sphere::EARTH`], six decimals.
#[inline]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    Sphere::EARTH.distance(a, b)
}

/// Destination on [`Sphere::EARTH`]; longitude is not wrapped.
#[inline]
pub fn destination(start: Coordinate, bearing: Bearing, distance_km: f64) -> Coordinate {
    Sphere::EARTH.destination(start, bearing, distance_km)
}

/// Destination on [`Sphere::EARTH`] with longitude wrapped into `[-180, 180)`.
#[inline]
pub fn destination_wrapped(start: Coordinate, bearing: Bearing, distance_km: f64) -> Coordinate {
    Sphere::EARTH.destination_wrapped(start, bearing, distance_km)
}
