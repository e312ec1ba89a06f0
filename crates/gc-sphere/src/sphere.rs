//! Sphere model: radius plus reporting precision.
//!
//! `Sphere` is cheap to copy and holds no heap data.  The crate-level free
//! functions all use [`Sphere::EARTH`]; build a custom sphere with
//! [`Sphere::new`] when a different radius or precision is needed.

use gc_core::precision::MAX_PRECISION;
use gc_core::{EARTH_RADIUS_KM, GcError, GcResult, ROUNDING_PRECISION, round_to};

/// Radius and rounding used by every distance/destination computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Sphere radius in kilometres.
    pub radius_km: f64,
    /// Decimal places kept in every returned value.
    pub precision: u32,
}

impl Sphere {
    /// Mean-radius Earth, six decimal places.
    pub const EARTH: Sphere = Sphere {
        radius_km: EARTH_RADIUS_KM,
        precision: ROUNDING_PRECISION,
    };

    /// Build a validated sphere.
    pub fn new(radius_km: f64, precision: u32) -> GcResult<Self> {
        let sphere = Sphere { radius_km, precision };
        sphere.validate()?;
        Ok(sphere)
    }

    /// Check the invariants `new` enforces.  Useful after deserializing.
    pub fn validate(&self) -> GcResult<()> {
        if !(self.radius_km.is_finite() && self.radius_km > 0.0) {
            return Err(GcError::Config(format!(
                "radius_km must be finite and positive, got {}",
                self.radius_km
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(GcError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }

    /// Half the circumference: the distance between antipodal points.
    pub fn max_distance_km(&self) -> f64 {
        self.round(std::f64::consts::PI * self.radius_km)
    }

    #[inline]
    pub(crate) fn round(&self, value: f64) -> f64 {
        round_to(value, self.precision)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::EARTH
    }
}
