//! Compass bearing, degrees clockwise from true north.

use crate::normalize::wrap_bearing;
use crate::{GcError, GcResult};

/// An initial direction of travel in degrees.
///
/// Any finite value is accepted; [`Bearing::normalized`] wraps it into
/// `[0, 360)`, so `Bearing(360.0)` and `Bearing::NORTH` point the same way.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bearing(pub f64);

impl Bearing {
    pub const NORTH: Bearing = Bearing(0.0);
    pub const EAST: Bearing = Bearing(90.0);
    pub const SOUTH: Bearing = Bearing(180.0);
    pub const WEST: Bearing = Bearing(270.0);

    /// Construct a bearing, rejecting NaN and infinities.
    pub fn try_new(deg: f64) -> GcResult<Self> {
        GcError::check_finite("bearing", deg).map(Bearing)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Wrap into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Bearing {
        Bearing(wrap_bearing(self.0))
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl std::fmt::Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}°", self.0)
    }
}
