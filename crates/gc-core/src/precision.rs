//! Decimal rounding applied to every reported distance and coordinate.

/// Number of decimal places kept in every returned value.
pub const ROUNDING_PRECISION: u32 = 6;

/// Largest precision accepted by [`round_to`]; beyond this `f64` has no
/// fractional digits left to round at typical geographic magnitudes.
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `digits` decimal places, halves away from zero.
///
/// A result of zero is always `+0.0`.  Values whose scaled form overflows are
/// returned unchanged, as are NaN and infinities.
///
/// ```
/// use gc_core::round_to;
///
/// assert_eq!(round_to(1.23456789, 6), 1.234568);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    // `+ 0.0` turns a rounded `-0.0` into `+0.0`.
    scaled.round() / factor + 0.0
}

/// Round to [`ROUNDING_PRECISION`] places.
#[inline]
pub fn round6(value: f64) -> f64 {
    round_to(value, ROUNDING_PRECISION)
}
