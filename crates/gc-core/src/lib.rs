//! `gc-core` — foundational types for the `great_circle` workspace.
//!
//! This crate is a dependency of every other `gc-*` crate.  It intentionally
//! has no `gc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Coordinate`, `EARTH_RADIUS_KM`                       |
//! | [`bearing`]     | `Bearing`                                             |
//! | [`normalize`]   | latitude clamp, cyclic wrap, coordinate normalization |
//! | [`precision`]   | `ROUNDING_PRECISION`, `round_to`                      |
//! | [`error`]       | `GcError`, `GcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bearing;
pub mod error;
pub mod geo;
pub mod normalize;
pub mod precision;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bearing::Bearing;
pub use error::{GcError, GcResult};
pub use geo::{Coordinate, EARTH_RADIUS_KM};
pub use normalize::{
    normalize_coordinate, normalize_latitude, try_wrap_cyclic, wrap_bearing, wrap_cyclic,
    wrap_longitude,
};
pub use precision::{ROUNDING_PRECISION, round6, round_to};
