//! Unit tests for gc-sphere.
//!
//! Property tests draw coordinates from a seeded `SmallRng`, so every run
//! sees the same inputs.

#[cfg(test)]
mod helpers {
    use gc_core::Coordinate;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    pub const LANDS_END: Coordinate = Coordinate::new(50.0663, -5.7148);
    pub const JOHN_O_GROATS: Coordinate = Coordinate::new(58.6441, -3.07);

    pub fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    /// Any coordinate, including out-of-range raw values.
    pub fn raw_coordinate(rng: &mut SmallRng) -> Coordinate {
        Coordinate::new(rng.gen_range(-120.0..120.0), rng.gen_range(-540.0..540.0))
    }

    /// A coordinate away from the poles, already normalized.
    pub fn temperate_coordinate(rng: &mut SmallRng) -> Coordinate {
        Coordinate::new(rng.gen_range(-80.0..80.0), rng.gen_range(-180.0..180.0))
    }

    /// `true` if `v` has no more than six decimal places.
    pub fn has_six_decimals(v: f64) -> bool {
        gc_core::round6(v) == v
    }
}

// ── distance ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use std::f64::consts::PI;

    use gc_core::{Coordinate, EARTH_RADIUS_KM};

    use super::helpers::*;
    use crate::distance;

    #[test]
    fn lands_end_to_john_o_groats() {
        let d = distance(LANDS_END, JOHN_O_GROATS);
        assert!((d - 968.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111.194927).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn zero_for_identical_points() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let c = raw_coordinate(&mut rng);
            assert_eq!(distance(c, c), 0.0, "{c}");
        }
    }

    #[test]
    fn symmetric() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let a = raw_coordinate(&mut rng);
            let b = raw_coordinate(&mut rng);
            let ab = distance(a, b);
            let ba = distance(b, a);
            assert!((ab - ba).abs() <= 1e-6, "{a} {b}: {ab} vs {ba}");
        }
    }

    #[test]
    fn non_negative_and_bounded_by_half_circumference() {
        let max = PI * EARTH_RADIUS_KM;
        let mut rng = rng();
        for _ in 0..1_000 {
            let a = raw_coordinate(&mut rng);
            let b = raw_coordinate(&mut rng);
            let d = distance(a, b);
            assert!(d >= 0.0 && d <= max + 1e-6, "{a} {b}: {d}");
            assert!(has_six_decimals(d), "{d}");
        }
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert_eq!(d, gc_core::round6(PI * EARTH_RADIUS_KM));
        let d = distance(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0));
        assert_eq!(d, gc_core::round6(PI * EARTH_RADIUS_KM));
    }

    #[test]
    fn latitude_is_clamped() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(
            distance(Coordinate::new(100.0, 0.0), origin),
            distance(Coordinate::new(90.0, 0.0), origin)
        );
        assert_eq!(
            distance(Coordinate::new(-95.0, 10.0), origin),
            distance(Coordinate::new(-90.0, 10.0), origin)
        );
    }

    #[test]
    fn longitude_is_wrapped() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(
            distance(Coordinate::new(0.0, 190.0), origin),
            distance(Coordinate::new(0.0, -170.0), origin)
        );
    }

    #[test]
    fn short_hop_across_antimeridian() {
        let d = distance(Coordinate::new(0.0, 179.5), Coordinate::new(0.0, -179.5));
        assert!((d - 111.194927).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn nan_propagates() {
        assert!(distance(Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0)).is_nan());
    }
}

// ── destination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod destination {
    use gc_core::{Bearing, Coordinate, EARTH_RADIUS_KM, normalize_coordinate, round6};
    use rand::Rng;

    use super::helpers::*;
    use crate::{destination, destination_wrapped, distance};

    fn arc_km(deg: f64) -> f64 {
        EARTH_RADIUS_KM * deg.to_radians()
    }

    #[test]
    fn quarter_turn_east_along_equator() {
        let c = destination(Coordinate::new(0.0, 0.0), Bearing::EAST, arc_km(90.0));
        assert_eq!(c, Coordinate::new(0.0, 90.0));
    }

    #[test]
    fn due_west_from_origin_reports_positive_zero_latitude() {
        let c = destination(Coordinate::new(0.0, 0.0), Bearing::WEST, 1.0);
        assert!(c.lat.is_sign_positive(), "{c}");
        assert_eq!(c.to_string(), "(0.000000, -0.008993)");
    }

    #[test]
    fn due_north() {
        let c = destination(Coordinate::new(0.0, 0.0), Bearing::NORTH, arc_km(10.0));
        assert_eq!(c, Coordinate::new(10.0, 0.0));
    }

    #[test]
    fn over_the_pole_flips_longitude() {
        let c = destination(Coordinate::new(89.5, 0.0), Bearing::NORTH, arc_km(1.0));
        assert_eq!(c, Coordinate::new(89.5, 180.0));
    }

    #[test]
    fn longitude_is_not_wrapped() {
        let east = destination(Coordinate::new(0.0, 170.0), Bearing::EAST, arc_km(20.0));
        assert_eq!(east, Coordinate::new(0.0, 190.0));
        let west = destination(Coordinate::new(0.0, -179.5), Bearing::WEST, arc_km(1.0));
        assert_eq!(west, Coordinate::new(0.0, -180.5));
    }

    #[test]
    fn wrapped_variant_wraps_longitude() {
        let east = destination_wrapped(Coordinate::new(0.0, 170.0), Bearing::EAST, arc_km(20.0));
        assert_eq!(east, Coordinate::new(0.0, -170.0));
        let west = destination_wrapped(Coordinate::new(0.0, -179.5), Bearing::WEST, arc_km(1.0));
        assert_eq!(west, Coordinate::new(0.0, 179.5));

        let mut rng = rng();
        for _ in 0..1_000 {
            let c = raw_coordinate(&mut rng);
            let b = Bearing(rng.gen_range(-720.0..720.0));
            let d: f64 = rng.gen_range(0.0..25_000.0);
            let out = destination_wrapped(c, b, d);
            assert!(out.is_normalized(), "{c} {b} {d}: {out}");
        }
    }

    #[test]
    fn bearing_360_equals_bearing_0() {
        let mut rng = rng();
        for _ in 0..500 {
            let c = raw_coordinate(&mut rng);
            let d: f64 = rng.gen_range(0.0..5_000.0);
            assert_eq!(destination(c, Bearing(360.0), d), destination(c, Bearing::NORTH, d));
            assert_eq!(destination(c, Bearing(-90.0), d), destination(c, Bearing::WEST, d));
        }
    }

    #[test]
    fn zero_distance_returns_normalized_start() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let c = raw_coordinate(&mut rng);
            let b = Bearing(rng.gen_range(0.0..360.0));
            let n = normalize_coordinate(c);
            let out = destination(c, b, 0.0);
            assert!((out.lat - round6(n.lat)).abs() <= 1e-6, "{c}: {out}");
            assert!((out.lon - round6(n.lon)).abs() <= 1e-6, "{c}: {out}");
        }
    }

    #[test]
    fn out_of_range_start_is_normalized() {
        let out = destination(Coordinate::new(10.0, 370.0), Bearing::NORTH, arc_km(10.0));
        assert_eq!(out, Coordinate::new(20.0, 10.0));
        let out = destination(Coordinate::new(-100.0, 0.0), Bearing::NORTH, arc_km(10.0));
        assert_eq!(out.lat, -80.0);
    }

    #[test]
    fn round_trip_distance() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let c = temperate_coordinate(&mut rng);
            let b = Bearing(rng.gen_range(0.0..360.0));
            let d: f64 = rng.gen_range(0.0..1_000.0);
            let there = destination(c, b, d);
            let back = distance(c, there);
            assert!((back - d).abs() < 1e-3, "{c} {b} {d}: {back}");
        }
    }

    #[test]
    fn results_have_six_decimals() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let c = raw_coordinate(&mut rng);
            let b = Bearing(rng.gen_range(0.0..360.0));
            let out = destination(c, b, rng.gen_range(0.0..20_000.0));
            assert!(has_six_decimals(out.lat) && has_six_decimals(out.lon), "{out}");
        }
    }
}

// ── Sphere & checked API ──────────────────────────────────────────────────────

#[cfg(test)]
mod sphere {
    use gc_core::{Bearing, Coordinate, GcError};

    use super::helpers::*;
    use crate::{Sphere, try_destination, try_distance};

    #[test]
    fn default_is_earth() {
        assert_eq!(Sphere::default(), Sphere::EARTH);
        assert_eq!(Sphere::EARTH.radius_km, 6371.0);
        assert_eq!(Sphere::EARTH.precision, 6);
        assert_eq!(Sphere::EARTH.max_distance_km(), 20015.086796);
    }

    #[test]
    fn new_validates() {
        assert!(Sphere::new(1.0, 3).is_ok());
        assert!(matches!(Sphere::new(0.0, 6), Err(GcError::Config(_))));
        assert!(matches!(Sphere::new(-5.0, 6), Err(GcError::Config(_))));
        assert!(matches!(Sphere::new(f64::NAN, 6), Err(GcError::Config(_))));
        assert!(matches!(Sphere::new(6371.0, 16), Err(GcError::Config(_))));
    }

    #[test]
    fn custom_radius_scales_distance() {
        let unit = Sphere::new(1.0, 6).unwrap();
        let d = unit.distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 90.0));
        assert_eq!(d, 1.570796);
    }

    #[test]
    fn custom_precision() {
        let coarse = Sphere::new(6371.0, 1).unwrap();
        let d = coarse.distance(LANDS_END, JOHN_O_GROATS);
        assert_eq!(d, 968.9);
    }

    #[test]
    fn checked_distance() {
        assert_eq!(
            try_distance(LANDS_END, JOHN_O_GROATS).unwrap(),
            crate::distance(LANDS_END, JOHN_O_GROATS)
        );
        let err = try_distance(Coordinate::new(0.0, f64::NAN), LANDS_END).unwrap_err();
        assert!(matches!(err, GcError::NonFinite { field: "longitude", .. }));
    }

    #[test]
    fn checked_destination() {
        assert!(try_destination(LANDS_END, Bearing(45.0), 10.0).is_ok());

        let err = try_destination(LANDS_END, Bearing(f64::INFINITY), 10.0).unwrap_err();
        assert!(matches!(err, GcError::NonFinite { field: "bearing", .. }));

        let err = try_destination(LANDS_END, Bearing(45.0), f64::NAN).unwrap_err();
        assert!(matches!(err, GcError::NonFinite { field: "distance_km", .. }));

        let err = try_destination(Coordinate::new(f64::NEG_INFINITY, 0.0), Bearing::NORTH, 1.0)
            .unwrap_err();
        assert!(matches!(err, GcError::NonFinite { field: "latitude", .. }));
    }
}
