//! lands_end — walkthrough of the great_circle workspace.
//!
//! Measures Land's End to John o' Groats, then walks the same distance from
//! Land's End in 100 km steps along a fixed bearing, and finally shows how
//! `destination` and `destination_wrapped` differ across the antimeridian.
//!
//! Usage: `lands_end [SPHERE_JSON]`.  The optional file overrides the sphere,
//! e.g. `{ "radius_km": 6378.137, "precision": 3 }`.  A JSON report is
//! printed to stdout after the human-readable tables.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use gc_core::{Bearing, Coordinate};
use gc_sphere::Sphere;

// ── Constants ─────────────────────────────────────────────────────────────────

const LANDS_END:     Coordinate = Coordinate::new(50.0663, -5.7148);
const JOHN_O_GROATS: Coordinate = Coordinate::new(58.6441, -3.07);
const WALK_BEARING:  Bearing    = Bearing(9.1);
const STEP_KM:       f64        = 100.0;

// Taveuni, Fiji: straddles the antimeridian.
const TAVEUNI:       Coordinate = Coordinate::new(-16.85, 179.95);
const HOP_KM:        f64        = 250.0;

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Waypoint {
    leg_km: f64,
    at: Coordinate,
    from_start_km: f64,
}

#[derive(Serialize)]
struct Report {
    sphere: Sphere,
    distance_km: f64,
    walk_bearing: Bearing,
    walk: Vec<Waypoint>,
    antimeridian_unwrapped: Coordinate,
    antimeridian_wrapped: Coordinate,
}

fn load_sphere(path: &Path) -> Result<Sphere> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let sphere: Sphere = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    sphere.validate()?;
    Ok(sphere)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let sphere = match std::env::args_os().nth(1) {
        Some(path) => load_sphere(Path::new(&path))?,
        None => Sphere::EARTH,
    };

    println!("=== lands_end — great-circle walkthrough ===");
    println!(
        "Sphere: radius {} km  |  precision {} dp",
        sphere.radius_km, sphere.precision
    );
    println!();

    // 1. Distance.
    let distance_km = sphere.try_distance(LANDS_END, JOHN_O_GROATS)?;
    println!("Land's End {LANDS_END} -> John o' Groats {JOHN_O_GROATS}: {distance_km} km");
    println!();

    // 2. Walk along a fixed initial bearing.
    println!("Walking {distance_km} km from Land's End, initial bearing {WALK_BEARING}");
    println!("{:>10} {:>28} {:>14}", "Leg km", "Position", "Check km");
    println!("{}", "-".repeat(54));

    let mut walk = Vec::new();
    let mut leg_km = 0.0;
    while leg_km < distance_km {
        leg_km = (leg_km + STEP_KM).min(distance_km);
        let at = sphere.try_destination(LANDS_END, WALK_BEARING, leg_km)?;
        let from_start_km = sphere.distance(LANDS_END, at);
        println!("{leg_km:>10.1} {:>28} {from_start_km:>14.3}", at.to_string());
        walk.push(Waypoint { leg_km, at, from_start_km });
    }

    if let Some(last) = walk.last() {
        let miss_km = sphere.distance(last.at, JOHN_O_GROATS);
        println!("Final waypoint misses John o' Groats by {miss_km} km");
    }
    println!();

    // 3. Antimeridian.
    let unwrapped = sphere.destination(TAVEUNI, Bearing::EAST, HOP_KM);
    let wrapped = sphere.destination_wrapped(TAVEUNI, Bearing::EAST, HOP_KM);
    println!("{HOP_KM} km east of Taveuni {TAVEUNI}:");
    println!("  destination          {unwrapped}");
    println!("  destination_wrapped  {wrapped}");
    if !unwrapped.is_normalized() {
        eprintln!("note: unwrapped longitude {} is outside [-180, 180)", unwrapped.lon);
    }
    println!();

    // 4. JSON report.
    let report = Report {
        sphere,
        distance_km,
        walk_bearing: WALK_BEARING,
        walk,
        antimeridian_unwrapped: unwrapped,
        antimeridian_wrapped: wrapped,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
