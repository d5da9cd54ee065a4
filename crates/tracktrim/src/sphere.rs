//! Spherical geometry primitives.
//!
//! All functions operate on longitude/latitude degrees over a sphere
//! of mean radius [`EARTH_RADIUS_M`]. These are pure functions with no
//! state; everything downstream (line reduction, corner and curve
//! detection) is built on them.

use crate::types::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters.
///
/// Uses the haversine formula, which is numerically stable for the
/// short distances typical of route data.
#[must_use]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS_M
}

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360).
#[must_use]
pub fn bearing(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let x = dlon.sin() * lat2.cos();
    let y = lat1
        .cos()
        .mul_add(lat2.sin(), -(lat1.sin() * lat2.cos() * dlon.cos()));

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Signed minimal difference between two bearings in degrees.
///
/// Normalized by repeated ±360° adjustment into (-180, 180]. A value
/// of exactly -180 is left as is (only values strictly beyond the
/// range are moved); every caller takes the absolute value, so the
/// sign at the boundary is unobservable.
#[must_use]
pub fn bearing_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    while delta > 180.0 {
        delta -= 360.0;
    }
    while delta < -180.0 {
        delta += 360.0;
    }
    delta
}

/// Cross-track distance from `p` to the great-circle segment
/// [`seg_start`, `seg_end`] in meters.
///
/// Computed from the segment bearing, the bearing from `seg_start` to
/// `p`, and the distance from `seg_start` to `p`:
/// `|asin(sin(d13 / R) * sin(θ13 - θ12)) * R|`.
///
/// This is a planar-segment approximation valid for the short segment
/// lengths typical of route data; it is not exact geodesic cross-track
/// for long segments. The approximation is part of the observable
/// contract -- it decides which index wins during line reduction.
///
/// When the segment endpoints coincide the segment has no bearing and
/// the result degrades to `distance(p, seg_start)`.
#[must_use]
pub fn cross_track_distance(p: Coordinate, seg_start: Coordinate, seg_end: Coordinate) -> f64 {
    if seg_start == seg_end {
        return distance(p, seg_start);
    }

    let segment_bearing = bearing(seg_start, seg_end).to_radians();
    let point_bearing = bearing(seg_start, p).to_radians();
    let distance_to_point = distance(seg_start, p);

    ((distance_to_point / EARTH_RADIUS_M).sin() * (point_bearing - segment_bearing).sin())
        .asin()
        .abs()
        * EARTH_RADIUS_M
}

/// Total great-circle length of a coordinate sequence in meters.
///
/// Returns 0 for fewer than 2 coordinates.
#[must_use]
pub fn path_length(coords: &[Coordinate]) -> f64 {
    coords
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}
