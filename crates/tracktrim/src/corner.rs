//! Corner detection from single-step bearing changes.
//!
//! A corner is a point where the path's bearing jumps by at least the
//! threshold between the incoming and outgoing segment. This is a
//! purely local test; sustained gradual turning that never crosses the
//! threshold at any single point is the curve detector's job.

use crate::sphere;
use crate::types::Coordinate;

/// Indices whose bearing change is at least `min_angle_deg` degrees.
///
/// The first and last index are always included, so the result is a
/// usable retention set on its own. Inputs of 2 or fewer points are
/// returned in full.
#[must_use]
pub fn detect_corners(coords: &[Coordinate], min_angle_deg: f64) -> Vec<usize> {
    if coords.len() <= 2 {
        return (0..coords.len()).collect();
    }

    let mut corners = vec![0];
    for i in 1..coords.len() - 1 {
        let before = sphere::bearing(coords[i - 1], coords[i]);
        let after = sphere::bearing(coords[i], coords[i + 1]);
        if sphere::bearing_delta(before, after).abs() >= min_angle_deg {
            corners.push(i);
        }
    }
    corners.push(coords.len() - 1);

    corners
}
