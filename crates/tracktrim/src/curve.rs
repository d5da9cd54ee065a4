//! Curve detection from cumulative bearing change over a sliding window.
//!
//! Catches sustained gradual turning -- a smooth arc made of many
//! small-angle segments -- that the single-point corner test never
//! flags. Each candidate index is judged by the total absolute bearing
//! change across a window centered on it.

use crate::sphere;
use crate::types::Coordinate;

/// Interior indices that sit inside a sustained curve.
///
/// For each candidate index `i` in `[window, len - 1 - window]`, sums
/// the absolute bearing change over consecutive segment pairs across
/// the window spanning `[i - window + 1, i + window - 1]`; `i` is
/// flagged when the total reaches `threshold_deg`.
///
/// Returns an empty list when the polyline is not longer than twice
/// the window -- there is no index with a full window on both sides.
#[must_use]
pub fn detect_curves(coords: &[Coordinate], window: usize, threshold_deg: f64) -> Vec<usize> {
    let len = coords.len();
    if window == 0 || len <= window.saturating_mul(2) {
        return Vec::new();
    }

    let mut flagged = Vec::new();
    for i in window..len - window {
        let mut total_change = 0.0;
        for j in (i - window + 1)..(i + window) {
            let before = sphere::bearing(coords[j - 1], coords[j]);
            let after = sphere::bearing(coords[j], coords[j + 1]);
            total_change += sphere::bearing_delta(before, after).abs();
        }
        if total_change >= threshold_deg {
            flagged.push(i);
        }
    }

    flagged
}
