//! Line reduction using the Douglas-Peucker algorithm.
//!
//! Finds the subset of indices whose removal keeps every dropped point
//! within a cross-track tolerance of the chord between its retained
//! neighbors. Ranges are processed from an explicit work stack rather
//! than by recursion, so pathological inputs (deviation growing
//! monotonically along the whole path) cannot exhaust the call stack.

use crate::sphere;
use crate::types::Coordinate;

/// Indices retained by Douglas-Peucker at `tolerance_m` meters.
///
/// The first and last index are always retained. For each range the
/// interior point with the greatest cross-track distance to the range
/// chord is found with a strict `>` comparison, so the first index
/// achieving the maximum wins ties; when that maximum exceeds the
/// tolerance the point is kept and both sub-ranges are processed.
///
/// Returns a sorted index list. Inputs of 2 or fewer points are
/// returned in full (nothing to reduce). Re-running on the reduced
/// polyline at the same tolerance changes nothing.
#[must_use]
pub fn reduce(coords: &[Coordinate], tolerance_m: f64) -> Vec<usize> {
    if coords.len() <= 2 {
        return (0..coords.len()).collect();
    }

    let mut kept = vec![false; coords.len()];
    kept[0] = true;
    kept[coords.len() - 1] = true;

    let mut ranges = vec![(0, coords.len() - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_distance = 0.0;
        let mut max_index = start;
        for i in (start + 1)..end {
            let d = sphere::cross_track_distance(coords[i], coords[start], coords[end]);
            if d > max_distance {
                max_distance = d;
                max_index = i;
            }
        }

        if max_distance > tolerance_m {
            kept[max_index] = true;
            ranges.push((start, max_index));
            ranges.push((max_index, end));
        }
    }

    kept.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn equator_line(lons: &[f64]) -> Vec<Coordinate> {
        lons.iter().map(|&lon| Coordinate::new(lon, 0.0)).collect()
    }

    #[test]
    fn two_points_returned_in_full() {
        let coords = equator_line(&[0.0, 1.0]);
        assert_eq!(reduce(&coords, 10.0), vec![0, 1]);
    }

    #[test]
    fn collinear_points_collapse_to_endpoints() {
        let coords = equator_line(&[0.0, 0.01, 0.02, 0.03, 0.04]);
        assert_eq!(reduce(&coords, 1.0), vec![0, 4]);
    }

    #[test]
    fn spike_above_tolerance_is_kept() {
        // Point 2 sits ~556 m north of an otherwise equatorial line.
        let mut coords = equator_line(&[0.0, 0.01, 0.02, 0.03, 0.04]);
        coords[2] = Coordinate::new(0.02, 0.005);
        let kept = reduce(&coords, 10.0);
        assert!(kept.contains(&2), "kept {kept:?}");
        assert_eq!(kept.first(), Some(&0));
        assert_eq!(kept.last(), Some(&4));
    }

    #[test]
    fn spike_below_tolerance_is_dropped() {
        // ~111 m spike against a 500 m tolerance.
        let mut coords = equator_line(&[0.0, 0.01, 0.02, 0.03, 0.04]);
        coords[2] = Coordinate::new(0.02, 0.001);
        assert_eq!(reduce(&coords, 500.0), vec![0, 4]);
    }

    #[test]
    fn zigzag_retains_all_peaks() {
        let coords = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.01, 0.01),
            Coordinate::new(0.02, 0.0),
            Coordinate::new(0.03, 0.01),
            Coordinate::new(0.04, 0.0),
        ];
        // Peaks are ~1.1 km off the baseline; tolerance 100 m keeps them.
        assert_eq!(reduce(&coords, 100.0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn result_is_sorted_and_bounded_by_endpoints() {
        let mut coords = equator_line(&[0.0, 0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07]);
        coords[3] = Coordinate::new(0.03, 0.004);
        coords[5] = Coordinate::new(0.05, -0.003);
        let kept = reduce(&coords, 10.0);
        assert!(kept.windows(2).all(|w| w[0] < w[1]), "kept {kept:?}");
        assert_eq!(kept.first(), Some(&0));
        assert_eq!(kept.last(), Some(&7));
    }

    #[test]
    fn idempotent_at_fixed_tolerance() {
        let mut coords = equator_line(&[0.0, 0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07]);
        coords[2] = Coordinate::new(0.02, 0.005);
        coords[5] = Coordinate::new(0.05, 0.002);

        // At 300 m the ~556 m and ~445 m deviations survive while the
        // smaller ones are dropped, so the first pass does real work.
        let first_pass = reduce(&coords, 300.0);
        assert_eq!(first_pass, vec![0, 2, 3, 7]);

        let reduced: Vec<Coordinate> = first_pass.iter().map(|&i| coords[i]).collect();
        let second_pass = reduce(&reduced, 300.0);

        // Every index of the already-reduced polyline survives.
        assert_eq!(second_pass, (0..reduced.len()).collect::<Vec<_>>());
    }
}
