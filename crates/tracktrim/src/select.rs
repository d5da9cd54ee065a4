//! Adaptive point selection under a coordinate budget.
//!
//! The selector decides which indices of a polyline survive when the
//! caller accepts at most `max_coordinates` points. Corners and curves
//! are semantic must-keep points; Douglas-Peucker output is used only
//! to spend whatever budget remains after semantics are honored,
//! trading geometric fidelity for budget compliance rather than the
//! reverse.
//!
//! Selection never fails: it always returns a best-effort index set
//! plus a sufficiency flag, pushing the fail/warn decision to the
//! facade.

use std::collections::BTreeSet;

use crate::types::{Coordinate, SimplifyConfig};
use crate::{corner, curve, reduce};

/// Corner threshold for the overflow policy: when even the critical
/// set exceeds the budget, only turns at least this sharp compete for
/// the remaining slots.
pub const STRICT_CORNER_ANGLE_DEG: f64 = 60.0;

/// Starting Douglas-Peucker tolerance for the fill stage, in meters.
pub const FILL_TOLERANCE_START_M: f64 = 10.0;

/// Geometric decay applied to the fill tolerance between attempts.
pub const FILL_TOLERANCE_DECAY: f64 = 0.8;

/// Number of fill tolerances tried before giving up.
pub const FILL_ATTEMPTS: usize = 20;

/// Outcome of adaptive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Sorted indices of retained coordinates. Contains the first and
    /// last index of the input.
    pub indices: Vec<usize>,

    /// Whether the budget was judged adequate to represent the shape.
    /// Heuristic: the final set reached at least `min(len, budget * 0.8)`
    /// points. Not a pointwise error bound.
    pub was_sufficient: bool,
}

/// Select up to `max_coordinates` indices of `coords` to retain.
///
/// 1. Inputs that already fit the budget are returned whole.
/// 2. The critical set starts as the two endpoints, extended with
///    detected corners and curves per `config`.
/// 3. Overflow: when the critical set alone exceeds the budget, it is
///    rebuilt from the endpoints plus the first `budget - 2` corners
///    detected at [`STRICT_CORNER_ANGLE_DEG`], in index order, and the
///    selection reports insufficiency -- the explicit signal that the
///    budget is too tight even for essential turns.
/// 4. Fill: otherwise, Douglas-Peucker runs at tolerances decaying
///    from [`FILL_TOLERANCE_START_M`] by [`FILL_TOLERANCE_DECAY`]; the
///    first tolerance whose output unions with the critical set within
///    budget contributes its indices, lowest first, up to the unspent
///    budget.
#[must_use]
pub fn select(coords: &[Coordinate], max_coordinates: usize, config: &SimplifyConfig) -> Selection {
    let len = coords.len();
    if len <= max_coordinates {
        return Selection {
            indices: (0..len).collect(),
            was_sufficient: true,
        };
    }

    // len > max_coordinates >= 2 whenever the facade calls this; the
    // saturating arithmetic below keeps smaller budgets safe for
    // direct callers.
    let mut critical: BTreeSet<usize> = BTreeSet::from([0, len - 1]);

    if config.preserve_corners {
        critical.extend(corner::detect_corners(coords, config.corner_angle_deg));
    }
    if config.preserve_curves {
        critical.extend(curve::detect_curves(
            coords,
            config.curve_window,
            config.curve_threshold_deg,
        ));
    }

    if critical.len() > max_coordinates {
        let strict = corner::detect_corners(coords, STRICT_CORNER_ANGLE_DEG);
        let mut kept: BTreeSet<usize> = BTreeSet::from([0, len - 1]);
        kept.extend(strict.into_iter().take(max_coordinates.saturating_sub(2)));
        return Selection {
            indices: kept.into_iter().collect(),
            was_sufficient: false,
        };
    }

    let remaining = max_coordinates - critical.len();
    if remaining > 0 {
        let mut tolerance = FILL_TOLERANCE_START_M;
        for _ in 0..FILL_ATTEMPTS {
            let reduced = reduce::reduce(coords, tolerance);
            let additional: Vec<usize> = reduced
                .into_iter()
                .filter(|index| !critical.contains(index))
                .collect();
            if critical.len() + additional.len() <= max_coordinates {
                critical.extend(additional.into_iter().take(remaining));
                break;
            }
            tolerance *= FILL_TOLERANCE_DECAY;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let was_sufficient = critical.len() as f64 >= (len as f64).min(max_coordinates as f64 * 0.8);

    Selection {
        indices: critical.into_iter().collect(),
        was_sufficient,
    }
}
