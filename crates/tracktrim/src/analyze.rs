//! Geometry analysis: structural minimums and complexity reporting.

use crate::types::{Coordinate, GeometryReport, SimplifyConfig, SimplifyError};
use crate::{corner, curve, geojson, sphere};

/// Corner threshold for the minimum-required estimate: only turns at
/// least this sharp count as essential structure.
pub const ESSENTIAL_CORNER_ANGLE_DEG: f64 = 90.0;

/// Slots reserved beyond the essential corners for curvature between
/// them.
const CURVE_BUFFER: usize = 2;

/// Estimate the fewest coordinates needed to represent `coords`
/// without gross shape loss.
///
/// For inputs of 2 or fewer points this is the input length. Otherwise
/// it is the number of corners detected at
/// [`ESSENTIAL_CORNER_ANGLE_DEG`] (never less than 3) plus a buffer of
/// [`CURVE_BUFFER`], capped at the input length. A heuristic estimate,
/// not a guarantee.
#[must_use]
pub fn minimum_required(coords: &[Coordinate]) -> usize {
    if coords.len() <= 2 {
        return coords.len();
    }

    let essential = corner::detect_corners(coords, ESSENTIAL_CORNER_ANGLE_DEG);
    (essential.len().max(3) + CURVE_BUFFER).min(coords.len())
}

/// Validate a geometry and report its complexity.
///
/// Corner and curve counts use the default detection parameters; the
/// complexity score is their sum divided by the coordinate count.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidGeometry`] when the geometry is not
/// a valid LineString.
pub fn analyze(geometry: &geojson::Geometry) -> Result<GeometryReport, SimplifyError> {
    let coords = geojson::validate_line_string(geometry)?;

    let corners = corner::detect_corners(&coords, SimplifyConfig::DEFAULT_CORNER_ANGLE_DEG);
    let curves = curve::detect_curves(
        &coords,
        SimplifyConfig::DEFAULT_CURVE_WINDOW,
        SimplifyConfig::DEFAULT_CURVE_THRESHOLD_DEG,
    );

    #[allow(clippy::cast_precision_loss)]
    let complexity_score = (corners.len() + curves.len()) as f64 / coords.len() as f64;

    Ok(GeometryReport {
        coordinate_count: coords.len(),
        total_length_m: sphere::path_length(&coords),
        minimum_required: minimum_required(&coords),
        corner_count: corners.len(),
        curve_count: curves.len(),
        complexity_score,
    })
}
