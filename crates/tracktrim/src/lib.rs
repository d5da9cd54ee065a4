//! tracktrim: budget-aware polyline simplification (sans-IO).
//!
//! Reduces a GeoJSON LineString to a caller-supplied coordinate budget
//! while preserving the points that carry the shape of the route:
//! sharp corners and sustained curves. Built from small, pure stages:
//!
//! spherical primitives -> line reduction (Douglas-Peucker) ->
//! corner/curve detection -> adaptive selection -> facade.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! geometry values (or GeoJSON text) and returns structured data. All
//! file/terminal interaction lives in `tracktrim-bench`.
//!
//! Every entry point is a pure function of its inputs: input geometry
//! is borrowed read-only, outputs are freshly owned buffers, and no
//! state is shared between calls, so concurrent callers need no
//! synchronization.

pub mod analyze;
pub mod corner;
pub mod curve;
pub mod geojson;
pub mod reduce;
pub mod select;
pub mod sphere;
pub mod types;

use std::collections::BTreeMap;

pub use analyze::{analyze, minimum_required};
pub use geojson::Geometry;
pub use select::Selection;
pub use types::{
    Coordinate, GeometryReport, PreviewOutcome, SimplificationResult, SimplifyConfig,
    SimplifyError,
};

/// Simplify a LineString geometry to at most `max_coordinates` points.
///
/// Validates eagerly, short-circuits to an identity result when the
/// input already fits the budget, and otherwise runs adaptive
/// selection and assembles metrics:
///
/// - `reduction_ratio` -- percentage of coordinates removed.
/// - `length_preserved` -- percentage of the original great-circle
///   length still present in the reduced path (100 when the original
///   length is 0).
/// - `warnings` -- non-fatal advisories: the budget was judged
///   insufficient, the budget was left more than half unspent, or
///   length preservation fell below 95%.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidGeometry`] when the input is not a
/// valid LineString. Returns [`SimplifyError::InsufficientCoordinates`]
/// when `max_coordinates` is below 2, or below the structural minimum
/// estimated by [`minimum_required`] -- the latter even though a result
/// was already computable: the failure takes precedence over returning
/// a degraded result.
pub fn simplify(
    geometry: &Geometry,
    max_coordinates: usize,
    config: &SimplifyConfig,
) -> Result<SimplificationResult, SimplifyError> {
    let coords = geojson::validate_line_string(geometry)?;

    if max_coordinates < 2 {
        return Err(SimplifyError::InsufficientCoordinates {
            minimum_required: 2,
            provided_limit: max_coordinates,
        });
    }

    let original_count = coords.len();
    if original_count <= max_coordinates {
        return Ok(SimplificationResult {
            geometry: geometry.clone(),
            original_count,
            simplified_count: original_count,
            reduction_ratio: 0.0,
            length_preserved: 100.0,
            was_sufficient: true,
            warnings: Vec::new(),
        });
    }

    let original_length = sphere::path_length(&coords);

    let selection = select::select(&coords, max_coordinates, config);

    // Rebuild from whole input entries so components beyond lon/lat
    // (altitude) survive.
    let kept_entries: Vec<Vec<f64>> = selection
        .indices
        .iter()
        .map(|&i| geometry.coordinates[i].clone())
        .collect();
    let kept_coords: Vec<Coordinate> = selection.indices.iter().map(|&i| coords[i]).collect();

    let simplified_count = kept_entries.len();
    #[allow(clippy::cast_precision_loss)]
    let reduction_ratio =
        (original_count - simplified_count) as f64 / original_count as f64 * 100.0;
    let length_preserved = if original_length > 0.0 {
        sphere::path_length(&kept_coords) / original_length * 100.0
    } else {
        100.0
    };

    let mut warnings = Vec::new();
    if !selection.was_sufficient {
        warnings.push(format!(
            "The specified max_coordinates ({max_coordinates}) may be insufficient \
             to properly represent this geometry. Consider increasing the limit.",
        ));
    }
    #[allow(clippy::cast_precision_loss)]
    let under_half_budget = (simplified_count as f64) < max_coordinates as f64 * 0.5;
    if under_half_budget {
        warnings.push(format!(
            "Simplified geometry uses only {simplified_count} of {max_coordinates} \
             allowed coordinates. The original geometry may be very simple.",
        ));
    }
    if length_preserved < 95.0 {
        warnings.push(format!(
            "Length preservation is {length_preserved:.1}%. \
             Consider increasing max_coordinates for better accuracy.",
        ));
    }

    // The structural-minimum check outranks the computed result: a
    // budget below it fails even though the metrics above exist.
    let minimum = analyze::minimum_required(&coords);
    if max_coordinates < minimum {
        return Err(SimplifyError::InsufficientCoordinates {
            minimum_required: minimum,
            provided_limit: max_coordinates,
        });
    }

    Ok(SimplificationResult {
        geometry: Geometry::line_string(kept_entries),
        original_count,
        simplified_count,
        reduction_ratio,
        length_preserved,
        was_sufficient: selection.was_sufficient,
        warnings,
    })
}

/// Decode GeoJSON text and simplify it.
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidGeometry`] when the text does not
/// decode, plus everything [`simplify`] can return.
pub fn simplify_json(
    text: &str,
    max_coordinates: usize,
    config: &SimplifyConfig,
) -> Result<SimplificationResult, SimplifyError> {
    let geometry = Geometry::from_json(text)?;
    simplify(&geometry, max_coordinates, config)
}

/// Run [`simplify`] once per budget and summarize each outcome.
///
/// A failing budget is captured as [`PreviewOutcome::Failed`] and does
/// not abort the evaluation of the others.
#[must_use]
pub fn preview(geometry: &Geometry, budgets: &[usize]) -> BTreeMap<usize, PreviewOutcome> {
    budgets
        .iter()
        .map(|&budget| {
            let outcome = match simplify(geometry, budget, &SimplifyConfig::default()) {
                Ok(result) => PreviewOutcome::Summary {
                    simplified_count: result.simplified_count,
                    reduction_ratio: result.reduction_ratio,
                    length_preserved: result.length_preserved,
                    was_sufficient: result.was_sufficient,
                    warning_count: result.warnings.len(),
                },
                Err(error) => PreviewOutcome::Failed {
                    kind: error.kind().to_owned(),
                    message: error.to_string(),
                },
            };
            (budget, outcome)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn two_point_geometry() -> Geometry {
        Geometry::line_string(vec![vec![-122.4194, 37.7749], vec![-122.4094, 37.7849]])
    }

    #[test]
    fn identity_when_input_fits_budget() {
        let geometry = two_point_geometry();
        let result = simplify(&geometry, 10, &SimplifyConfig::default()).unwrap();
        assert_eq!(result.geometry, geometry);
        assert_eq!(result.original_count, 2);
        assert_eq!(result.simplified_count, 2);
        assert!((result.reduction_ratio - 0.0).abs() < f64::EPSILON);
        assert!((result.length_preserved - 100.0).abs() < f64::EPSILON);
        assert!(result.was_sufficient);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn budget_below_two_is_rejected() {
        let geometry = two_point_geometry();
        for budget in [0, 1] {
            let err = simplify(&geometry, budget, &SimplifyConfig::default()).unwrap_err();
            match err {
                SimplifyError::InsufficientCoordinates {
                    minimum_required,
                    provided_limit,
                } => {
                    assert_eq!(minimum_required, 2);
                    assert_eq!(provided_limit, budget);
                }
                other => panic!("expected InsufficientCoordinates, got {other:?}"),
            }
        }
    }

    #[test]
    fn validation_runs_before_the_budget_floor() {
        // Invalid geometry reports InvalidGeometry even with a bad
        // budget: validation is the first gate.
        let geometry = Geometry::line_string(vec![vec![0.0, 0.0]]);
        let err = simplify(&geometry, 0, &SimplifyConfig::default()).unwrap_err();
        assert!(matches!(err, SimplifyError::InvalidGeometry(_)));
    }

    #[test]
    fn simplify_json_accepts_text_input() {
        let result = simplify_json(
            r#"{"type": "LineString", "coordinates": [[-122.42, 37.77], [-122.41, 37.78]]}"#,
            10,
            &SimplifyConfig::default(),
        )
        .unwrap();
        assert_eq!(result.simplified_count, 2);
    }

    #[test]
    fn simplify_json_rejects_malformed_text() {
        let err = simplify_json("invalid json", 10, &SimplifyConfig::default()).unwrap_err();
        assert!(matches!(err, SimplifyError::InvalidGeometry(_)));
    }

    #[test]
    fn altitude_components_survive_simplification() {
        // 9 equatorial points with altitudes; budget forces reduction.
        let entries: Vec<Vec<f64>> = (0..9)
            .map(|i| {
                let lon = f64::from(i) * 0.01;
                vec![lon, 0.0, 100.0 + f64::from(i)]
            })
            .collect();
        let geometry = Geometry::line_string(entries);
        let result = simplify(&geometry, 5, &SimplifyConfig::default()).unwrap();
        for entry in &result.geometry.coordinates {
            assert_eq!(entry.len(), 3, "altitude dropped from {entry:?}");
            assert!(entry[2] >= 100.0);
        }
    }
}
