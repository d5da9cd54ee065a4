//! Shared types for the tracktrim simplification pipeline.

use serde::{Deserialize, Serialize};

use crate::geojson::Geometry;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees, valid range [-180, 180].
    pub lon: f64,
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Configuration for adaptive simplification.
///
/// The preserve flags switch the corner/curve detectors on and off;
/// the threshold fields tune them. Defaults match the detector
/// characteristics the selection policy was calibrated against, so
/// changing them shifts which points count as critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifyConfig {
    /// Keep points where the bearing changes sharply in a single step.
    pub preserve_corners: bool,

    /// Keep points inside sustained gradual turns.
    pub preserve_curves: bool,

    /// Minimum single-step bearing change (degrees) for a corner.
    pub corner_angle_deg: f64,

    /// Half-width of the curve detection window, in points.
    pub curve_window: usize,

    /// Cumulative bearing change (degrees) across the window for a curve.
    pub curve_threshold_deg: f64,
}

impl SimplifyConfig {
    /// Default corner detection threshold in degrees.
    pub const DEFAULT_CORNER_ANGLE_DEG: f64 = 30.0;

    /// Default curve detection window size in points.
    pub const DEFAULT_CURVE_WINDOW: usize = 5;

    /// Default cumulative curve detection threshold in degrees.
    pub const DEFAULT_CURVE_THRESHOLD_DEG: f64 = 45.0;
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            preserve_corners: true,
            preserve_curves: true,
            corner_angle_deg: Self::DEFAULT_CORNER_ANGLE_DEG,
            curve_window: Self::DEFAULT_CURVE_WINDOW,
            curve_threshold_deg: Self::DEFAULT_CURVE_THRESHOLD_DEG,
        }
    }
}

/// Result of one simplification call.
///
/// Immutable once constructed; the geometry is a freshly owned buffer
/// with no aliasing into the caller's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplificationResult {
    /// The reduced LineString geometry.
    pub geometry: Geometry,

    /// Number of coordinates in the input.
    pub original_count: usize,

    /// Number of coordinates retained.
    pub simplified_count: usize,

    /// Percentage of coordinates removed.
    pub reduction_ratio: f64,

    /// Percentage of the original path length preserved.
    pub length_preserved: f64,

    /// Whether the budget was judged adequate for the shape.
    pub was_sufficient: bool,

    /// Non-fatal advisories about the quality of the result.
    pub warnings: Vec<String>,
}

/// Outcome of a single budget within a preview sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PreviewOutcome {
    /// The budget produced a result; key metrics are summarized.
    Summary {
        /// Number of coordinates retained.
        simplified_count: usize,
        /// Percentage of coordinates removed.
        reduction_ratio: f64,
        /// Percentage of the original path length preserved.
        length_preserved: f64,
        /// Whether the budget was judged adequate for the shape.
        was_sufficient: bool,
        /// Number of warnings the run produced.
        warning_count: usize,
    },
    /// The budget failed with a typed error.
    Failed {
        /// Error kind name (see [`SimplifyError::kind`]).
        kind: String,
        /// Human-readable error message.
        message: String,
    },
}

/// Validation and complexity report for a geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryReport {
    /// Number of coordinate entries.
    pub coordinate_count: usize,

    /// Total great-circle path length in meters.
    pub total_length_m: f64,

    /// Estimated minimum coordinate count for a faithful representation.
    pub minimum_required: usize,

    /// Corners detected at the default angle threshold.
    pub corner_count: usize,

    /// Curve points detected at the default window and threshold.
    pub curve_count: usize,

    /// `(corner_count + curve_count) / coordinate_count`.
    pub complexity_score: f64,
}

/// Errors surfaced by the simplification facade.
///
/// Both variants are terminal: they describe input problems, not
/// transient conditions, and are never retried internally. Quality
/// concerns that do not invalidate the call are reported as warnings
/// in [`SimplificationResult`] instead.
#[derive(Debug, thiserror::Error)]
pub enum SimplifyError {
    /// Input is not a usable LineString geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The requested coordinate limit is below the structural minimum.
    #[error(
        "cannot represent this geometry with {provided_limit} coordinates \
         (minimum required: {minimum_required})"
    )]
    InsufficientCoordinates {
        /// Fewest coordinates the geometry needs.
        minimum_required: usize,
        /// The limit the caller asked for.
        provided_limit: usize,
    },
}

impl SimplifyError {
    /// Stable kind name for reports and preview summaries.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidGeometry(_) => "InvalidGeometry",
            Self::InsufficientCoordinates { .. } => "InsufficientCoordinates",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- Coordinate tests ---

    #[test]
    fn coordinate_new() {
        let c = Coordinate::new(-122.4194, 37.7749);
        assert!((c.lon - -122.4194).abs() < f64::EPSILON);
        assert!((c.lat - 37.7749).abs() < f64::EPSILON);
    }

    #[test]
    fn coordinate_equality() {
        assert_eq!(Coordinate::new(1.0, 2.0), Coordinate::new(1.0, 2.0));
        assert_ne!(Coordinate::new(1.0, 2.0), Coordinate::new(1.0, 3.0));
    }

    // --- SimplifyConfig tests ---

    #[test]
    fn config_defaults() {
        let config = SimplifyConfig::default();
        assert!(config.preserve_corners);
        assert!(config.preserve_curves);
        assert!((config.corner_angle_deg - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.curve_window, 5);
        assert!((config.curve_threshold_deg - 45.0).abs() < f64::EPSILON);
    }

    // --- SimplifyError tests ---

    #[test]
    fn error_invalid_geometry_display() {
        let err = SimplifyError::InvalidGeometry("expected LineString".to_owned());
        assert_eq!(err.to_string(), "invalid geometry: expected LineString");
    }

    #[test]
    fn error_insufficient_coordinates_display() {
        let err = SimplifyError::InsufficientCoordinates {
            minimum_required: 5,
            provided_limit: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot represent this geometry with 3 coordinates (minimum required: 5)",
        );
    }

    #[test]
    fn error_kind_names() {
        assert_eq!(
            SimplifyError::InvalidGeometry(String::new()).kind(),
            "InvalidGeometry",
        );
        assert_eq!(
            SimplifyError::InsufficientCoordinates {
                minimum_required: 2,
                provided_limit: 1,
            }
            .kind(),
            "InsufficientCoordinates",
        );
    }

    // --- Serde round-trip tests ---

    #[test]
    fn coordinate_serde_round_trip() {
        let c = Coordinate::new(-0.1278, 51.5074);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = SimplifyConfig {
            preserve_corners: false,
            preserve_curves: true,
            corner_angle_deg: 20.0,
            curve_window: 3,
            curve_threshold_deg: 60.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimplifyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn result_serde_round_trip() {
        let result = SimplificationResult {
            geometry: Geometry::line_string(vec![vec![0.0, 0.0], vec![1.0, 1.0]]),
            original_count: 8,
            simplified_count: 2,
            reduction_ratio: 75.0,
            length_preserved: 99.5,
            was_sufficient: false,
            warnings: vec!["example warning".to_owned()],
        };
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: SimplificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn preview_outcome_serde_round_trip() {
        let summary = PreviewOutcome::Summary {
            simplified_count: 4,
            reduction_ratio: 50.0,
            length_preserved: 97.2,
            was_sufficient: true,
            warning_count: 0,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PreviewOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);

        let failed = PreviewOutcome::Failed {
            kind: "InsufficientCoordinates".to_owned(),
            message: "cannot represent this geometry with 1 coordinates".to_owned(),
        };
        let json = serde_json::to_string(&failed).unwrap();
        let deserialized: PreviewOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(failed, deserialized);
    }

    #[test]
    fn report_serde_round_trip() {
        let report = GeometryReport {
            coordinate_count: 8,
            total_length_m: 7000.0,
            minimum_required: 5,
            corner_count: 8,
            curve_count: 0,
            complexity_score: 1.0,
        };
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: GeometryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
