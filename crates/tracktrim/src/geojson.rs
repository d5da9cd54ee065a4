//! GeoJSON LineString decoding and validation.
//!
//! The facade accepts geometry either as an already-decoded
//! [`Geometry`] value or as GeoJSON text. Validation happens eagerly,
//! before any algorithmic work, and produces the flat coordinate
//! buffer the rest of the pipeline operates on.

use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, SimplifyError};

/// A decoded GeoJSON geometry object.
///
/// Coordinate entries keep every component they arrived with: only the
/// first two (longitude, latitude) participate in the geometry, and
/// entries selected for the output are copied through whole, so a
/// third altitude component survives simplification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geometry type tag; only `"LineString"` is accepted.
    #[serde(rename = "type")]
    pub kind: String,

    /// Coordinate entries, `[lon, lat, ...]` each.
    pub coordinates: Vec<Vec<f64>>,
}

impl Geometry {
    /// Create a LineString geometry from coordinate entries.
    #[must_use]
    pub fn line_string(coordinates: Vec<Vec<f64>>) -> Self {
        Self {
            kind: "LineString".to_owned(),
            coordinates,
        }
    }

    /// Decode a geometry from GeoJSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidGeometry`] when the text is not
    /// valid JSON or does not have the shape of a geometry object.
    pub fn from_json(text: &str) -> Result<Self, SimplifyError> {
        serde_json::from_str(text)
            .map_err(|e| SimplifyError::InvalidGeometry(format!("invalid JSON: {e}")))
    }
}

/// Validate a geometry as a LineString and extract its lon/lat view.
///
/// Checks, in order: the type tag is `"LineString"`, there are at
/// least 2 entries, every entry has at least 2 components, and every
/// longitude/latitude is within bounds (which also rejects NaN).
///
/// # Errors
///
/// Returns [`SimplifyError::InvalidGeometry`] naming the first
/// violated rule.
pub fn validate_line_string(geometry: &Geometry) -> Result<Vec<Coordinate>, SimplifyError> {
    if geometry.kind != "LineString" {
        return Err(SimplifyError::InvalidGeometry(format!(
            "expected a LineString geometry, got {:?}",
            geometry.kind,
        )));
    }

    if geometry.coordinates.len() < 2 {
        return Err(SimplifyError::InvalidGeometry(
            "a LineString requires at least 2 coordinate entries".to_owned(),
        ));
    }

    let mut coords = Vec::with_capacity(geometry.coordinates.len());
    for (index, entry) in geometry.coordinates.iter().enumerate() {
        let [lon, lat, ..] = entry.as_slice() else {
            return Err(SimplifyError::InvalidGeometry(format!(
                "coordinate entry {index} has fewer than 2 components",
            )));
        };
        if !(-180.0..=180.0).contains(lon) {
            return Err(SimplifyError::InvalidGeometry(format!(
                "coordinate entry {index}: longitude {lon} outside [-180, 180]",
            )));
        }
        if !(-90.0..=90.0).contains(lat) {
            return Err(SimplifyError::InvalidGeometry(format!(
                "coordinate entry {index}: latitude {lat} outside [-90, 90]",
            )));
        }
        coords.push(Coordinate::new(*lon, *lat));
    }

    Ok(coords)
}
