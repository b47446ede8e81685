//! Percentage-space points, camouflage candidates and placed objects

use crate::io::error::{Result, invalid_parameter};
use serde::{Deserialize, Serialize};

/// Margins at or beyond this leave no safe band
pub const MAX_MARGIN_PERCENT: f64 = 50.0;

/// A position expressed as percentages of the background's width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPoint {
    /// Horizontal position in `[0, 100]`
    pub x: f64,
    /// Vertical position in `[0, 100]`
    pub y: f64,
}

impl PercentPoint {
    /// Create a point from percentage coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance in percentage units
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Clamp both axes into `[margin, 100 - margin]`
    pub fn clamped_to_band(self, margin: f64) -> Self {
        Self {
            x: clamp_to_band(self.x, margin),
            y: clamp_to_band(self.y, margin),
        }
    }

    /// Whether both axes lie within `[margin, 100 - margin]`
    pub fn within_band(self, margin: f64) -> bool {
        let band = margin..=100.0 - margin;
        band.contains(&self.x) && band.contains(&self.y)
    }
}

/// Clamp one percentage coordinate into `[margin, 100 - margin]`
///
/// A margin that leaves no band collapses every value to the centre.
pub fn clamp_to_band(value: f64, margin: f64) -> f64 {
    let upper = 100.0 - margin;
    if margin <= upper {
        value.clamp(margin, upper)
    } else {
        MAX_MARGIN_PERCENT
    }
}

/// Check that `margin` leaves a non-empty safe band
///
/// # Errors
///
/// Returns an error unless `margin` is finite and within `[0, 50)`
pub fn check_margin(parameter: &'static str, margin: f64) -> Result<()> {
    if (0.0..MAX_MARGIN_PERCENT).contains(&margin) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &margin,
            &"margin must lie within [0, 50)",
        ))
    }
}

/// A scored background location produced by camouflage analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateSpot {
    /// Horizontal position in percent of the source image width
    pub x_percent: f64,
    /// Vertical position in percent of the source image height
    pub y_percent: f64,
    /// Heuristic blending quality, higher hides better
    pub blend_score: f64,
}

impl CandidateSpot {
    /// Location of the candidate
    pub const fn position(&self) -> PercentPoint {
        PercentPoint::new(self.x_percent, self.y_percent)
    }
}

/// One hidden object instance in a generated level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Identifier unique within the level
    pub id: String,
    /// Horizontal centre in percent
    pub x_percent: f64,
    /// Vertical centre in percent
    pub y_percent: f64,
    /// Rotation in `[0, 360)`
    pub rotation_degrees: f64,
    /// Scale within the tier's scale range
    pub scale: f64,
    /// Opacity, never above the tier's base opacity
    pub opacity: f64,
    /// Hue rotation in `[0, 360)`
    pub hue_shift_degrees: f64,
    /// Index into the variant catalog used at generation time
    pub variant_index: usize,
    /// Image reference of the chosen variant
    pub variant: String,
    /// Set once when the player finds the object
    pub found: bool,
}

impl PlacedObject {
    /// Centre of the object
    pub const fn position(&self) -> PercentPoint {
        PercentPoint::new(self.x_percent, self.y_percent)
    }
}

/// Whether `point` keeps at least `min_separation` from every placed object
pub fn is_clear_of(point: PercentPoint, placed: &[PlacedObject], min_separation: f64) -> bool {
    placed
        .iter()
        .all(|object| object.position().distance_to(point) >= min_separation)
}
