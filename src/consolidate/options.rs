use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Length floor used when neither the options nor the detector set one.
pub const DEFAULT_MIN_LENGTH: f32 = 30.0;

/// Tolerances steering how detector fragments collapse into pipeline runs.
///
/// Two segments join the same cluster when all three hold:
/// - their orientations differ by at most `angle_tolerance_deg` (modulo 180°),
/// - each midpoint lies within `distance_tolerance_px` of the other's line,
/// - the gap between their extents along the shared direction is at most
///   `max_merge_gap_px`.
///
/// `distance_tolerance_px` also bounds endpoint displacement for the
/// near-duplicate check.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidateOptions {
    /// Segments shorter than this (Euclidean, pixels) are treated as noise.
    /// `None` follows the Hough `min_line_length` inside the detector and
    /// [`DEFAULT_MIN_LENGTH`] elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f32>,
    pub angle_tolerance_deg: f32,
    pub distance_tolerance_px: f32,
    pub max_merge_gap_px: f32,
}

impl Default for ConsolidateOptions {
    fn default() -> Self {
        Self {
            min_length: None,
            angle_tolerance_deg: 5.0,
            distance_tolerance_px: 5.0,
            max_merge_gap_px: 10.0,
        }
    }
}

impl ConsolidateOptions {
    pub fn length_floor(&self) -> f32 {
        self.min_length.unwrap_or(DEFAULT_MIN_LENGTH)
    }

    /// Copy with an unset length floor replaced by `floor`.
    pub fn with_default_floor(&self, floor: f32) -> Self {
        Self {
            min_length: Some(self.min_length.unwrap_or(floor)),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_length", self.length_floor()),
            ("angle_tolerance_deg", self.angle_tolerance_deg),
            ("distance_tolerance_px", self.distance_tolerance_px),
            ("max_merge_gap_px", self.max_merge_gap_px),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PipelineError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.angle_tolerance_deg >= 90.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "angle_tolerance_deg must be below 90, got {}",
                self.angle_tolerance_deg
            )));
        }
        Ok(())
    }
}
