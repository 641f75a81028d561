use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic Hough transform.
///
/// - `rho` / `theta_deg`: accumulator resolution (pixels / degrees).
/// - `min_votes`: accumulator count a bin must reach before a line is traced.
/// - `min_line_length`: a traced run is kept when its horizontal or vertical
///   extent reaches this many pixels.
/// - `max_line_gap`: consecutive missing edge pixels tolerated while tracing.
/// - `max_lines`: optional cap on the number of emitted segments.
/// - `seed`: seed of the random point order; equal seeds give equal output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    pub rho: f32,
    pub theta_deg: f32,
    pub min_votes: u32,
    pub min_line_length: u32,
    pub max_line_gap: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    pub seed: u64,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta_deg: 1.0,
            min_votes: 50,
            min_line_length: 30,
            max_line_gap: 10,
            max_lines: None,
            seed: 0xFFFF_FFFF,
        }
    }
}

impl HoughOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.rho.is_finite() && self.rho > 0.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "rho must be positive, got {}",
                self.rho
            )));
        }
        if !(self.theta_deg.is_finite() && self.theta_deg > 0.0 && self.theta_deg <= 180.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "theta_deg must be in (0, 180], got {}",
                self.theta_deg
            )));
        }
        if self.max_lines == Some(0) {
            return Err(PipelineError::InvalidConfig(
                "max_lines must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
