//! Parameter types configuring the detector stages.
//!
//! Every struct deserialises with per-field defaults, so a config file only
//! needs the knobs it changes. Defaults suit scanned engineering diagrams:
//! dark thin strokes on a light sheet.

use crate::consolidate::ConsolidateOptions;
use crate::edges::CannyOptions;
use crate::error::Result;
use crate::hough::HoughOptions;
use crate::preprocess::PreprocessOptions;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters for the extraction pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    pub preprocess: PreprocessOptions,
    /// Edge thresholds and gradient aperture.
    pub canny: CannyOptions,
    /// Line-detection thresholds.
    pub hough: HoughOptions,
    /// Clustering tolerances and the length floor. An unset floor follows
    /// `hough.min_line_length`.
    pub consolidate: ConsolidateOptions,
    pub render: RenderOptions,
    /// Draw the detected pipelines on a copy of the input.
    pub visualize: bool,
}

impl DetectorParams {
    /// Check every stage's options before any pixel is touched.
    pub fn validate(&self) -> Result<()> {
        self.canny.validate()?;
        self.hough.validate()?;
        self.consolidate.validate()?;
        self.render.validate()
    }

    /// Consolidation options with the length floor resolved.
    pub fn consolidate_options(&self) -> ConsolidateOptions {
        self.consolidate
            .with_default_floor(self.hough.min_line_length as f32)
    }

    pub fn with_visualization(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }
}
