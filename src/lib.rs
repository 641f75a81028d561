#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod segments;

// Stage modules, public for tools and tuning.
pub mod angle;
pub mod consolidate;
pub mod edges;
pub mod hough;
pub mod preprocess;
pub mod render;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{Detection, DetectorParams, PipelineDetector};
pub use crate::error::{PipelineError, Result};
pub use crate::image::RasterImage;
pub use crate::render::Overlay;
pub use crate::segments::{PipelineSegment, RawSegment};

pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pipeline_detector::prelude::*;
///
/// # fn main() -> Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let raster = RasterImage::filled(w, h, 1, 255);
///
/// let detector = PipelineDetector::new(DetectorParams {
///     visualize: true,
///     ..Default::default()
/// })?;
///
/// let detection = detector.process(&raster)?;
/// println!("pipelines={}", detection.pipelines.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        Detection, DetectorParams, PipelineDetector, PipelineError, PipelineSegment, RasterImage,
        Result,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::consolidate::{consolidate, ConsolidateOptions, ConsolidationResult};
    pub use crate::edges::{canny, CannyOptions, EdgeMap};
    pub use crate::hough::{probabilistic_hough, HoughOptions};
    pub use crate::preprocess::{preprocess, to_intensity, PreprocessOptions};
    pub use crate::render::{render_overlay, RenderOptions};
}
