//! Pipeline detector: from a decoded raster to consolidated pipeline runs.
//!
//! Stages
//! - Preprocess: luma reduction and a light Gaussian blur.
//! - Canny: Sobel gradients, non-maximum suppression, 8-connected hysteresis.
//! - Hough: probabilistic transform emitting raw segments.
//! - Consolidate: length floor, transitive clustering, extent merge, dedup.
//! - Render (only when `visualize`): segments drawn on an RGB copy.
//!
//! Modules
//! - [`params`]: configuration consumed by [`PipelineDetector`].
//! - `detection`: the [`Detection`] output document.
//! - `pipeline`: the detector itself.

mod detection;
pub mod params;
mod pipeline;

pub use detection::Detection;
pub use params::DetectorParams;
pub use pipeline::PipelineDetector;
