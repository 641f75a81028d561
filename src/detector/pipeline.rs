//! Detector orchestrating Preprocess → Canny → Hough → Consolidate → Render.
//!
//! Typical usage:
//! ```no_run
//! use pipeline_detector::{DetectorParams, PipelineDetector};
//! use pipeline_detector::image::io::load_raster;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raster = load_raster(Path::new("page.png"))?;
//! let detector = PipelineDetector::new(DetectorParams::default())?;
//! let detection = detector.process(&raster)?;
//! println!("{} pipelines", detection.pipelines.len());
//! # Ok(())
//! # }
//! ```

use super::{Detection, DetectorParams};
use crate::consolidate::{consolidate, ConsolidationResult};
use crate::diagnostics::{
    elapsed_ms, DetectionReport, InputDescriptor, PipelineTrace, StageCounts, TimingBreakdown,
};
use crate::edges::canny;
use crate::error::Result;
use crate::hough::probabilistic_hough;
use crate::image::RasterImage;
use crate::preprocess::preprocess;
use crate::render::render_overlay;
use log::{debug, info};
use std::time::Instant;

/// Stateless pipeline extractor. Calls share nothing but the parameters, so
/// one detector can serve many threads.
#[derive(Clone, Debug)]
pub struct PipelineDetector {
    params: DetectorParams,
}

impl PipelineDetector {
    /// Create a detector, rejecting out-of-domain parameters.
    pub fn new(params: DetectorParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Extract pipelines from `raster`.
    ///
    /// A blank or featureless raster yields an empty detection, not an error.
    pub fn process(&self, raster: &RasterImage) -> Result<Detection> {
        self.process_with_diagnostics(raster)
            .map(|report| report.detection)
    }

    /// Like [`process`](Self::process), also returning stage counts and timings.
    pub fn process_with_diagnostics(&self, raster: &RasterImage) -> Result<DetectionReport> {
        let total_start = Instant::now();
        let params = &self.params;
        let mut timings = TimingBreakdown::default();

        let intensity = timings.measure("preprocess", || preprocess(raster, &params.preprocess))?;
        let edges = timings.measure("canny", || canny(&intensity, &params.canny))?;
        drop(intensity);
        let raw = timings.measure("hough", || probabilistic_hough(&edges, &params.hough))?;
        let edge_pixels = edges.count();
        drop(edges);

        let consolidate_options = params.consolidate_options();
        let ConsolidationResult {
            segments,
            stats: consolidation,
        } = timings.measure("consolidate", || {
            consolidate(&raw, raster.width, raster.height, &consolidate_options)
        });

        let visualization = if params.visualize {
            Some(timings.measure("render", || {
                render_overlay(raster, &segments, &params.render)
            })?)
        } else {
            None
        };

        timings.total_ms = elapsed_ms(total_start);
        let counts = StageCounts {
            edge_pixels,
            raw_segments: raw.len(),
            kept_segments: consolidation.input - consolidation.below_floor,
            pipelines: segments.len(),
        };
        debug!("detector counts: {counts:?}");
        info!(
            "detected {} pipelines in {}x{} raster ({:.2} ms)",
            counts.pipelines, raster.width, raster.height, timings.total_ms
        );

        Ok(DetectionReport {
            detection: Detection {
                pipelines: segments,
                visualization,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: raster.width,
                    height: raster.height,
                    channels: raster.channels,
                },
                counts,
                consolidation,
                timings,
            },
        })
    }
}
