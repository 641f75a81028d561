//! Diagnostics returned alongside a detection.
//!
//! [`DetectionReport`] bundles the [`Detection`](crate::Detection) with a
//! [`PipelineTrace`]: input geometry, per-stage counts, consolidation
//! counters and stage timings.

pub mod report;
pub mod timing;

pub use report::{DetectionReport, InputDescriptor, PipelineTrace, StageCounts};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
