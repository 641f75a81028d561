use super::TimingBreakdown;
use crate::consolidate::ConsolidationStats;
use crate::detector::Detection;
use serde::Serialize;

/// Result of [`PipelineDetector::process_with_diagnostics`](crate::PipelineDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    #[serde(flatten)]
    pub detection: Detection,
    pub trace: PipelineTrace,
}

/// What each stage produced and how long it took.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub counts: StageCounts,
    pub consolidation: ConsolidationStats,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub edge_pixels: usize,
    pub raw_segments: usize,
    /// Raw segments left after the length floor.
    pub kept_segments: usize,
    pub pipelines: usize,
}
