//! Segment consolidation: turn noisy detector output into one segment per
//! physical pipeline stroke.
//!
//! Steps
//! 1. Drop raw segments shorter than the length floor (extraction noise).
//! 2. Cluster the rest by the pairwise [`joinable`] test. Clusters are the
//!    connected components of the join relation (disjoint-set union), so a
//!    chain of fragments collapses even when its ends are far apart.
//! 3. Merge each cluster into a segment spanning the full extent of its
//!    members along their dominant direction.
//! 4. Repeat 2–3 on the merged segments until nothing joins, so the output is
//!    a fixed point of the join test.
//! 5. Drop zero-length and short results, then collapse near-duplicates,
//!    keeping the longer geometry.
//!
//! Output order is the order in which each cluster's first raw segment was
//! produced by the detector. Consolidation never fails; empty input gives an
//! empty result.

mod dedup;
mod disjoint_set;
mod join;
mod merge;
mod options;


pub use dedup::near_duplicate;
pub use join::joinable;
pub use options::{ConsolidateOptions, DEFAULT_MIN_LENGTH};

use crate::segments::{PipelineSegment, RawSegment};
use disjoint_set::DisjointSet;
use log::debug;
use serde::Serialize;

/// Counters describing one consolidation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationStats {
    pub input: usize,
    pub below_floor: usize,
    /// Clusters found by the first clustering pass.
    pub clusters: usize,
    pub merge_passes: usize,
    pub duplicates: usize,
    pub output: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ConsolidationResult {
    pub segments: Vec<PipelineSegment>,
    pub stats: ConsolidationStats,
}

/// Consolidate `raw` segments detected on a `width × height` raster.
pub fn consolidate(
    raw: &[RawSegment],
    width: usize,
    height: usize,
    options: &ConsolidateOptions,
) -> ConsolidationResult {
    let floor = options.length_floor();
    let mut stats = ConsolidationStats {
        input: raw.len(),
        ..Default::default()
    };

    // (segment, index of its earliest raw constituent), kept sorted by index.
    let mut items: Vec<(RawSegment, usize)> = raw
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, seg)| !seg.is_degenerate() && seg.length() >= floor)
        .map(|(i, seg)| (seg, i))
        .collect();
    stats.below_floor = raw.len() - items.len();

    loop {
        let groups = cluster(&items, options);
        stats.merge_passes += 1;
        if stats.merge_passes == 1 {
            stats.clusters = groups.len();
        }
        if groups.len() == items.len() {
            break;
        }
        items = groups
            .iter()
            .map(|group| {
                let members: Vec<RawSegment> = group.iter().map(|&i| items[i].0).collect();
                (merge::merge_cluster(&members, width, height), items[group[0]].1)
            })
            .collect();
    }

    let segments: Vec<PipelineSegment> = items
        .into_iter()
        .map(|(seg, _)| PipelineSegment::from(seg))
        .filter(|seg| seg.source != seg.destination && seg.length() >= floor)
        .collect();
    let (segments, duplicates) = dedup::dedup(segments, options.distance_tolerance_px);
    stats.duplicates = duplicates;
    stats.output = segments.len();

    debug!(
        "consolidate: {} raw, {} below floor, {} clusters, {} passes, {} duplicates -> {} segments",
        stats.input,
        stats.below_floor,
        stats.clusters,
        stats.merge_passes,
        stats.duplicates,
        stats.output
    );

    ConsolidationResult { segments, stats }
}

/// Connected components of the join relation, ordered by first member.
fn cluster(items: &[(RawSegment, usize)], options: &ConsolidateOptions) -> Vec<Vec<usize>> {
    let mut sets = DisjointSet::new(items.len());
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if sets.find(i) != sets.find(j) && joinable(&items[i].0, &items[j].0, options) {
                sets.union(i, j);
            }
        }
    }
    sets.groups()
}
