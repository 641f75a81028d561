//! Removal of near-identical output segments.
use crate::segments::PipelineSegment;

#[inline]
fn within(p: [i32; 2], q: [i32; 2], tol: f32) -> bool {
    let dx = (p[0] - q[0]) as f32;
    let dy = (p[1] - q[1]) as f32;
    (dx * dx + dy * dy).sqrt() <= tol
}

/// Both endpoints within `tol` of each other, in either endpoint order.
pub fn near_duplicate(a: &PipelineSegment, b: &PipelineSegment, tol: f32) -> bool {
    (within(a.source, b.source, tol) && within(a.destination, b.destination, tol))
        || (within(a.source, b.destination, tol) && within(a.destination, b.source, tol))
}

/// First pair `(i, j)` with `i < j` that are near-duplicates.
fn first_duplicate_pair(segments: &[PipelineSegment], tol: f32) -> Option<(usize, usize)> {
    (0..segments.len()).find_map(|i| {
        ((i + 1)..segments.len())
            .find(|&j| near_duplicate(&segments[i], &segments[j], tol))
            .map(|j| (i, j))
    })
}

/// Collapse near-duplicates until no pair remains. Each collapse keeps the
/// earlier slot and the longer geometry; a replaced geometry is checked
/// again against every other survivor. Returns the surviving segments and
/// the number dropped.
pub(super) fn dedup(
    mut segments: Vec<PipelineSegment>,
    tol: f32,
) -> (Vec<PipelineSegment>, usize) {
    let mut dropped = 0;
    while let Some((i, j)) = first_duplicate_pair(&segments, tol) {
        let later = segments.remove(j);
        if later.length() > segments[i].length() {
            segments[i] = later;
        }
        dropped += 1;
    }
    (segments, dropped)
}
