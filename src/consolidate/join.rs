//! Pairwise join test deciding whether two segments belong to one run.
use super::options::ConsolidateOptions;
use crate::angle::{angle_between_dirless, unit_direction};
use crate::segments::RawSegment;

#[inline]
fn to_f32(p: [i32; 2]) -> [f32; 2] {
    [p[0] as f32, p[1] as f32]
}

#[inline]
fn dot(a: [f32; 2], b: [f32; 2]) -> f32 {
    a[0] * b[0] + a[1] * b[1]
}

/// Distance from `p` to the infinite line through `origin` with unit `dir`.
#[inline]
fn perpendicular_distance(p: [f32; 2], origin: [f32; 2], dir: [f32; 2]) -> f32 {
    let v = [p[0] - origin[0], p[1] - origin[1]];
    (v[0] * dir[1] - v[1] * dir[0]).abs()
}

/// Sorted projections of both endpoints onto `dir`, relative to `origin`.
#[inline]
fn extent(seg: &RawSegment, origin: [f32; 2], dir: [f32; 2]) -> (f32, f32) {
    let t0 = dot([seg.p0[0] as f32 - origin[0], seg.p0[1] as f32 - origin[1]], dir);
    let t1 = dot([seg.p1[0] as f32 - origin[0], seg.p1[1] as f32 - origin[1]], dir);
    (t0.min(t1), t0.max(t1))
}

/// Whether `a` and `b` are close enough in orientation, offset and along-line
/// position to be fragments of the same stroke. Degenerate segments never join.
pub fn joinable(a: &RawSegment, b: &RawSegment, options: &ConsolidateOptions) -> bool {
    let (a0, a1) = (to_f32(a.p0), to_f32(a.p1));
    let (b0, b1) = (to_f32(b.p0), to_f32(b.p1));
    let (Some(da), Some(db)) = (unit_direction(a0, a1), unit_direction(b0, b1)) else {
        return false;
    };

    if angle_between_dirless(&da, &db) > options.angle_tolerance_deg.to_radians() {
        return false;
    }

    let offset = perpendicular_distance(b.midpoint(), a0, da)
        .max(perpendicular_distance(a.midpoint(), b0, db));
    if offset > options.distance_tolerance_px {
        return false;
    }

    let (origin, dir) = if a.length() >= b.length() { (a0, da) } else { (b0, db) };
    let (a_min, a_max) = extent(a, origin, dir);
    let (b_min, b_max) = extent(b, origin, dir);
    let gap = (b_min - a_max).max(a_min - b_max).max(0.0);
    gap <= options.max_merge_gap_px
}
