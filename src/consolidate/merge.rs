//! Collapse a cluster of fragments into one segment spanning its full extent.
use crate::angle::unit_direction;
use crate::segments::RawSegment;
use nalgebra::{Matrix2, SymmetricEigen};

/// Merge `members` (non-empty, non-degenerate) into a single segment.
///
/// The direction is the principal axis of the length-weighted scatter of
/// member tangents, oriented like the first member. The line passes through
/// the length-weighted centroid of member midpoints; the endpoints are the
/// smallest and largest projections of all member endpoints onto it, rounded
/// and clamped into the `width × height` raster.
pub(super) fn merge_cluster(members: &[RawSegment], width: usize, height: usize) -> RawSegment {
    if members.len() == 1 {
        return members[0];
    }

    let mut scatter = Matrix2::<f32>::zeros();
    let mut centroid = [0.0f32; 2];
    let mut total = 0.0f32;
    for seg in members {
        let p0 = [seg.p0[0] as f32, seg.p0[1] as f32];
        let p1 = [seg.p1[0] as f32, seg.p1[1] as f32];
        let Some(d) = unit_direction(p0, p1) else {
            continue;
        };
        let len = seg.length();
        scatter += Matrix2::new(d[0] * d[0], d[0] * d[1], d[0] * d[1], d[1] * d[1]) * len;
        let mid = seg.midpoint();
        centroid[0] += mid[0] * len;
        centroid[1] += mid[1] * len;
        total += len;
    }
    if total <= 0.0 {
        return members[0];
    }
    centroid[0] /= total;
    centroid[1] /= total;

    let eig = SymmetricEigen::new(scatter);
    let axis = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
        eig.eigenvectors.column(0)
    } else {
        eig.eigenvectors.column(1)
    };
    let norm = (axis[0] * axis[0] + axis[1] * axis[1]).sqrt();
    if !norm.is_finite() || norm < 1e-6 {
        return members[0];
    }
    let mut dir = [axis[0] / norm, axis[1] / norm];

    let first = members[0];
    let lead = [
        (first.p1[0] - first.p0[0]) as f32,
        (first.p1[1] - first.p0[1]) as f32,
    ];
    if dir[0] * lead[0] + dir[1] * lead[1] < 0.0 {
        dir = [-dir[0], -dir[1]];
    }

    let mut t_min = f32::INFINITY;
    let mut t_max = f32::NEG_INFINITY;
    for seg in members {
        for p in [seg.p0, seg.p1] {
            let t = (p[0] as f32 - centroid[0]) * dir[0] + (p[1] as f32 - centroid[1]) * dir[1];
            t_min = t_min.min(t);
            t_max = t_max.max(t);
        }
    }

    let place = |t: f32| -> [i32; 2] {
        let x = (centroid[0] + t * dir[0]).round() as i32;
        let y = (centroid[1] + t * dir[1]).round() as i32;
        [
            x.clamp(0, (width as i32 - 1).max(0)),
            y.clamp(0, (height as i32 - 1).max(0)),
        ]
    };
    RawSegment::new(place(t_min), place(t_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_member_is_returned_unchanged() {
        let seg = RawSegment::new([40, 3], [2, 7]);
        assert_eq!(merge_cluster(&[seg], 100, 100), seg);
    }

    #[test]
    fn fragments_span_the_full_extent() {
        let members = [
            RawSegment::new([10, 10], [10, 60]),
            RawSegment::new([10, 65], [10, 120]),
            RawSegment::new([10, 123], [10, 190]),
        ];
        let merged = merge_cluster(&members, 200, 200);
        assert_eq!(merged, RawSegment::new([10, 10], [10, 190]));
    }

    #[test]
    fn orientation_follows_first_member() {
        let members = [
            RawSegment::new([150, 40], [20, 40]),
            RawSegment::new([160, 40], [180, 40]),
        ];
        let merged = merge_cluster(&members, 200, 200);
        assert_eq!(merged, RawSegment::new([180, 40], [20, 40]));
    }

    #[test]
    fn parallel_edges_merge_onto_their_centre_line() {
        let members = [
            RawSegment::new([8, 20], [8, 180]),
            RawSegment::new([12, 180], [12, 20]),
        ];
        let merged = merge_cluster(&members, 200, 200);
        assert_eq!(merged, RawSegment::new([10, 20], [10, 180]));
    }

    #[test]
    fn endpoints_are_clamped_into_the_raster() {
        let members = [
            RawSegment::new([0, 0], [0, 49]),
            RawSegment::new([1, 0], [1, 49]),
        ];
        let merged = merge_cluster(&members, 2, 50);
        for p in [merged.p0, merged.p1] {
            assert!((0..2).contains(&p[0]) && (0..50).contains(&p[1]), "{merged:?}");
        }
    }
}
