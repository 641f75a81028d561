//! Angle helpers for comparing line orientations.

/// Unit vector pointing from `p0` to `p1`, or `None` for coincident points.
#[inline]
pub fn unit_direction(p0: [f32; 2], p1: [f32; 2]) -> Option<[f32; 2]> {
    let dx = p1[0] - p0[0];
    let dy = p1[1] - p0[1];
    let len = (dx * dx + dy * dy).sqrt();
    (len > 1e-6).then(|| [dx / len, dy / len])
}

/// Computes the orientation difference between two 2D vectors while treating
/// antipodal directions as equivalent. Returns a value in [0, π/2].
///
/// This is the right comparison for segment tangents, whose endpoint order
/// is arbitrary.
#[inline]
pub fn angle_between_dirless(a: &[f32; 2], b: &[f32; 2]) -> f32 {
    let dot = a[0] * b[0] + a[1] * b[1];
    let na = (a[0] * a[0] + a[1] * a[1]).sqrt().max(1e-6);
    let nb = (b[0] * b[0] + b[1] * b[1]).sqrt().max(1e-6);
    let cos = (dot / (na * nb)).abs().clamp(0.0, 1.0);
    cos.acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn dirless_angle_ignores_sign() {
        let a = [1.0f32, 0.0];
        let c = [-1.0f32, 0.0];
        assert!(approx_eq(angle_between_dirless(&a, &c), 0.0));

        let d = [0.0f32, 1.0];
        assert!(approx_eq(
            angle_between_dirless(&a, &d),
            std::f32::consts::FRAC_PI_2
        ));

        let e = [1.0f32, 1.0];
        assert!(approx_eq(
            angle_between_dirless(&c, &e),
            std::f32::consts::FRAC_PI_4
        ));
    }

    #[test]
    fn unit_direction_normalises() {
        let d = unit_direction([1.0, 1.0], [4.0, 5.0]).unwrap();
        assert!(approx_eq(d[0], 0.6) && approx_eq(d[1], 0.8));
        assert!(unit_direction([2.0, 2.0], [2.0, 2.0]).is_none());
    }
}
