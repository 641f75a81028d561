//! Image gradients with a configurable Sobel aperture.
//!
//! - Separable Sobel kernels for apertures 3, 5 and 7 (smoothing taps across
//!   the derivative axis, derivative taps along it).
//! - Borders are handled by clamping indices (replicate).
//! - Outputs per-pixel `gx`, `gy` and a magnitude that is either the L1 norm
//!   `|gx| + |gy|` or the Euclidean norm.
//!
//! Complexity: O(W·H·k) per pass for aperture `k`.
use crate::error::{PipelineError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

const SMOOTH_3: [f32; 3] = [1.0, 2.0, 1.0];
const DERIV_3: [f32; 3] = [-1.0, 0.0, 1.0];
const SMOOTH_5: [f32; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];
const DERIV_5: [f32; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];
const SMOOTH_7: [f32; 7] = [1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0];
const DERIV_7: [f32; 7] = [-1.0, -4.0, -5.0, 0.0, 5.0, 4.0, 1.0];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug, Default)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative
    pub gy: ImageF32,
    /// Gradient magnitude (L1 or L2, see [`sobel_gradients`])
    pub mag: ImageF32,
}

fn sobel_taps(aperture: usize) -> Result<(&'static [f32], &'static [f32])> {
    match aperture {
        3 => Ok((&SMOOTH_3, &DERIV_3)),
        5 => Ok((&SMOOTH_5, &DERIV_5)),
        7 => Ok((&SMOOTH_7, &DERIV_7)),
        other => Err(PipelineError::InvalidConfig(format!(
            "aperture size must be 3, 5 or 7, got {other}"
        ))),
    }
}

/// Apply `along_x` horizontally and `along_y` vertically.
fn separable(l: &ImageF32, along_x: &[f32], along_y: &[f32]) -> ImageF32 {
    let rx = (along_x.len() / 2) as isize;
    let ry = (along_y.len() / 2) as isize;
    let mut tmp = ImageF32::new(l.w, l.h);
    for y in 0..l.h {
        let out = tmp.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            *dst = along_x
                .iter()
                .enumerate()
                .map(|(k, &t)| t * l.get_clamped(x as isize + k as isize - rx, y as isize))
                .sum();
        }
    }
    let mut out = ImageF32::new(l.w, l.h);
    for y in 0..l.h {
        let row = out.row_mut(y);
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = along_y
                .iter()
                .enumerate()
                .map(|(k, &t)| t * tmp.get_clamped(x as isize, y as isize + k as isize - ry))
                .sum();
        }
    }
    out
}

/// Compute Sobel gradients on a single-channel float image.
///
/// `l2` selects the Euclidean magnitude; otherwise `|gx| + |gy|` is used.
pub fn sobel_gradients(l: &ImageF32, aperture: usize, l2: bool) -> Result<Grad> {
    let (smooth, deriv) = sobel_taps(aperture)?;
    if l.is_empty() {
        return Ok(Grad {
            gx: ImageF32::new(l.w, l.h),
            gy: ImageF32::new(l.w, l.h),
            mag: ImageF32::new(l.w, l.h),
        });
    }

    let gx = separable(l, deriv, smooth);
    let gy = separable(l, smooth, deriv);
    let mag_data = gx
        .data
        .iter()
        .zip(&gy.data)
        .map(|(&dx, &dy)| {
            if l2 {
                (dx * dx + dy * dy).sqrt()
            } else {
                dx.abs() + dy.abs()
            }
        })
        .collect();
    let mag = ImageF32 {
        w: l.w,
        h: l.h,
        data: mag_data,
    };
    Ok(Grad { gx, gy, mag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(width: usize, height: usize, split_x: usize) -> ImageF32 {
        ImageF32::from_fn(width, height, |x, _| if x < split_x { 0.0 } else { 255.0 })
    }

    #[test]
    fn vertical_step_has_horizontal_gradient_only() {
        let img = step_image(8, 6, 4);
        let grad = sobel_gradients(&img, 3, false).unwrap();
        assert!((grad.gx.get(3, 3) - 1020.0).abs() < 1e-3);
        assert!((grad.gx.get(4, 3) - 1020.0).abs() < 1e-3);
        assert_eq!(grad.gx.get(1, 3), 0.0);
        assert!(grad.gy.data.iter().all(|&v| v.abs() < 1e-3));
        assert_eq!(grad.mag.get(3, 3), grad.gx.get(3, 3).abs());
    }

    #[test]
    fn l2_magnitude_is_euclidean() {
        let img = ImageF32::from_fn(6, 6, |x, y| (x + y) as f32 * 10.0);
        let grad = sobel_gradients(&img, 3, true).unwrap();
        let (gx, gy) = (grad.gx.get(2, 2), grad.gy.get(2, 2));
        assert!((grad.mag.get(2, 2) - (gx * gx + gy * gy).sqrt()).abs() < 1e-3);
    }

    #[test]
    fn larger_apertures_are_accepted() {
        let img = step_image(12, 12, 6);
        for aperture in [5, 7] {
            let grad = sobel_gradients(&img, aperture, false).unwrap();
            assert!(grad.mag.get(5, 6) > 0.0, "aperture {aperture} found no gradient");
        }
    }

    #[test]
    fn even_aperture_is_rejected() {
        let img = step_image(4, 4, 2);
        assert!(matches!(
            sobel_gradients(&img, 4, false),
            Err(PipelineError::InvalidConfig(_))
        ));
    }
}
