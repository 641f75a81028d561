//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For every pixel above the low threshold the gradient direction is
//! quantized to one of four axes (0°, 45°, 90°, 135°) and the magnitude is
//! compared against the two neighbours along that axis. The comparison is
//! strict on one side and non-strict on the other so that a flat two-pixel
//! ridge (common on hard-edged line art) keeps exactly one pixel.
//!
//! Pixels outside the image are treated as zero magnitude.
use crate::edges::grad::Grad;
use crate::image::{ImageF32, ImageView};

const TAN_22_5_DEG: f32 = 0.414_213_57;

/// Classification of a pixel after suppression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EdgeClass {
    None = 0,
    /// Local maximum between the low and high thresholds.
    Weak = 1,
    /// Local maximum above the high threshold.
    Strong = 2,
}

#[inline]
fn mag_at(mag: &ImageF32, x: isize, y: isize) -> f32 {
    if x < 0 || y < 0 || x >= mag.w as isize || y >= mag.h as isize {
        0.0
    } else {
        mag.get(x as usize, y as usize)
    }
}

/// Suppress non-maxima and classify survivors against `low` / `high`.
pub fn run_nms(grad: &Grad, low: f32, high: f32) -> Vec<EdgeClass> {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut classes = vec![EdgeClass::None; w * h];

    for y in 0..h {
        let mag_row = grad.mag.row(y);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let yi = y as isize;

        for x in 0..w {
            let m = mag_row[x];
            if m <= low {
                continue;
            }
            let xi = x as isize;
            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let tg22x = abs_gx * TAN_22_5_DEG;

            let is_max = if abs_gy < tg22x {
                m > mag_at(&grad.mag, xi - 1, yi) && m >= mag_at(&grad.mag, xi + 1, yi)
            } else if abs_gy > tg22x + 2.0 * abs_gx {
                m > mag_at(&grad.mag, xi, yi - 1) && m >= mag_at(&grad.mag, xi, yi + 1)
            } else {
                let s: isize = if (gx < 0.0) != (gy < 0.0) { -1 } else { 1 };
                m > mag_at(&grad.mag, xi - s, yi - 1) && m > mag_at(&grad.mag, xi + s, yi + 1)
            };

            if is_max {
                classes[y * w + x] = if m > high {
                    EdgeClass::Strong
                } else {
                    EdgeClass::Weak
                };
            }
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::grad::sobel_gradients;

    #[test]
    fn flat_ridge_keeps_a_single_pixel() {
        // Hard step: gx is 1020 on both columns 3 and 4.
        let img = ImageF32::from_fn(8, 8, |x, _| if x < 4 { 0.0 } else { 255.0 });
        let grad = sobel_gradients(&img, 3, false).unwrap();
        let classes = run_nms(&grad, 50.0, 150.0);
        let row: Vec<EdgeClass> = (0..8).map(|x| classes[4 * 8 + x]).collect();
        assert_eq!(row[3], EdgeClass::Strong);
        assert_eq!(row[4], EdgeClass::None);
        assert_eq!(row.iter().filter(|&&c| c != EdgeClass::None).count(), 1);
    }

    #[test]
    fn weak_maxima_are_labelled_weak() {
        let img = ImageF32::from_fn(8, 8, |x, _| if x < 4 { 0.0 } else { 25.0 });
        let grad = sobel_gradients(&img, 3, false).unwrap();
        let classes = run_nms(&grad, 50.0, 150.0);
        assert_eq!(classes[2 * 8 + 3], EdgeClass::Weak);
    }
}
