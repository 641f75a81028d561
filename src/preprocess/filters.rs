//! Separable smoothing applied before edge detection.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order); the centre tap sits at
    /// `taps().len() / 2`.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Convolve rows then columns with `filter`, replicating border pixels.
pub fn convolve_separable<F: SeparableFilter>(src: &ImageF32, filter: &F) -> ImageF32 {
    let taps = filter.taps();
    let radius = (taps.len() / 2) as isize;
    let mut horiz = ImageF32::new(src.w, src.h);
    if src.is_empty() {
        return horiz;
    }

    for y in 0..src.h {
        let out = horiz.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                acc += t * src.get_clamped(x as isize + k as isize - radius, y as isize);
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let row = out.row_mut(y);
        for (x, dst) in row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                acc += t * horiz.get_clamped(x as isize, y as isize + k as isize - radius);
            }
            *dst = acc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_preserves_uniform_fields() {
        let img = ImageF32::from_fn(7, 5, |_, _| 200.0);
        let out = convolve_separable(&img, &GAUSSIAN_5TAP);
        assert!(out.data.iter().all(|&v| (v - 200.0).abs() < 1e-3));
    }

    #[test]
    fn gaussian_spreads_an_impulse() {
        let img = ImageF32::from_fn(9, 9, |x, y| if x == 4 && y == 4 { 256.0 } else { 0.0 });
        let out = convolve_separable(&img, &GAUSSIAN_5TAP);
        assert!((out.get(4, 4) - 256.0 * 0.375 * 0.375).abs() < 1e-3);
        assert!((out.get(2, 4) - 256.0 * 0.0625 * 0.375).abs() < 1e-3);
        let total: f32 = out.data.iter().sum();
        assert!((total - 256.0).abs() < 1e-2);
    }
}
