//! Raster preprocessing: luma conversion followed by optional smoothing.
//!
//! Multi-channel rasters are reduced with the Rec.601 luma weights
//! (0.299 R + 0.587 G + 0.114 B); single-channel rasters pass through.
//! Gray+alpha and RGBA inputs ignore the alpha sample. Output intensities
//! stay on the 0..255 scale.

pub mod filters;

use crate::error::Result;
use crate::image::{ImageF32, RasterImage};
use serde::{Deserialize, Serialize};

pub use filters::{convolve_separable, SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Apply the 5-tap Gaussian before edge detection to suppress speckle.
    pub blur: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self { blur: true }
    }
}

/// Reduce a raster to a single-channel intensity field of identical size.
pub fn to_intensity(raster: &RasterImage) -> Result<ImageF32> {
    raster.validate()?;
    let channels = raster.channels;
    let data = raster
        .data
        .chunks_exact(channels)
        .map(|px| match channels {
            1 | 2 => px[0] as f32,
            _ => LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32,
        })
        .collect();
    Ok(ImageF32 {
        w: raster.width,
        h: raster.height,
        data,
    })
}

/// Full preprocessing stage: intensity conversion then optional blur.
pub fn preprocess(raster: &RasterImage, options: &PreprocessOptions) -> Result<ImageF32> {
    let gray = to_intensity(raster)?;
    if options.blur {
        Ok(convolve_separable(&gray, &GAUSSIAN_5TAP))
    } else {
        Ok(gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn single_channel_passes_through() {
        let raster = RasterImage::gray(3, 1, vec![0, 128, 255]);
        let gray = to_intensity(&raster).unwrap();
        assert_eq!(gray.data, vec![0.0, 128.0, 255.0]);
    }

    #[test]
    fn rgb_uses_luma_weights() {
        let raster = RasterImage::new(3, 1, 3, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
        let gray = to_intensity(&raster).unwrap();
        assert!((gray.data[0] - 76.245).abs() < 1e-3);
        assert!((gray.data[1] - 149.685).abs() < 1e-3);
        assert!((gray.data[2] - 29.07).abs() < 1e-3);
    }

    #[test]
    fn rgba_ignores_alpha() {
        let raster = RasterImage::new(1, 1, 4, vec![100, 100, 100, 0]);
        let gray = to_intensity(&raster).unwrap();
        assert!((gray.data[0] - 100.0).abs() < 1e-3);
    }

    #[test]
    fn preserves_dimensions() {
        let raster = RasterImage::filled(17, 9, 3, 40);
        let out = preprocess(&raster, &PreprocessOptions::default()).unwrap();
        assert_eq!((out.w, out.h), (17, 9));
    }

    #[test]
    fn zero_area_is_invalid() {
        let raster = RasterImage::new(0, 5, 1, Vec::new());
        let err = preprocess(&raster, &PreprocessOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidImage(_)));
    }

    #[test]
    fn inconsistent_buffer_is_invalid() {
        let raster = RasterImage::new(4, 4, 3, vec![0; 10]);
        assert!(matches!(
            to_intensity(&raster),
            Err(PipelineError::InvalidImage(_))
        ));
    }
}
