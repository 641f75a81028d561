//! Overlay rendering: draw consolidated segments on a copy of the input.
//!
//! The overlay is always RGB. Gray inputs are expanded, alpha is dropped.
//! Rendering never modifies the caller's raster.

mod draw;
mod encode;

pub use draw::LinePixels;
pub use encode::PNG_DATA_URI_PREFIX;

use crate::error::{PipelineError, Result};
use crate::image::RasterImage;
use crate::segments::PipelineSegment;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Stroke colour as RGB.
    pub color: [u8; 3],
    /// Square brush width in pixels (>= 1).
    pub thickness: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            thickness: 2,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.thickness == 0 {
            return Err(PipelineError::InvalidConfig(
                "render thickness must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// RGB copy of an input raster with segments drawn on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub image: RasterImage,
}

impl Overlay {
    pub fn width(&self) -> usize {
        self.image.width
    }

    pub fn height(&self) -> usize {
        self.image.height
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode::encode_png(&self.image)
    }

    /// `data:image/png;base64,...` form used by the output document.
    pub fn to_png_data_uri(&self) -> Result<String> {
        Ok(encode::data_uri(&self.to_png_bytes()?))
    }
}

fn to_rgb(raster: &RasterImage) -> RasterImage {
    let mut data = Vec::with_capacity(raster.area() * 3);
    for px in raster.data.chunks_exact(raster.channels) {
        match raster.channels {
            1 | 2 => data.extend_from_slice(&[px[0], px[0], px[0]]),
            _ => data.extend_from_slice(&px[..3]),
        }
    }
    RasterImage::new(raster.width, raster.height, 3, data)
}

/// Draw `segments` onto an RGB copy of `raster`.
///
/// Fails with [`PipelineError::Render`] when the raster is inconsistent or a
/// segment endpoint lies outside it.
pub fn render_overlay(
    raster: &RasterImage,
    segments: &[PipelineSegment],
    options: &RenderOptions,
) -> Result<Overlay> {
    raster
        .validate()
        .map_err(|e| PipelineError::Render(format!("cannot draw on raster: {e}")))?;
    options.validate()?;
    if let Some(seg) = segments
        .iter()
        .find(|s| !s.fits_within(raster.width, raster.height))
    {
        return Err(PipelineError::Render(format!(
            "segment {:?} -> {:?} lies outside the {}x{} raster",
            seg.source, seg.destination, raster.width, raster.height
        )));
    }

    let mut image = to_rgb(raster);
    for seg in segments {
        draw::draw_line(
            &mut image,
            seg.source,
            seg.destination,
            options.color,
            options.thickness,
        );
    }
    debug!(
        "render: {} segments on {}x{}",
        segments.len(),
        image.width,
        image.height
    );
    Ok(Overlay { image })
}
