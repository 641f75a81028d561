//! Owned interleaved 8-bit raster handed to the pipeline by the caller.
//!
//! Fields are public so callers can wrap buffers produced elsewhere without
//! copying; [`RasterImage::validate`] checks the layout before any stage
//! reads it.
use crate::error::{PipelineError, Result};

/// Supported channel layouts: 1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA.
pub const MAX_CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// Row-major interleaved samples, `width * height * channels` bytes.
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Single-channel raster from raw intensities.
    pub fn gray(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self::new(width, height, 1, data)
    }

    /// Raster where every sample holds `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Self {
        Self::new(width, height, channels, vec![value; width * height * channels])
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Reject zero-area rasters, unsupported channel counts, and buffers whose
    /// length disagrees with the declared geometry.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidImage(format!(
                "raster has zero area ({}x{})",
                self.width, self.height
            )));
        }
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(PipelineError::InvalidImage(format!(
                "unsupported channel count {}",
                self.channels
            )));
        }
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.channels))
            .ok_or_else(|| PipelineError::InvalidImage("raster size overflows".to_string()))?;
        if self.data.len() != expected {
            return Err(PipelineError::InvalidImage(format!(
                "buffer holds {} bytes, expected {} for {}x{}x{}",
                self.data.len(),
                expected,
                self.width,
                self.height,
                self.channels
            )));
        }
        Ok(())
    }

    /// Samples of the pixel at (x, y), one per channel.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let start = (y * self.width + x) * self.channels;
        &mut self.data[start..start + self.channels]
    }
}
