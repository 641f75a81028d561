//! PNG and data-URI encoding of overlays.
use crate::error::Result;
use crate::image::RasterImage;
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode an RGB raster as PNG bytes.
pub(super) fn encode_png(raster: &RasterImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        &raster.data,
        raster.width as u32,
        raster.height as u32,
        ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}

pub(super) fn data_uri(png: &[u8]) -> String {
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len() * 4 / 3 + 4);
    uri.push_str(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(png, &mut uri);
    uri
}
