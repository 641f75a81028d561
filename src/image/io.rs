//! I/O helpers for rasters, edge maps and JSON.
//!
//! - `load_raster`: read a PNG/JPEG into an owned [`RasterImage`].
//! - `raster_from_dynamic`: adopt an already decoded `image::DynamicImage`.
//! - `save_raster_png`: write a raster (any supported channel count) to disk.
//! - `save_edge_map`: write a binary edge map as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RasterImage;
use crate::edges::EdgeMap;
use image::{ColorType, DynamicImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Convert a decoded image into a raster. Grayscale sources stay single
/// channel; everything else becomes RGB with alpha discarded.
pub fn raster_from_dynamic(img: DynamicImage) -> RasterImage {
    let width = img.width() as usize;
    let height = img.height() as usize;
    if img.color().has_color() {
        RasterImage::new(width, height, 3, img.into_rgb8().into_raw())
    } else {
        RasterImage::new(width, height, 1, img.into_luma8().into_raw())
    }
}

/// Load an image from disk.
pub fn load_raster(path: &Path) -> Result<RasterImage, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    Ok(raster_from_dynamic(img))
}

fn color_type(channels: usize) -> Result<ColorType, String> {
    match channels {
        1 => Ok(ColorType::L8),
        2 => Ok(ColorType::La8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        other => Err(format!("Unsupported channel count {other}")),
    }
}

/// Save a raster to `path`; the format follows the file extension.
pub fn save_raster_png(raster: &RasterImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let color = color_type(raster.channels)?;
    image::save_buffer(
        path,
        &raster.data,
        raster.width as u32,
        raster.height as u32,
        color,
    )
    .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an edge map as an 8-bit image, edges white on black.
pub fn save_edge_map(edges: &EdgeMap, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image::save_buffer(
        path,
        edges.as_bytes(),
        edges.width() as u32,
        edges.height() as u32,
        ColorType::L8,
    )
    .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
