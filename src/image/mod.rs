//! Raster containers used across the pipeline.
//!
//! - [`RasterImage`]: owned interleaved 8-bit input (1–4 channels).
//! - [`ImageF32`]: owned single-channel float field used for numeric work.
//! - [`io`]: file loading and PNG/JSON writers for the tools.
pub mod f32;
pub mod io;
pub mod raster;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::raster::RasterImage;
pub use self::traits::{ImageView, ImageViewMut};
