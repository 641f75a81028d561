//! Edge extraction: Sobel gradients, non-maximum suppression and Canny
//! hysteresis, producing a binary [`EdgeMap`].
//!
//! Design goals
//! - Favor clarity and row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate) in the gradient pass.
//! - Keep the output a plain binary raster so it can be saved for tuning.

pub mod canny;
pub mod grad;
pub mod map;
pub mod nms;

pub use canny::{canny, CannyOptions};
pub use grad::{sobel_gradients, Grad};
pub use map::EdgeMap;
pub use nms::EdgeClass;
