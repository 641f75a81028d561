//! Error taxonomy shared by every stage of the extraction pipeline.
//!
//! "No segments found" is not an error: stages return an empty list for
//! blank or featureless rasters and reserve `Err` for malformed input,
//! invalid options, and overlay failures.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed or empty raster (zero area, buffer size mismatch, bad channel count).
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Segment coordinates fall outside the raster being drawn on.
    #[error("render failed: {0}")]
    Render(String),

    /// An option value is outside its domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The overlay could not be encoded as PNG.
    #[error("failed to encode overlay: {0}")]
    Encode(#[from] image::ImageError),
}

impl PipelineError {
    /// Whether the failure is attributable to the caller's input.
    ///
    /// A service boundary maps `true` to a client error and everything else
    /// to a server error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidImage(_))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_image_is_a_client_error() {
        assert!(PipelineError::InvalidImage("zero area".into()).is_client_error());
        assert!(!PipelineError::Render("out of bounds".into()).is_client_error());
        assert!(!PipelineError::InvalidConfig("aperture".into()).is_client_error());
    }

    #[test]
    fn display_includes_context() {
        let err = PipelineError::InvalidImage("width is zero".into());
        assert_eq!(err.to_string(), "invalid image: width is zero");
    }
}
