use crate::render::Overlay;
use crate::segments::PipelineSegment;
use serde::{Serialize, Serializer};

/// Pipelines found in one raster, plus the overlay when requested.
///
/// Serialises as `{"pipelines": [...], "visualization": "data:image/png;base64,..."}`;
/// `visualization` is omitted when no overlay was rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub pipelines: Vec<PipelineSegment>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_overlay"
    )]
    pub visualization: Option<Overlay>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}

fn serialize_overlay<S: Serializer>(
    overlay: &Option<Overlay>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match overlay {
        Some(overlay) => {
            let uri = overlay
                .to_png_data_uri()
                .map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&uri)
        }
        None => serializer.serialize_none(),
    }
}
