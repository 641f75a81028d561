use crate::detector::DetectorParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the single-image `pipeline_detector` tool.
#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: DetectOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    /// Where the `{"pipelines": ..., "visualization": ...}` document goes.
    pub json_out: PathBuf,
    /// Also write the overlay as a standalone PNG. Implies visualization.
    #[serde(default)]
    pub overlay_png: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let mut config: DetectToolConfig = super::read_json(path)?;
    if config.output.overlay_png.is_some() {
        config.detector.visualize = true;
    }
    Ok(config)
}
