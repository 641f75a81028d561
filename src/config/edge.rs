use crate::edges::CannyOptions;
use crate::preprocess::PreprocessOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `edge_map` tool used to tune Canny thresholds.
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub preprocess: PreprocessOptions,
    #[serde(default)]
    pub canny: CannyOptions,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    pub edges_png: PathBuf,
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    super::read_json(path)
}
