use crate::detector::DetectorParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `batch_detect` tool: page images of one document, already
/// rasterised, processed in parallel.
#[derive(Debug, Deserialize)]
pub struct BatchToolConfig {
    /// Page images in page order; page numbers start at 1.
    pub pages: Vec<PathBuf>,
    #[serde(default)]
    pub detector: DetectorParams,
    /// Array of per-page records.
    pub json_out: PathBuf,
    /// Worker threads; `None` uses the rayon default.
    #[serde(default)]
    pub threads: Option<usize>,
}

pub fn load_config(path: &Path) -> Result<BatchToolConfig, String> {
    let config: BatchToolConfig = super::read_json(path)?;
    if config.pages.is_empty() {
        return Err(format!("Config {} lists no pages", path.display()));
    }
    if config.threads == Some(0) {
        return Err("threads must be at least 1".to_string());
    }
    Ok(config)
}
