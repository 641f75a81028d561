use pipeline_detector::config::batch;
use pipeline_detector::image::io::{load_raster, write_json_file};
use pipeline_detector::{Detection, PipelineDetector};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = batch::load_config(Path::new(&config_path))?;
    let detector = PipelineDetector::new(config.detector).map_err(|e| e.to_string())?;

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        builder
            .build()
            .map_err(|e| format!("Failed to start worker pool: {e}"))?
    };

    let start = Instant::now();
    let records: Vec<PageRecord> = pool.install(|| {
        config
            .pages
            .par_iter()
            .enumerate()
            .map(|(i, path)| process_page(&detector, i + 1, path))
            .collect::<Result<Vec<_>, String>>()
    })?;

    write_json_file(&config.json_out, &records)?;
    let total: usize = records.iter().map(|r| r.detection.pipelines.len()).sum();
    println!(
        "Processed {} pages, {} pipelines in {:.1} ms; saved to {}",
        records.len(),
        total,
        start.elapsed().as_secs_f64() * 1000.0,
        config.json_out.display()
    );
    Ok(())
}

fn process_page(
    detector: &PipelineDetector,
    page: usize,
    path: &Path,
) -> Result<PageRecord, String> {
    let raster = load_raster(path)?;
    let detection = detector
        .process(&raster)
        .map_err(|e| format!("Page {page} ({}): {e}", path.display()))?;
    log::info!("page {page}: {} pipelines", detection.pipelines.len());
    Ok(PageRecord {
        page,
        image: path.to_path_buf(),
        detection,
    })
}

fn usage() -> String {
    "Usage: batch_detect <config.json>".to_string()
}

#[derive(Debug, Serialize)]
struct PageRecord {
    page: usize,
    image: PathBuf,
    #[serde(flatten)]
    detection: Detection,
}
