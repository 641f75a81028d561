use pipeline_detector::config::edge;
use pipeline_detector::edges::canny;
use pipeline_detector::image::io::{load_raster, save_edge_map, write_json_file};
use pipeline_detector::preprocess::preprocess;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = edge::load_config(Path::new(&config_path))?;
    config.canny.validate().map_err(|e| e.to_string())?;

    let raster = load_raster(&config.input)?;
    let intensity = preprocess(&raster, &config.preprocess).map_err(|e| e.to_string())?;
    let edges = canny(&intensity, &config.canny).map_err(|e| e.to_string())?;

    let summary = EdgeMapSummary {
        width: edges.width(),
        height: edges.height(),
        low_threshold: config.canny.low_threshold,
        high_threshold: config.canny.high_threshold,
        aperture_size: config.canny.aperture_size,
        edge_pixels: edges.count(),
        edge_fraction: edges.count() as f64 / (edges.width() * edges.height()) as f64,
    };

    save_edge_map(&edges, &config.output.edges_png)?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved {} edge pixels ({:.2}%) to {}",
        summary.edge_pixels,
        summary.edge_fraction * 100.0,
        config.output.edges_png.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeMapSummary {
    width: usize,
    height: usize,
    low_threshold: f32,
    high_threshold: f32,
    aperture_size: usize,
    edge_pixels: usize,
    edge_fraction: f64,
}
