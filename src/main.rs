use pipeline_detector::config::detect;
use pipeline_detector::image::io::{load_raster, save_raster_png, write_json_file};
use pipeline_detector::PipelineDetector;
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
    let config = detect::load_config(Path::new(&config_path))?;

    let raster = load_raster(&config.input)?;
    let detector = PipelineDetector::new(config.detector).map_err(|e| e.to_string())?;
    let detection = detector.process(&raster).map_err(|e| e.to_string())?;

    write_json_file(&config.output.json_out, &detection)?;
    println!(
        "Saved {} pipelines to {}",
        detection.pipelines.len(),
        config.output.json_out.display()
    );

    if let (Some(path), Some(overlay)) = (&config.output.overlay_png, &detection.visualization) {
        save_raster_png(&overlay.image, path)?;
        println!("Saved overlay to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: pipeline_detector <config.json>".to_string()
}
