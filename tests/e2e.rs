mod common;

use common::synthetic_image::{paper, single_vertical_line, stroke};
use common::{init_logging, spans};
use pipeline_detector::{DetectorParams, PipelineDetector, PipelineError, RasterImage};

fn detector(visualize: bool) -> PipelineDetector {
    PipelineDetector::new(DetectorParams::default().with_visualization(visualize))
        .expect("default params are valid")
}

#[test]
fn single_line_yields_one_pipeline() {
    init_logging();
    let raster = single_vertical_line();
    let detection = detector(false).process(&raster).unwrap();

    assert_eq!(
        detection.pipelines.len(),
        1,
        "expected one pipeline, got {:?}",
        detection.pipelines
    );
    let seg = &detection.pipelines[0];
    assert!(
        spans(seg, [10, 10], [10, 190], 4),
        "endpoints too far from the drawn stroke: {seg:?}"
    );
    assert!(detection.visualization.is_none());
}

#[test]
fn blank_raster_yields_empty_result() {
    init_logging();
    for (w, h, c) in [(1, 1, 1), (64, 48, 3), (200, 200, 1)] {
        let raster = RasterImage::filled(w, h, c, 255);
        let detection = detector(false).process(&raster).unwrap();
        assert!(detection.is_empty(), "{w}x{h}x{c}: {:?}", detection.pipelines);
    }
}

#[test]
fn zero_area_raster_is_a_client_error() {
    init_logging();
    for raster in [
        RasterImage::gray(0, 10, Vec::new()),
        RasterImage::new(10, 0, 3, Vec::new()),
    ] {
        let err = detector(false).process(&raster).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidImage(_)), "{err}");
        assert!(err.is_client_error());
    }
}

#[test]
fn inconsistent_buffer_is_rejected() {
    let raster = RasterImage::new(10, 10, 3, vec![0; 299]);
    let err = detector(false).process(&raster).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidImage(_)), "{err}");
}

#[test]
fn repeated_runs_are_identical() {
    init_logging();
    let mut raster = paper(240, 180, 1);
    stroke(&mut raster, [20, 30], [220, 30], 2);
    stroke(&mut raster, [120, 10], [120, 170], 2);
    stroke(&mut raster, [30, 60], [200, 160], 1);
    let det = detector(false);
    let first = det.process(&raster).unwrap();
    let second = det.process(&raster).unwrap();
    assert_eq!(first, second);
}

#[test]
fn visualization_marks_the_detected_path() {
    init_logging();
    let raster = single_vertical_line();
    let detection = detector(true).process(&raster).unwrap();
    let overlay = detection
        .visualization
        .as_ref()
        .expect("overlay requested");

    assert_eq!(
        (overlay.width(), overlay.height()),
        (raster.width, raster.height)
    );
    for y in (20..=180).step_by(20) {
        let marked = (7..=13).any(|x| overlay.image.pixel(x, y) == [255, 0, 0]);
        assert!(marked, "no highlighted pixel near (10, {y})");
    }
    assert_ne!(overlay.image.pixel(100, 100), [255, 0, 0]);
    // Input untouched.
    assert_eq!(raster, single_vertical_line());

    let json = serde_json::to_value(&detection).unwrap();
    assert!(json["visualization"]
        .as_str()
        .is_some_and(|uri| uri.starts_with("data:image/png;base64,")));
}

#[test]
fn color_diagram_with_crossing_lines() {
    init_logging();
    let mut raster = paper(300, 200, 3);
    stroke(&mut raster, [20, 50], [280, 50], 2);
    stroke(&mut raster, [150, 20], [150, 180], 2);
    let detection = detector(false).process(&raster).unwrap();

    assert!(
        detection.pipelines.len() >= 2,
        "expected at least two pipelines, got {:?}",
        detection.pipelines
    );
    let horizontal = detection
        .pipelines
        .iter()
        .any(|s| (s.source[1] - s.destination[1]).abs() <= 2 && s.length() > 200.0);
    let vertical = detection
        .pipelines
        .iter()
        .any(|s| (s.source[0] - s.destination[0]).abs() <= 2 && s.length() > 120.0);
    assert!(horizontal && vertical, "{:?}", detection.pipelines);
}

#[test]
fn diagnostics_report_stage_counts_and_timings() {
    init_logging();
    let raster = single_vertical_line();
    let report = detector(false).process_with_diagnostics(&raster).unwrap();
    let trace = &report.trace;

    assert_eq!(
        (trace.input.width, trace.input.height, trace.input.channels),
        (200, 200, 1)
    );
    assert!(trace.counts.edge_pixels > 300, "{:?}", trace.counts);
    assert!(trace.counts.raw_segments >= 1);
    assert_eq!(trace.counts.pipelines, report.detection.pipelines.len());
    let labels: Vec<_> = trace.timings.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["preprocess", "canny", "hough", "consolidate"]);
    assert!(trace.timings.total_ms >= 0.0);
}

#[test]
fn segments_stay_inside_the_raster() {
    init_logging();
    let mut raster = paper(120, 90, 1);
    stroke(&mut raster, [0, 0], [119, 0], 2);
    stroke(&mut raster, [0, 89], [119, 89], 1);
    stroke(&mut raster, [119, 0], [119, 89], 1);
    let detection = detector(true).process(&raster).unwrap();
    for seg in &detection.pipelines {
        assert!(seg.fits_within(120, 90), "{seg:?}");
        assert_ne!(seg.source, seg.destination);
    }
}
