#![allow(dead_code)]

pub mod synthetic_image;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Whether `seg` joins `a` and `b` within `tol` pixels, in either order.
pub fn spans(
    seg: &pipeline_detector::PipelineSegment,
    a: [i32; 2],
    b: [i32; 2],
    tol: i32,
) -> bool {
    let close =
        |p: [i32; 2], q: [i32; 2]| (p[0] - q[0]).abs() <= tol && (p[1] - q[1]).abs() <= tol;
    (close(seg.source, a) && close(seg.destination, b))
        || (close(seg.source, b) && close(seg.destination, a))
}
