//! Probabilistic Hough transform over a binary edge map.
//!
//! The algorithm visits edge pixels in a seeded random order:
//!
//! - Each visited pixel votes into every angle bin of the accumulator. When
//!   its strongest bin reaches `min_votes`, the pixel is taken as a seed for
//!   that bin's line direction.
//! - From the seed the line is walked both ways through the remaining edge
//!   mask, stopping at the border or after more than `max_line_gap` missing
//!   pixels in a row. The last edge pixel met on each side is an endpoint.
//! - Every edge pixel on the walked path leaves the mask. If the run is long
//!   enough its pixels also withdraw their votes and the run is emitted as a
//!   [`RawSegment`].
//!
//! Removing pixels as soon as a line claims them keeps the work proportional
//! to the number of edge pixels rather than to the number of candidate lines.
//! An edge map without qualifying runs yields an empty list, never an error.

mod accumulator;
mod options;


pub use options::HoughOptions;

use crate::edges::EdgeMap;
use crate::error::{PipelineError, Result};
use crate::segments::RawSegment;
use accumulator::{Accumulator, LineWalk};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Extract line segments from `edges`.
pub fn probabilistic_hough(edges: &EdgeMap, options: &HoughOptions) -> Result<Vec<RawSegment>> {
    if edges.is_empty() {
        return Err(PipelineError::InvalidImage(format!(
            "edge map has zero area ({}x{})",
            edges.width(),
            edges.height()
        )));
    }
    options.validate()?;

    let width = edges.width();
    let height = edges.height();
    let inside = |p: [i32; 2]| {
        p[0] >= 0 && p[1] >= 0 && (p[0] as usize) < width && (p[1] as usize) < height
    };
    let at = |p: [i32; 2]| p[1] as usize * width + p[0] as usize;

    let mut mask: Vec<bool> = edges.as_bytes().iter().map(|&v| v != 0).collect();
    let mut points = edges.points();
    let mut acc = Accumulator::new(width, height, options.rho, options.theta_deg.to_radians());
    let mut rng = StdRng::seed_from_u64(options.seed);

    let threshold = options.min_votes as i32;
    let line_gap = options.max_line_gap as i32;
    let line_length = options.min_line_length as i32;
    let edge_count = points.len();
    let mut lines = Vec::new();

    let mut remaining = points.len();
    while remaining > 0 {
        let pick = rng.gen_range(0..remaining);
        let seed = points[pick];
        points[pick] = points[remaining - 1];
        remaining -= 1;

        // Already claimed by an earlier line.
        if !mask[at(seed)] {
            continue;
        }

        let (max_val, max_n) = acc.vote(seed[0], seed[1]);
        if max_val < threshold {
            continue;
        }

        let walk = LineWalk::new(seed[0], seed[1], acc.direction(max_n));
        let mut line_end = [seed; 2];
        for (k, end) in line_end.iter_mut().enumerate() {
            let mut gap = 0;
            for p in walk.pixels(k) {
                if !inside(p) {
                    break;
                }
                if mask[at(p)] {
                    gap = 0;
                    *end = p;
                } else {
                    gap += 1;
                    if gap > line_gap {
                        break;
                    }
                }
            }
        }

        let good_line = (line_end[1][0] - line_end[0][0]).abs() >= line_length
            || (line_end[1][1] - line_end[0][1]).abs() >= line_length;

        for (k, end) in line_end.iter().enumerate() {
            for p in walk.pixels(k) {
                if !inside(p) {
                    break;
                }
                let idx = at(p);
                if mask[idx] {
                    if good_line {
                        acc.unvote(p[0], p[1]);
                    }
                    mask[idx] = false;
                }
                if p == *end {
                    break;
                }
            }
        }

        if good_line {
            lines.push(RawSegment::new(line_end[0], line_end[1]));
            if options.max_lines.is_some_and(|max| lines.len() >= max) {
                break;
            }
        }
    }

    debug!(
        "probabilistic_hough: {} edge pixels -> {} segments",
        edge_count,
        lines.len()
    );
    Ok(lines)
}
