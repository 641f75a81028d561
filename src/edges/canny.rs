//! Canny edge detection: Sobel gradients, non-maximum suppression and
//! double-threshold hysteresis.
//!
//! Local maxima above `high_threshold` seed edges. Maxima between the two
//! thresholds become edges only when 8-connected (possibly through other weak
//! maxima) to a seed; everything at or below `low_threshold` is discarded.
use super::grad::sobel_gradients;
use super::map::EdgeMap;
use super::nms::{run_nms, EdgeClass};
use crate::error::{PipelineError, Result};
use crate::image::ImageF32;
use serde::{Deserialize, Serialize};

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Thresholds are in gradient units of 0..255 intensities with the chosen
/// aperture; defaults suit dark strokes on a light sheet.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Maxima at or below this value are never edges.
    pub low_threshold: f32,
    /// Maxima above this value always seed an edge.
    pub high_threshold: f32,
    /// Sobel aperture: 3, 5 or 7.
    pub aperture_size: usize,
    /// Use the Euclidean gradient norm instead of `|gx| + |gy|`.
    pub l2_gradient: bool,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
            aperture_size: 3,
            l2_gradient: false,
        }
    }
}

impl CannyOptions {
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.aperture_size, 3 | 5 | 7) {
            return Err(PipelineError::InvalidConfig(format!(
                "aperture_size must be 3, 5 or 7, got {}",
                self.aperture_size
            )));
        }
        if !(self.low_threshold.is_finite() && self.high_threshold.is_finite())
            || self.low_threshold < 0.0
            || self.high_threshold < 0.0
        {
            return Err(PipelineError::InvalidConfig(
                "canny thresholds must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Detect edges on an intensity field. Fails only on zero-area input or
/// invalid options; a featureless field yields an empty map.
pub fn canny(l: &ImageF32, options: &CannyOptions) -> Result<EdgeMap> {
    if l.w == 0 || l.h == 0 {
        return Err(PipelineError::InvalidImage(format!(
            "cannot detect edges on a {}x{} image",
            l.w, l.h
        )));
    }
    options.validate()?;
    let (low, high) = if options.low_threshold > options.high_threshold {
        (options.high_threshold, options.low_threshold)
    } else {
        (options.low_threshold, options.high_threshold)
    };

    let grad = sobel_gradients(l, options.aperture_size, options.l2_gradient)?;
    let classes = run_nms(&grad, low, high);
    Ok(hysteresis(l.w, l.h, &classes))
}

/// Promote weak maxima reachable from strong ones through 8-connectivity.
pub fn hysteresis(w: usize, h: usize, classes: &[EdgeClass]) -> EdgeMap {
    let mut map = EdgeMap::new(w, h);
    let mut stack: Vec<usize> = Vec::new();

    for (idx, &class) in classes.iter().enumerate() {
        if class == EdgeClass::Strong {
            map.set_edge(idx % w, idx / w);
            stack.push(idx);
        }
    }

    while let Some(idx) = stack.pop() {
        let x = (idx % w) as isize;
        let y = (idx / w) as isize;
        for (dx, dy) in NEIGH_OFFSETS {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            let nidx = ny * w + nx;
            if classes[nidx] == EdgeClass::Weak && !map.is_edge(nx, ny) {
                map.set_edge(nx, ny);
                stack.push(nidx);
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_field_has_no_edges() {
        let img = ImageF32::from_fn(32, 24, |_, _| 255.0);
        let map = canny(&img, &CannyOptions::default()).unwrap();
        assert_eq!(map.count(), 0);
    }

    #[test]
    fn dark_stroke_yields_two_edge_columns() {
        let img = ImageF32::from_fn(40, 40, |x, _| {
            if (18..=20).contains(&x) {
                0.0
            } else {
                255.0
            }
        });
        let map = canny(&img, &CannyOptions::default()).unwrap();
        let columns: Vec<usize> = (0..40).filter(|&x| map.is_edge(x, 20)).collect();
        assert_eq!(columns, vec![17, 20]);
    }

    #[test]
    fn weak_pixels_need_a_strong_neighbour() {
        let (w, h) = (5, 1);
        let mut classes = vec![EdgeClass::None; w * h];
        classes[0] = EdgeClass::Strong;
        classes[1] = EdgeClass::Weak;
        classes[2] = EdgeClass::Weak;
        classes[4] = EdgeClass::Weak;
        let map = hysteresis(w, h, &classes);
        assert!(map.is_edge(0, 0) && map.is_edge(1, 0) && map.is_edge(2, 0));
        assert!(!map.is_edge(4, 0), "isolated weak pixel must be dropped");
    }

    #[test]
    fn zero_area_is_invalid() {
        let img = ImageF32::new(0, 10);
        assert!(matches!(
            canny(&img, &CannyOptions::default()),
            Err(PipelineError::InvalidImage(_))
        ));
    }

    #[test]
    fn bad_aperture_is_rejected() {
        let img = ImageF32::new(4, 4);
        let options = CannyOptions {
            aperture_size: 9,
            ..Default::default()
        };
        assert!(matches!(
            canny(&img, &options),
            Err(PipelineError::InvalidConfig(_))
        ));
    }
}
