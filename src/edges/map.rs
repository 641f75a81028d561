//! Binary edge map produced by the Canny stage and consumed by the Hough stage.
use crate::error::{PipelineError, Result};

/// Sample value marking an edge pixel; everything else is zero.
pub const EDGE: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl EdgeMap {
    /// Empty (edge-free) map of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wrap an existing buffer; any non-zero sample counts as an edge.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(PipelineError::InvalidImage(format!(
                "edge buffer holds {} samples, expected {}",
                data.len(),
                width * height
            )));
        }
        let data = data
            .into_iter()
            .map(|v| if v != 0 { EDGE } else { 0 })
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set_edge(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = EDGE;
    }

    /// Number of edge pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Edge pixel coordinates in row-major scan order.
    pub fn points(&self) -> Vec<[i32; 2]> {
        let mut out = Vec::new();
        for y in 0..self.height {
            let row = &self.data[y * self.width..(y + 1) * self.width];
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push([x as i32, y as i32]);
                }
            }
        }
        out
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
