use serde::{Deserialize, Serialize};

#[inline]
fn span_length(a: [i32; 2], b: [i32; 2]) -> f32 {
    let dx = (b[0] - a[0]) as f32;
    let dy = (b[1] - a[1]) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Straight line detected by the Hough stage. Endpoint order follows the
/// detector's walk and carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSegment {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
}

impl RawSegment {
    pub fn new(p0: [i32; 2], p1: [i32; 2]) -> Self {
        Self { p0, p1 }
    }

    /// Euclidean endpoint distance in pixels.
    pub fn length(&self) -> f32 {
        span_length(self.p0, self.p1)
    }

    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.p0[0] + self.p1[0]) as f32 * 0.5,
            (self.p0[1] + self.p1[1]) as f32 * 0.5,
        ]
    }
}

/// Externally reported pipeline run. Never zero-length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineSegment {
    pub source: [i32; 2],
    pub destination: [i32; 2],
}

impl PipelineSegment {
    pub fn new(source: [i32; 2], destination: [i32; 2]) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn length(&self) -> f32 {
        span_length(self.source, self.destination)
    }

    /// Whether both endpoints lie inside a `width × height` raster.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        [self.source, self.destination].iter().all(|p| {
            p[0] >= 0 && p[1] >= 0 && (p[0] as usize) < width && (p[1] as usize) < height
        })
    }
}

impl From<RawSegment> for PipelineSegment {
    fn from(seg: RawSegment) -> Self {
        Self::new(seg.p0, seg.p1)
    }
}

impl From<PipelineSegment> for RawSegment {
    fn from(seg: PipelineSegment) -> Self {
        Self::new(seg.source, seg.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_source_destination_pairs() {
        let seg = PipelineSegment::new([10, 10], [10, 190]);
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, r#"{"source":[10,10],"destination":[10,190]}"#);
    }

    #[test]
    fn length_and_bounds() {
        let seg = PipelineSegment::new([0, 0], [3, 4]);
        assert!((seg.length() - 5.0).abs() < 1e-6);
        assert!(seg.fits_within(4, 5));
        assert!(!seg.fits_within(3, 5));
        assert!(RawSegment::new([2, 2], [2, 2]).is_degenerate());
    }
}
