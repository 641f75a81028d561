//! Segment types flowing out of the extractor and the consolidator.
//!
//! - [`RawSegment`]: a detector hit, two integer endpoints in scan order.
//! - [`PipelineSegment`]: a consolidated run reported to callers as
//!   `{"source": [x, y], "destination": [x, y]}`.

mod segment;

pub use segment::{PipelineSegment, RawSegment};
