//! Row grouping over the whole page, without column detection.

use crate::geometry::BoundingBox;
use crate::layout::{LeafReason, LeafRegion, PlacedShape};
use crate::pipeline::ReadingOrderSource;

use super::{Partition, ReadingOrderStrategy};

/// Simple top-to-bottom, left-to-right reading order.
///
/// The page is one region; the row grouper does all the work. This is the
/// right choice for single-column slides and what the XY-Cut strategy falls
/// back to when geometry is unusable.
pub struct SimpleStrategy;

impl ReadingOrderStrategy for SimpleStrategy {
    fn partition(&self, shapes: Vec<PlacedShape>, page: Option<BoundingBox>) -> Partition {
        let regions = if shapes.is_empty() {
            Vec::new()
        } else {
            vec![LeafRegion {
                bbox: page,
                depth: 0,
                shapes,
                reason: LeafReason::NoCut,
            }]
        };

        Partition {
            regions,
            source: ReadingOrderSource::Simple,
        }
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}
