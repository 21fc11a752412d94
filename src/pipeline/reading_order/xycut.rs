//! XY-Cut column detection strategy.
//!
//! Splits the page at most [`XYCutConfig::max_depth`] times into bands and
//! columns (see [`xy_cut`]), then hands each leaf to the row grouper.
//!
//! Ordering must never fail, so every degenerate case has a defined result:
//!
//! - too few shapes to be worth splitting: one region, plain row order
//! - any shape without readable geometry: one region, [`ReadingOrderSource::Fallback`]
//! - no root region can be formed: same fallback

use crate::geometry::BoundingBox;
use crate::layout::{xy_cut, LeafReason, LeafRegion, PlacedShape};
use crate::pipeline::config::XYCutConfig;
use crate::pipeline::ReadingOrderSource;

use super::{Partition, ReadingOrderStrategy};

/// XY-Cut recursive partitioning strategy.
///
/// Detects title bands and columns from whitespace gaps between shape boxes.
/// Suitable for two-column slides, comparison layouts and title-over-body
/// arrangements.
pub struct XYCutStrategy {
    /// Gap and recursion parameters.
    pub config: XYCutConfig,

    /// Minimum number of shapes before a split is attempted (default: 3).
    /// Below it the page is ordered as a single region.
    pub min_shapes_for_split: usize,
}

impl Default for XYCutStrategy {
    fn default() -> Self {
        Self {
            config: XYCutConfig::default(),
            min_shapes_for_split: 3,
        }
    }
}

impl XYCutStrategy {
    /// Create a new XY-Cut strategy with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom partitioning parameters.
    pub fn with_config(config: XYCutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the minimum number of shapes needed to attempt a split.
    pub fn with_min_shapes_for_split(mut self, min: usize) -> Self {
        self.min_shapes_for_split = min;
        self
    }

    fn whole_page(
        shapes: Vec<PlacedShape>,
        page: Option<BoundingBox>,
        source: ReadingOrderSource,
    ) -> Partition {
        Partition {
            regions: vec![LeafRegion {
                bbox: page,
                depth: 0,
                shapes,
                reason: LeafReason::NoCut,
            }],
            source,
        }
    }
}

impl ReadingOrderStrategy for XYCutStrategy {
    fn partition(&self, shapes: Vec<PlacedShape>, page: Option<BoundingBox>) -> Partition {
        if shapes.is_empty() {
            return Partition {
                regions: Vec::new(),
                source: ReadingOrderSource::XYCut,
            };
        }

        if shapes.len() < self.min_shapes_for_split {
            log::debug!(
                "XY-Cut: {} shapes below split minimum {}, ordering as one region",
                shapes.len(),
                self.min_shapes_for_split
            );
            return Self::whole_page(shapes, page, ReadingOrderSource::Simple);
        }

        let region = page.or_else(|| BoundingBox::enclosing(shapes.iter().filter_map(|s| s.bbox)));
        let Some(region) = region else {
            log::warn!(
                "XY-Cut: no usable page region for {} shapes, falling back to row ordering",
                shapes.len()
            );
            return Partition {
                regions: vec![LeafRegion::fallback(shapes)],
                source: ReadingOrderSource::Fallback,
            };
        };

        let regions = xy_cut(shapes, region, &self.config);
        let source = if regions
            .iter()
            .any(|r| r.reason == LeafReason::GeometryUnavailable)
        {
            ReadingOrderSource::Fallback
        } else {
            ReadingOrderSource::XYCut
        };

        Partition { regions, source }
    }

    fn name(&self) -> &'static str {
        "XYCutStrategy"
    }
}
