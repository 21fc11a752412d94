//! Reading order strategies for slide shapes.
//!
//! A strategy partitions the measured shapes of a page into leaf regions in
//! reading order; the [`assembler`] then flattens each region into rows.
//!
//! # Available Strategies
//!
//! - [`XYCutStrategy`]: Recursive XY-Cut column/band detection (multi-column slides)
//! - [`SimpleStrategy`]: Row grouping over the whole page

mod assembler;
mod simple;
mod xycut;

pub use assembler::{regions_to_rows, RegionRow};
pub use simple::SimpleStrategy;
pub use xycut::XYCutStrategy;

use std::collections::HashSet;
use std::hash::Hash;

use crate::geometry::{BoundingBox, Rect};
use crate::layout::{LeafRegion, PlacedShape};
use crate::pipeline::config::{ReadingOrderConfig, ReadingOrderStrategyType};
use crate::pipeline::ReadingOrderSource;

/// Trait for determining the reading order of shapes.
///
/// Implementations must be total: every input shape ends up in exactly one
/// returned region, whatever the geometry looks like.
pub trait ReadingOrderStrategy: Send + Sync {
    /// Split `shapes` into leaf regions in reading order.
    ///
    /// # Arguments
    ///
    /// * `shapes` - Measured shapes of one page, after exclusion
    /// * `page` - Root region; derived from the shapes when `None`
    fn partition(&self, shapes: Vec<PlacedShape>, page: Option<BoundingBox>) -> Partition;

    /// Return the name of this strategy for debugging.
    fn name(&self) -> &'static str;
}

/// Leaf regions produced by a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Regions in reading order
    pub regions: Vec<LeafRegion>,
    /// Strategy (or fallback) that produced them
    pub source: ReadingOrderSource,
}

/// Context information for one ordering call.
#[derive(Debug, Clone)]
pub struct ReadingOrderContext<I> {
    /// Current page number (0-indexed), used in log output.
    pub page_number: u32,

    /// Page rectangle used as the root region (if available).
    pub page_bbox: Option<Rect>,

    /// Shapes to leave out, e.g. a title rendered separately.
    pub exclude: HashSet<I>,
}

impl<I> Default for ReadingOrderContext<I> {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_bbox: None,
            exclude: HashSet::new(),
        }
    }
}

impl<I: Eq + Hash> ReadingOrderContext<I> {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    /// Set the page bounding box.
    pub fn with_bbox(mut self, bbox: Rect) -> Self {
        self.page_bbox = Some(bbox);
        self
    }

    /// Set the page size; the root region becomes `(0, 0, width, height)`.
    pub fn with_page_size(self, width: f32, height: f32) -> Self {
        self.with_bbox(Rect::new(0.0, 0.0, width, height))
    }

    /// Leave the given shapes out of the ordering.
    pub fn with_excluded<T>(mut self, ids: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        self.exclude.extend(ids);
        self
    }

    /// Root region for the partitioner, ignoring an unusable page rectangle.
    pub(crate) fn root_region(&self) -> Option<BoundingBox> {
        self.page_bbox.filter(Rect::is_finite).map(|r| r.to_bbox())
    }
}

/// Create a reading order strategy based on configuration.
pub fn create_strategy(config: &ReadingOrderConfig) -> Box<dyn ReadingOrderStrategy> {
    match config.strategy {
        ReadingOrderStrategyType::XYCut => Box::new(
            XYCutStrategy::with_config(config.xy_cut.clone())
                .with_min_shapes_for_split(config.min_shapes_for_xy_cut),
        ),
        ReadingOrderStrategyType::Simple => Box::new(SimpleStrategy),
    }
}
