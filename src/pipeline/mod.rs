//! Reading order pipeline for slide shapes.
//!
//! ```text
//! &[S: Shape]  (+ ReadingOrderContext: page rect, exclusions)
//!     ↓
//! [PlacedShape::measure] (bbox, anchor, text height per shape)
//!     ↓
//! [ReadingOrderStrategy] (XY-Cut leaf regions, or the whole page)
//!     ↓
//! [regions_to_rows] (row grouping per region)
//!     ↓
//! ReadingOrder (shapes in order, with row/region boundaries)
//! ```
//!
//! Ordering is total: once the configuration has been validated, every
//! call returns a permutation of the (filtered) input. Unreadable geometry
//! degrades the call to plain row grouping and is reported through
//! [`ReadingOrderSource::Fallback`] and a `log::warn!`, never an error.

pub mod config;
pub mod ordered_shape;
pub mod reading_order;

// Re-export main types
pub use config::{
    AdaptiveThresholdConfig, ReadingOrderConfig, ReadingOrderStrategyType, RowThreshold,
    XYCutConfig,
};
pub use ordered_shape::{OrderedShape, ReadingOrder, ReadingOrderSource};
pub use reading_order::{
    create_strategy, regions_to_rows, Partition, ReadingOrderContext, ReadingOrderStrategy,
    RegionRow, SimpleStrategy, XYCutStrategy,
};

use crate::error::Result;
use crate::layout::PlacedShape;
use crate::shape::Shape;

/// The reading order pipeline - orchestrates measuring, partitioning and
/// row grouping for one page at a time.
///
/// A pipeline holds no per-call state and can be shared between threads.
pub struct ReadingOrderPipeline {
    config: ReadingOrderConfig,
    strategy: Box<dyn ReadingOrderStrategy>,
}

impl ReadingOrderPipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        let config = ReadingOrderConfig::default();
        let strategy = create_strategy(&config);
        Self { config, strategy }
    }

    /// Create a pipeline with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) when a
    /// tunable is out of range.
    pub fn with_config(config: ReadingOrderConfig) -> Result<Self> {
        config.validate()?;
        let strategy = create_strategy(&config);
        Ok(Self { config, strategy })
    }

    /// Order the shapes of one page.
    ///
    /// Shapes whose identity is in `context.exclude` are dropped first. The
    /// page rectangle of the context, when present and finite, is the root
    /// region; otherwise the union of the shapes' boxes is used.
    ///
    /// A lone full-width title cannot form a band of its own and is read as
    /// part of a column; exclude it with
    /// [`ReadingOrderContext::with_excluded`] and render it separately.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::pipeline::{ReadingOrderContext, ReadingOrderPipeline};
    /// use shape_order::shape::SlideShape;
    ///
    /// let shapes = vec![
    ///     SlideShape::new(2, 150.0, 12.0, 100.0, 20.0),
    ///     SlideShape::new(1, 0.0, 10.0, 100.0, 20.0),
    /// ];
    /// let pipeline = ReadingOrderPipeline::new();
    /// let order = pipeline.process(&shapes, &ReadingOrderContext::new());
    /// assert_eq!(order.ids(), vec![1, 2]);
    /// ```
    pub fn process<'a, S: Shape>(
        &self,
        shapes: &'a [S],
        context: &ReadingOrderContext<S::Id>,
    ) -> ReadingOrder<'a, S> {
        let kept: Vec<&'a S> = shapes
            .iter()
            .filter(|s| !context.exclude.contains(&s.id()))
            .collect();

        let placed: Vec<PlacedShape> = kept
            .iter()
            .enumerate()
            .map(|(i, s)| PlacedShape::measure(i, *s))
            .collect();

        let page = context.root_region();
        if page.is_none() && context.page_bbox.is_some() {
            log::debug!(
                "Page {}: page rectangle is not finite, deriving region from shapes",
                context.page_number
            );
        }

        let partition = self.strategy.partition(placed, page);
        let rows = regions_to_rows(
            &partition.regions,
            self.config.row_threshold,
            &self.config.adaptive_threshold,
        );

        log::debug!(
            "Page {}: {} shapes ({} excluded) -> {} regions, {} rows via {} ({})",
            context.page_number,
            kept.len(),
            shapes.len() - kept.len(),
            partition.regions.len(),
            rows.len(),
            self.strategy.name(),
            partition.source.name()
        );

        let mut ordered = Vec::with_capacity(kept.len());
        for (row_index, region_row) in rows.into_iter().enumerate() {
            for placed in region_row.row {
                ordered.push(OrderedShape {
                    shape: kept[placed.index],
                    reading_order: ordered.len(),
                    row: row_index,
                    region: region_row.region,
                    source: partition.source,
                });
            }
        }

        ReadingOrder::new(ordered, partition.source)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReadingOrderConfig {
        &self.config
    }
}

impl Default for ReadingOrderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Order shapes top-to-bottom, left-to-right, column-aware when the
/// configuration enables XY-Cut.
///
/// Returns the flat sequence of the rows produced by
/// [`group_shapes_by_visual_rows`].
pub fn sort_shapes_by_visual_position<'a, S: Shape>(
    shapes: &'a [S],
    config: &ReadingOrderConfig,
    context: &ReadingOrderContext<S::Id>,
) -> Result<Vec<&'a S>> {
    let pipeline = ReadingOrderPipeline::with_config(config.clone())?;
    Ok(pipeline.process(shapes, context).shapes())
}

/// Group shapes into visual rows, rows in reading order.
pub fn group_shapes_by_visual_rows<'a, S: Shape>(
    shapes: &'a [S],
    config: &ReadingOrderConfig,
    context: &ReadingOrderContext<S::Id>,
) -> Result<Vec<Vec<&'a S>>> {
    let pipeline = ReadingOrderPipeline::with_config(config.clone())?;
    Ok(pipeline.process(shapes, context).rows())
}
