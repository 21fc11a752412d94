//! Flattening of leaf regions into rows.

use crate::layout::{group_rows, LeafRegion, Row};
use crate::pipeline::config::{AdaptiveThresholdConfig, RowThreshold};

/// A row together with the leaf region it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    /// Index of the region in partition order
    pub region: usize,
    /// Shapes of the row, left to right
    pub row: Row,
}

/// Group each region into rows and concatenate in region order.
///
/// The threshold is resolved per region, so an `Auto` threshold adapts to the
/// text sizes of each column separately.
pub fn regions_to_rows(
    regions: &[LeafRegion],
    threshold: RowThreshold,
    adaptive: &AdaptiveThresholdConfig,
) -> Vec<RegionRow> {
    let mut out = Vec::new();
    for (region_index, region) in regions.iter().enumerate() {
        let resolved = threshold.resolve(&region.shapes, adaptive);
        log::trace!(
            "region {} ({} shapes): row threshold {:.1}",
            region_index,
            region.shapes.len(),
            resolved
        );
        out.extend(
            group_rows(&region.shapes, resolved)
                .into_iter()
                .map(|row| RegionRow {
                    region: region_index,
                    row,
                }),
        );
    }
    out
}
