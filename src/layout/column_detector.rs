//! XY-Cut region partitioning for multi-column detection.
//!
//! The page is split recursively, each step trying one clean cut through the
//! current region (see [`cut_finder`](crate::layout::cut_finder)). Recursion
//! is bounded by [`XYCutConfig::max_depth`]; a region that cannot or may not
//! be split further becomes a leaf and is later flattened into rows.
//!
//! Leaves come out in reading order: top before bottom, left before right.

use crate::geometry::BoundingBox;
use crate::layout::cut_finder::{find_cut, is_wide, CutDirection};
use crate::layout::placed::PlacedShape;
use crate::pipeline::config::XYCutConfig;

/// Why a region was not split any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafReason {
    /// Region holds a single shape
    SingleShape,
    /// Recursion depth limit reached
    DepthLimit,
    /// Neither direction produced a valid cut
    NoCut,
    /// Some shape's geometry is unreadable; the whole input is one leaf
    GeometryUnavailable,
}

/// A region the partitioner stopped at.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRegion {
    /// Region rectangle, `None` when geometry was unavailable
    pub bbox: Option<BoundingBox>,
    /// Recursion depth the leaf was produced at
    pub depth: u32,
    /// Shapes assigned to the region
    pub shapes: Vec<PlacedShape>,
    /// Why partitioning stopped here
    pub reason: LeafReason,
}

impl LeafRegion {
    /// A leaf holding the entire input when its geometry is unusable.
    pub fn fallback(shapes: Vec<PlacedShape>) -> Self {
        Self {
            bbox: None,
            depth: 0,
            shapes,
            reason: LeafReason::GeometryUnavailable,
        }
    }
}

/// Partition `shapes` inside `region` into leaf regions in reading order.
///
/// If any shape has no bounding box the input is not partitioned at all and
/// comes back as a single [`LeafReason::GeometryUnavailable`] leaf, so a
/// partial geometry failure can never drop shapes or produce a half-right
/// split. An empty input yields no leaves.
///
/// # Examples
///
/// ```
/// use shape_order::geometry::BoundingBox;
/// use shape_order::layout::{xy_cut, PlacedShape};
/// use shape_order::pipeline::XYCutConfig;
///
/// let boxes = [
///     BoundingBox::new(0.0, 0.0, 200.0, 50.0),
///     BoundingBox::new(300.0, 0.0, 500.0, 50.0),
///     BoundingBox::new(0.0, 60.0, 200.0, 110.0),
///     BoundingBox::new(300.0, 60.0, 500.0, 110.0),
/// ];
/// let shapes: Vec<_> = boxes
///     .iter()
///     .enumerate()
///     .map(|(i, b)| PlacedShape::from_bbox(i, *b))
///     .collect();
///
/// let leaves = xy_cut(shapes, BoundingBox::new(0.0, 0.0, 500.0, 400.0), &XYCutConfig::default());
/// let columns: Vec<Vec<usize>> = leaves
///     .iter()
///     .map(|leaf| leaf.shapes.iter().map(|s| s.index).collect())
///     .collect();
/// assert_eq!(columns, vec![vec![0, 2], vec![1, 3]]);
/// ```
pub fn xy_cut(
    shapes: Vec<PlacedShape>,
    region: BoundingBox,
    config: &XYCutConfig,
) -> Vec<LeafRegion> {
    let boxed: Option<Vec<(PlacedShape, BoundingBox)>> =
        shapes.iter().map(|s| s.bbox.map(|b| (*s, b))).collect();

    match boxed {
        Some(boxed) => partition(boxed, region, 0, config),
        None => {
            if let Some(missing) = shapes.iter().find(|s| s.bbox.is_none()) {
                log::warn!(
                    "XY-Cut: geometry of shape #{} is unreadable, falling back to row ordering for all {} shapes",
                    missing.index,
                    shapes.len()
                );
            }
            vec![LeafRegion::fallback(shapes)]
        },
    }
}

fn leaf(
    items: Vec<(PlacedShape, BoundingBox)>,
    region: BoundingBox,
    depth: u32,
    reason: LeafReason,
) -> Vec<LeafRegion> {
    log::debug!(
        "XY-Cut (depth={}): leaf {:?} with {} shapes in ({:.1}, {:.1})-({:.1}, {:.1})",
        depth,
        reason,
        items.len(),
        region.left,
        region.top,
        region.right,
        region.bottom
    );
    vec![LeafRegion {
        bbox: Some(region),
        depth,
        shapes: items.into_iter().map(|(s, _)| s).collect(),
        reason,
    }]
}

fn partition(
    items: Vec<(PlacedShape, BoundingBox)>,
    region: BoundingBox,
    depth: u32,
    config: &XYCutConfig,
) -> Vec<LeafRegion> {
    match items.len() {
        0 => return Vec::new(),
        1 => return leaf(items, region, depth, LeafReason::SingleShape),
        _ => {},
    }

    if depth >= config.max_depth {
        return leaf(items, region, depth, LeafReason::DepthLimit);
    }

    let boxes: Vec<BoundingBox> = items.iter().map(|(_, b)| *b).collect();
    let preferred = preferred_direction(&boxes, &region, config);

    let cut = find_cut(&boxes, &region, preferred, config)
        .or_else(|| find_cut(&boxes, &region, preferred.other(), config));

    let Some(cut) = cut else {
        return leaf(items, region, depth, LeafReason::NoCut);
    };

    let (first, second): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|(_, b)| cut.direction.center(b) < cut.coordinate);

    log::debug!(
        "XY-Cut (depth={}): {:?} cut at {:.1} (preferred {:?}), {} | {} shapes",
        depth,
        cut.direction,
        cut.coordinate,
        preferred,
        first.len(),
        second.len()
    );

    let (first_region, second_region) = cut.direction.split(&region, cut.coordinate);

    let mut leaves = partition(first, first_region, depth + 1, config);
    leaves.extend(partition(second, second_region, depth + 1, config));
    leaves
}

/// Direction to try first for `region`.
///
/// A wide element near the top suggests "title band over body": cut
/// horizontally first. Otherwise landscape regions try columns first.
fn preferred_direction(
    boxes: &[BoundingBox],
    region: &BoundingBox,
    config: &XYCutConfig,
) -> CutDirection {
    let width = region.width();
    let height = region.height();

    let band = height * config.title_band_ratio;
    let has_top_wide = boxes
        .iter()
        .any(|b| is_wide(b, region, config) && (b.top - region.top) <= band);

    if !has_top_wide && width > height * config.landscape_ratio {
        CutDirection::Vertical
    } else {
        CutDirection::Horizontal
    }
}
