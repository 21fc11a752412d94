//! Search for a clean split line through a region.
//!
//! A vertical cut separates columns, a horizontal cut separates bands (for
//! instance a title band from the body below it). Both sweep the boxes along
//! the split axis, merging overlapping extents, and pick the midpoint of the
//! widest empty gap that is wide enough for the region.
//!
//! Boxes spanning most of the region along the split axis ("bridging"
//! shapes such as a full-width title or a full-height side bar) are ignored
//! while looking for the gap; they would otherwise hide every column gutter.

use crate::geometry::BoundingBox;
use crate::pipeline::config::XYCutConfig;

/// Direction of a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutDirection {
    /// Horizontal line at some `y`, splits top/bottom
    Horizontal,
    /// Vertical line at some `x`, splits left/right
    Vertical,
}

impl CutDirection {
    /// The perpendicular direction.
    pub fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `b` along the axis this direction splits.
    fn span(self, b: &BoundingBox) -> (f32, f32) {
        match self {
            Self::Horizontal => (b.top, b.bottom),
            Self::Vertical => (b.left, b.right),
        }
    }

    /// Length of `b` along the split axis.
    fn extent(self, b: &BoundingBox) -> f32 {
        let (start, end) = self.span(b);
        end - start
    }

    /// Center coordinate of `b` along the split axis.
    pub fn center(self, b: &BoundingBox) -> f32 {
        let (start, end) = self.span(b);
        (start + end) / 2.0
    }

    /// Split `region` at `coordinate` into (top, bottom) or (left, right).
    pub fn split(self, region: &BoundingBox, coordinate: f32) -> (BoundingBox, BoundingBox) {
        match self {
            Self::Horizontal => (
                BoundingBox::new(region.left, region.top, region.right, coordinate),
                BoundingBox::new(region.left, coordinate, region.right, region.bottom),
            ),
            Self::Vertical => (
                BoundingBox::new(region.left, region.top, coordinate, region.bottom),
                BoundingBox::new(coordinate, region.top, region.right, region.bottom),
            ),
        }
    }
}

/// An accepted split line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    /// Orientation of the line
    pub direction: CutDirection,
    /// `x` of a vertical cut, `y` of a horizontal one
    pub coordinate: f32,
    /// Non-bridging boxes ending at or before the line (within epsilon)
    pub first: Vec<usize>,
    /// Non-bridging boxes starting at or after the line (within epsilon)
    pub second: Vec<usize>,
    /// Bridging boxes excluded from the search
    pub bridging: Vec<usize>,
}

/// True when `b` spans at least `ratio` of `region` along the split axis.
fn spans_region(
    b: &BoundingBox,
    region: &BoundingBox,
    direction: CutDirection,
    ratio: f32,
) -> bool {
    let region_extent = direction.extent(region);
    region_extent > 0.0 && direction.extent(b) / region_extent >= ratio
}

/// True when `b` is a wide element of `region` (full-width title, header, footer).
pub fn is_wide(b: &BoundingBox, region: &BoundingBox, config: &XYCutConfig) -> bool {
    spans_region(b, region, CutDirection::Vertical, config.wide_span_ratio)
}

/// True when `b` is a tall element of `region` (side bar, decorative strip).
pub fn is_tall(b: &BoundingBox, region: &BoundingBox, config: &XYCutConfig) -> bool {
    spans_region(b, region, CutDirection::Horizontal, config.tall_span_ratio)
}

/// Find a column split of `region`.
///
/// Indices in the returned [`Cut`] refer to positions in `boxes`.
///
/// # Examples
///
/// ```
/// use shape_order::geometry::BoundingBox;
/// use shape_order::layout::find_vertical_cut;
/// use shape_order::pipeline::XYCutConfig;
///
/// let region = BoundingBox::new(0.0, 0.0, 500.0, 400.0);
/// let boxes = [
///     BoundingBox::new(0.0, 0.0, 200.0, 50.0),
///     BoundingBox::new(0.0, 100.0, 200.0, 150.0),
///     BoundingBox::new(300.0, 0.0, 500.0, 50.0),
///     BoundingBox::new(300.0, 100.0, 500.0, 150.0),
/// ];
/// let cut = find_vertical_cut(&boxes, &region, &XYCutConfig::default()).unwrap();
/// assert_eq!(cut.coordinate, 250.0);
/// assert_eq!(cut.first, vec![0, 1]);
/// assert_eq!(cut.second, vec![2, 3]);
/// ```
pub fn find_vertical_cut(
    boxes: &[BoundingBox],
    region: &BoundingBox,
    config: &XYCutConfig,
) -> Option<Cut> {
    find_cut(boxes, region, CutDirection::Vertical, config)
}

/// Find a band split of `region`, the mirror image of [`find_vertical_cut`].
pub fn find_horizontal_cut(
    boxes: &[BoundingBox],
    region: &BoundingBox,
    config: &XYCutConfig,
) -> Option<Cut> {
    find_cut(boxes, region, CutDirection::Horizontal, config)
}

/// Find a split of `region` in the given direction.
pub fn find_cut(
    boxes: &[BoundingBox],
    region: &BoundingBox,
    direction: CutDirection,
    config: &XYCutConfig,
) -> Option<Cut> {
    let (bridge_ratio, gap_ratio, min_gap) = match direction {
        CutDirection::Vertical => (
            config.wide_span_ratio,
            config.vertical_gap_ratio,
            config.min_vertical_gap,
        ),
        CutDirection::Horizontal => (
            config.tall_span_ratio,
            config.horizontal_gap_ratio,
            config.min_horizontal_gap,
        ),
    };

    let (bridging, candidates): (Vec<usize>, Vec<usize>) = (0..boxes.len())
        .partition(|&i| spans_region(&boxes[i], region, direction, bridge_ratio));

    if candidates.len() < 2 {
        return None;
    }

    let gap_threshold = (direction.extent(region) * gap_ratio).max(min_gap);

    let mut sorted = candidates.clone();
    sorted.sort_by(|&a, &b| {
        let (sa, _) = direction.span(&boxes[a]);
        let (sb, _) = direction.span(&boxes[b]);
        sa.total_cmp(&sb)
    });

    // Sweep with the furthest end seen so far; a gap only counts when no
    // earlier box reaches into it.
    let mut max_gap = 0.0f32;
    let mut best_cut = None;
    let (_, mut reach) = direction.span(&boxes[sorted[0]]);

    for &i in &sorted[1..] {
        let (start, end) = direction.span(&boxes[i]);
        let gap = start - reach;

        if gap > max_gap && gap >= gap_threshold {
            max_gap = gap;
            best_cut = Some((reach + start) / 2.0);
        }

        reach = reach.max(end);
    }

    let coordinate = best_cut?;
    let eps = config.cut_epsilon;

    log::trace!(
        "{:?} cut candidate at {:.1} (gap={:.1}, threshold={:.1}, candidates={}, bridging={})",
        direction,
        coordinate,
        max_gap,
        gap_threshold,
        candidates.len(),
        bridging.len()
    );

    let straddles = candidates.iter().any(|&i| {
        let (start, end) = direction.span(&boxes[i]);
        start < coordinate - eps && coordinate + eps < end
    });
    if straddles {
        log::trace!("{:?} cut at {:.1} rejected: a box crosses the line", direction, coordinate);
        return None;
    }

    let first: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| direction.span(&boxes[i]).1 <= coordinate + eps)
        .collect();
    let second: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| direction.span(&boxes[i]).0 >= coordinate - eps)
        .collect();

    if first.len() < config.min_shapes_per_region || second.len() < config.min_shapes_per_region {
        log::trace!(
            "{:?} cut at {:.1} rejected: sides {}/{} below minimum {}",
            direction,
            coordinate,
            first.len(),
            second.len(),
            config.min_shapes_per_region
        );
        return None;
    }

    Some(Cut {
        direction,
        coordinate,
        first,
        second,
        bridging,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 500.0, 400.0)
    }

    fn two_columns() -> Vec<BoundingBox> {
        vec![
            BoundingBox::new(0.0, 0.0, 200.0, 50.0),
            BoundingBox::new(300.0, 0.0, 500.0, 50.0),
            BoundingBox::new(0.0, 100.0, 200.0, 150.0),
            BoundingBox::new(300.0, 100.0, 500.0, 150.0),
        ]
    }

    #[test]
    fn test_vertical_cut_between_columns() {
        let cut = find_vertical_cut(&two_columns(), &region(), &XYCutConfig::default()).unwrap();
        assert_eq!(cut.direction, CutDirection::Vertical);
        assert_eq!(cut.coordinate, 250.0);
        assert_eq!(cut.first, vec![0, 2]);
        assert_eq!(cut.second, vec![1, 3]);
        assert!(cut.bridging.is_empty());
    }

    #[test]
    fn test_vertical_cut_ignores_wide_title() {
        let mut boxes = two_columns();
        boxes.push(BoundingBox::new(0.0, 200.0, 500.0, 250.0));
        let cut = find_vertical_cut(&boxes, &region(), &XYCutConfig::default()).unwrap();
        assert_eq!(cut.coordinate, 250.0);
        assert_eq!(cut.bridging, vec![4]);
    }

    #[test]
    fn test_gap_below_threshold_rejected() {
        // gap 30 < max(500 * 0.08, 40) = 40
        let boxes = vec![
            BoundingBox::new(0.0, 0.0, 235.0, 50.0),
            BoundingBox::new(265.0, 0.0, 500.0, 50.0),
            BoundingBox::new(0.0, 100.0, 235.0, 150.0),
            BoundingBox::new(265.0, 100.0, 500.0, 150.0),
        ];
        assert!(find_vertical_cut(&boxes, &region(), &XYCutConfig::default()).is_none());
    }

    #[test]
    fn test_gap_equal_to_threshold_accepted() {
        let boxes = vec![
            BoundingBox::new(0.0, 0.0, 230.0, 50.0),
            BoundingBox::new(270.0, 0.0, 500.0, 50.0),
            BoundingBox::new(0.0, 100.0, 230.0, 150.0),
            BoundingBox::new(270.0, 100.0, 500.0, 150.0),
        ];
        let cut = find_vertical_cut(&boxes, &region(), &XYCutConfig::default()).unwrap();
        assert_eq!(cut.coordinate, 250.0);
    }

    #[test]
    fn test_one_sided_cut_rejected() {
        // only one box right of the gap
        let boxes = vec![
            BoundingBox::new(0.0, 0.0, 200.0, 50.0),
            BoundingBox::new(0.0, 100.0, 200.0, 150.0),
            BoundingBox::new(300.0, 0.0, 500.0, 50.0),
        ];
        assert!(find_vertical_cut(&boxes, &region(), &XYCutConfig::default()).is_none());
    }

    #[test]
    fn test_too_few_candidates() {
        let boxes = vec![BoundingBox::new(0.0, 0.0, 100.0, 50.0)];
        assert!(find_vertical_cut(&boxes, &region(), &XYCutConfig::default()).is_none());
        assert!(find_horizontal_cut(&[], &region(), &XYCutConfig::default()).is_none());
    }

    #[test]
    fn test_widest_gap_wins() {
        let boxes = vec![
            BoundingBox::new(0.0, 0.0, 100.0, 50.0),
            BoundingBox::new(0.0, 60.0, 100.0, 90.0),
            BoundingBox::new(150.0, 0.0, 200.0, 50.0),
            BoundingBox::new(150.0, 60.0, 200.0, 90.0),
            BoundingBox::new(400.0, 0.0, 500.0, 50.0),
            BoundingBox::new(400.0, 60.0, 500.0, 90.0),
        ];
        let cut = find_vertical_cut(&boxes, &region(), &XYCutConfig::default()).unwrap();
        assert_eq!(cut.coordinate, 300.0);
        assert_eq!(cut.first, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_horizontal_cut_between_bands() {
        let boxes = vec![
            BoundingBox::new(0.0, 0.0, 200.0, 40.0),
            BoundingBox::new(300.0, 0.0, 500.0, 40.0),
            BoundingBox::new(0.0, 200.0, 200.0, 260.0),
            BoundingBox::new(300.0, 200.0, 500.0, 260.0),
        ];
        let cut = find_horizontal_cut(&boxes, &region(), &XYCutConfig::default()).unwrap();
        assert_eq!(cut.direction, CutDirection::Horizontal);
        assert_eq!(cut.coordinate, 120.0);
        assert_eq!(cut.first, vec![0, 1]);
        assert_eq!(cut.second, vec![2, 3]);
    }

    #[test]
    fn test_horizontal_cut_ignores_tall_bar() {
        let boxes = vec![
            BoundingBox::new(0.0, 0.0, 20.0, 400.0),
            BoundingBox::new(50.0, 0.0, 200.0, 40.0),
            BoundingBox::new(250.0, 0.0, 400.0, 40.0),
            BoundingBox::new(50.0, 200.0, 200.0, 260.0),
            BoundingBox::new(250.0, 200.0, 400.0, 260.0),
        ];
        let cut = find_horizontal_cut(&boxes, &region(), &XYCutConfig::default()).unwrap();
        assert_eq!(cut.coordinate, 120.0);
        assert_eq!(cut.bridging, vec![0]);
    }

    #[test]
    fn test_bridge_predicates() {
        let config = XYCutConfig::default();
        let r = region();
        assert!(is_wide(&BoundingBox::new(0.0, 0.0, 400.0, 10.0), &r, &config));
        assert!(!is_wide(&BoundingBox::new(0.0, 0.0, 399.0, 10.0), &r, &config));
        assert!(is_tall(&BoundingBox::new(0.0, 0.0, 10.0, 360.0), &r, &config));
        assert!(!is_tall(&BoundingBox::new(0.0, 0.0, 10.0, 359.0), &r, &config));

        let flat = BoundingBox::new(0.0, 0.0, 500.0, 0.0);
        assert!(!is_tall(&BoundingBox::new(0.0, 0.0, 10.0, 10.0), &flat, &config));
    }

    #[test]
    fn test_split_region() {
        let (left, right) = CutDirection::Vertical.split(&region(), 250.0);
        assert_eq!(left, BoundingBox::new(0.0, 0.0, 250.0, 400.0));
        assert_eq!(right, BoundingBox::new(250.0, 0.0, 500.0, 400.0));

        let (top, bottom) = CutDirection::Horizontal.split(&region(), 100.0);
        assert_eq!(top, BoundingBox::new(0.0, 0.0, 500.0, 100.0));
        assert_eq!(bottom, BoundingBox::new(0.0, 100.0, 500.0, 400.0));
    }
}
