//! Greedy grouping of shapes into visual rows.

use crate::layout::placed::PlacedShape;

/// Shapes sharing one visual line, left to right.
pub type Row = Vec<PlacedShape>;

/// Group shapes into rows, top to bottom.
///
/// Shapes are visited by anchor `(y, x)`. A shape joins the open row when its
/// anchor `y` lies within `threshold` of the row center; the center is the
/// running mean of every `y` merged so far, so a slow staircase of shapes
/// each just under the threshold from its predecessor does not chain into a
/// single row. Unreadable shapes (infinite anchors) sort last and each end
/// up in a row of their own.
///
/// Every input shape appears in exactly one output row.
///
/// # Examples
///
/// ```
/// use shape_order::layout::{group_rows, PlacedShape};
/// use shape_order::shape::SlideShape;
///
/// let shapes = vec![
///     SlideShape::new(2, 150.0, 12.0, 100.0, 20.0),
///     SlideShape::new(1, 0.0, 10.0, 100.0, 20.0),
///     SlideShape::new(3, 0.0, 80.0, 100.0, 20.0),
/// ];
/// let rows = group_rows(&PlacedShape::measure_all(&shapes), 22.0);
///
/// let ids: Vec<Vec<u32>> = rows
///     .iter()
///     .map(|row| row.iter().map(|p| shapes[p.index].id).collect())
///     .collect();
/// assert_eq!(ids, vec![vec![1, 2], vec![3]]);
/// ```
pub fn group_rows(shapes: &[PlacedShape], threshold: f32) -> Vec<Row> {
    let mut items = shapes.to_vec();
    items.sort_by(|a, b| {
        a.anchor
            .y
            .total_cmp(&b.anchor.y)
            .then_with(|| a.anchor.x.total_cmp(&b.anchor.x))
    });

    let mut rows = Vec::new();
    let mut current: Row = Vec::new();
    let mut center_y = 0.0f32;

    for item in items {
        if current.is_empty() {
            center_y = item.anchor.y;
            current.push(item);
            continue;
        }

        if (item.anchor.y - center_y).abs() <= threshold {
            current.push(item);
            let n = current.len() as f32;
            center_y = (center_y * (n - 1.0) + item.anchor.y) / n;
        } else {
            rows.push(close_row(std::mem::take(&mut current)));
            center_y = item.anchor.y;
            current.push(item);
        }
    }

    if !current.is_empty() {
        rows.push(close_row(current));
    }

    rows
}

fn close_row(mut row: Row) -> Row {
    row.sort_by(|a, b| a.anchor.x.total_cmp(&b.anchor.x));
    row
}
