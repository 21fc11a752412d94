//! Ordered shapes handed to content renderers.
//!
//! This module provides the [`OrderedShape`] type which pairs a borrowed
//! input shape with its position in the reading order, and the
//! [`ReadingOrder`] collection returned by the pipeline.

use crate::shape::Shape;

/// Source of reading order assignment.
///
/// Tracks which strategy/method determined the reading order of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingOrderSource {
    /// Order from XY-Cut partitioning followed by per-region row grouping.
    XYCut,
    /// Order from row grouping over the whole page.
    #[default]
    Simple,
    /// Row grouping over the whole page because some shape's geometry was
    /// unreadable while column detection was requested.
    Fallback,
}

impl ReadingOrderSource {
    /// Get strategy name for debugging.
    pub fn name(&self) -> &'static str {
        match self {
            ReadingOrderSource::XYCut => "XYCut",
            ReadingOrderSource::Simple => "Simple",
            ReadingOrderSource::Fallback => "Fallback",
        }
    }
}

/// A shape with an assigned reading order index.
#[derive(Debug)]
pub struct OrderedShape<'a, S: Shape> {
    /// The underlying input shape.
    pub shape: &'a S,

    /// Index in reading order (0 = first to be read).
    pub reading_order: usize,

    /// Visual row the shape belongs to (0 = first row).
    pub row: usize,

    /// Leaf region the row came from (0 = first region).
    pub region: usize,

    /// Which strategy produced the order.
    pub source: ReadingOrderSource,
}

impl<'a, S: Shape> Clone for OrderedShape<'a, S> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape,
            reading_order: self.reading_order,
            row: self.row,
            region: self.region,
            source: self.source,
        }
    }
}

impl<'a, S: Shape> OrderedShape<'a, S> {
    /// Identity of the underlying shape.
    pub fn id(&self) -> S::Id {
        self.shape.id()
    }
}

/// The ordered output of one pipeline call.
///
/// Shapes are stored in reading order; row and region boundaries stay
/// available for renderers that merge neighbouring shapes of one row (for
/// example a standalone list number next to its title).
#[derive(Debug)]
pub struct ReadingOrder<'a, S: Shape> {
    shapes: Vec<OrderedShape<'a, S>>,
    source: ReadingOrderSource,
}

impl<'a, S: Shape> ReadingOrder<'a, S> {
    /// Create from shapes already in reading order.
    pub fn new(shapes: Vec<OrderedShape<'a, S>>, source: ReadingOrderSource) -> Self {
        Self { shapes, source }
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Strategy that produced this order.
    pub fn source(&self) -> ReadingOrderSource {
        self.source
    }

    /// Iterate over ordered shapes.
    pub fn iter(&self) -> impl Iterator<Item = &OrderedShape<'a, S>> {
        self.shapes.iter()
    }

    /// Shapes in reading order.
    pub fn shapes(&self) -> Vec<&'a S> {
        self.shapes.iter().map(|o| o.shape).collect()
    }

    /// Shape identities in reading order.
    pub fn ids(&self) -> Vec<S::Id> {
        self.shapes.iter().map(OrderedShape::id).collect()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.shapes.last().map_or(0, |o| o.row + 1)
    }

    /// Shapes grouped by row, rows in reading order.
    pub fn rows(&self) -> Vec<Vec<&'a S>> {
        let mut rows: Vec<Vec<&'a S>> = Vec::with_capacity(self.row_count());
        for ordered in &self.shapes {
            if rows.len() <= ordered.row {
                rows.push(Vec::new());
            }
            if let Some(row) = rows.last_mut() {
                row.push(ordered.shape);
            }
        }
        rows
    }

    /// Get the underlying vector.
    pub fn into_inner(self) -> Vec<OrderedShape<'a, S>> {
        self.shapes
    }
}

impl<'a, S: Shape> IntoIterator for ReadingOrder<'a, S> {
    type Item = OrderedShape<'a, S>;
    type IntoIter = std::vec::IntoIter<OrderedShape<'a, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::SlideShape;

    fn ordered<'a>(shapes: &'a [SlideShape], rows: &[usize]) -> ReadingOrder<'a, SlideShape> {
        let list = shapes
            .iter()
            .zip(rows)
            .enumerate()
            .map(|(i, (shape, &row))| OrderedShape {
                shape,
                reading_order: i,
                row,
                region: 0,
                source: ReadingOrderSource::Simple,
            })
            .collect();
        ReadingOrder::new(list, ReadingOrderSource::Simple)
    }

    #[test]
    fn test_rows_follow_row_indices() {
        let shapes = vec![
            SlideShape::new(1, 0.0, 0.0, 10.0, 10.0),
            SlideShape::new(2, 20.0, 0.0, 10.0, 10.0),
            SlideShape::new(3, 0.0, 50.0, 10.0, 10.0),
        ];
        let order = ordered(&shapes, &[0, 0, 1]);

        assert_eq!(order.len(), 3);
        assert_eq!(order.row_count(), 2);
        assert_eq!(order.ids(), vec![1, 2, 3]);

        let rows: Vec<Vec<u32>> = order
            .rows()
            .iter()
            .map(|r| r.iter().map(|s| s.id).collect())
            .collect();
        assert_eq!(rows, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_empty_order() {
        let order = ordered(&[], &[]);
        assert!(order.is_empty());
        assert_eq!(order.row_count(), 0);
        assert!(order.rows().is_empty());
    }

    #[test]
    fn test_into_inner_and_into_iter() {
        let shapes = vec![
            SlideShape::new(7, 0.0, 0.0, 10.0, 10.0),
            SlideShape::new(8, 0.0, 40.0, 10.0, 10.0),
        ];

        let inner = ordered(&shapes, &[0, 1]).into_inner();
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[1].id(), 8);
        assert_eq!(inner[1].row, 1);

        let mut positions = Vec::new();
        for o in ordered(&shapes, &[0, 1]) {
            positions.push((o.id(), o.reading_order));
        }
        assert_eq!(positions, vec![(7, 0), (8, 1)]);
    }

    #[test]
    fn test_source_names() {
        assert_eq!(ReadingOrderSource::XYCut.name(), "XYCut");
        assert_eq!(ReadingOrderSource::default(), ReadingOrderSource::Simple);
        assert_eq!(ReadingOrderSource::Fallback.name(), "Fallback");
    }
}
