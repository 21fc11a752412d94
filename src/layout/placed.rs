//! Per-call measured geometry of a shape.

use crate::geometry::{BoundingBox, Point};
use crate::shape::{content_height, shape_anchor, shape_bbox, Shape};

/// Geometry of one input shape, measured once per ordering call.
///
/// `index` is the position of the shape in the caller's (filtered) input and
/// is the only identity the layout algorithms carry around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedShape {
    /// Position of the shape in the ordered input
    pub index: usize,
    /// Canonical box, `None` when the shape's geometry is unreadable
    pub bbox: Option<BoundingBox>,
    /// Sort/row-matching anchor
    pub anchor: Point,
    /// Text ink height, when the shape has readable text bounds
    pub content_height: Option<f32>,
}

impl PlacedShape {
    /// Measure `shape`, remembering it as input number `index`.
    pub fn measure<S: Shape + ?Sized>(index: usize, shape: &S) -> Self {
        Self {
            index,
            bbox: shape_bbox(shape),
            anchor: shape_anchor(shape),
            content_height: content_height(shape),
        }
    }

    /// Measure every shape of a slice, indices follow slice order.
    pub fn measure_all<S: Shape>(shapes: &[S]) -> Vec<Self> {
        shapes
            .iter()
            .enumerate()
            .map(|(i, s)| Self::measure(i, s))
            .collect()
    }

    /// Create from a known box, anchored at the box center.
    pub fn from_bbox(index: usize, bbox: BoundingBox) -> Self {
        Self {
            index,
            bbox: Some(bbox),
            anchor: bbox.center(),
            content_height: None,
        }
    }
}
