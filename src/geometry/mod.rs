//! Geometric primitives for reading-order analysis.
//!
//! Two rectangle flavours are used throughout the crate:
//!
//! - [`Rect`] is a frame in `x/y/width/height` form, the way shape sources
//!   report positions (slide coordinates, points, y grows downwards).
//! - [`BoundingBox`] is the canonical `left/top/right/bottom` box every
//!   geometric decision is made on.

use serde::{Deserialize, Serialize};

/// A 2D point in slide space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point used for shapes whose position cannot be read.
    ///
    /// Sorting by `(y, x)` places it after every finite point.
    pub fn unreadable() -> Self {
        Self {
            x: f32::INFINITY,
            y: f32::INFINITY,
        }
    }
}

/// A rectangle in slide space, stored as origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// let center = rect.center();
    /// assert_eq!(center.x, 50.0);
    /// assert_eq!(center.y, 25.0);
    /// ```
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// True when every field is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Convert to edge form.
    pub fn to_bbox(&self) -> BoundingBox {
        BoundingBox::new(self.left(), self.top(), self.right(), self.bottom())
    }
}

/// An axis-aligned box in edge form, `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl BoundingBox {
    /// Create a box from its four edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Get the center point of the box.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(0.0, 10.0, 100.0, 30.0);
    /// let center = bbox.center();
    /// assert_eq!(center.x, 50.0);
    /// assert_eq!(center.y, 20.0);
    /// ```
    pub fn center(&self) -> Point {
        Point {
            x: (self.left + self.right) / 2.0,
            y: (self.top + self.bottom) / 2.0,
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Smallest box containing every box of the iterator, `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::geometry::BoundingBox;
    ///
    /// let boxes = [
    ///     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
    ///     BoundingBox::new(50.0, 20.0, 60.0, 90.0),
    /// ];
    /// let all = BoundingBox::enclosing(boxes.iter().copied()).unwrap();
    /// assert_eq!(all, BoundingBox::new(0.0, 0.0, 60.0, 90.0));
    /// ```
    pub fn enclosing<I>(boxes: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        boxes.into_iter().reduce(|acc, b| acc.union(&b))
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        rect.to_bbox()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_to_bbox() {
        let b = Rect::new(10.0, 20.0, 100.0, 50.0).to_bbox();
        assert_eq!(b, BoundingBox::new(10.0, 20.0, 110.0, 70.0));
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 50.0);
    }

    #[test]
    fn test_bbox_from_rect() {
        let b: BoundingBox = Rect::new(-5.0, 0.0, 10.0, 4.0).into();
        assert_eq!(b, BoundingBox::new(-5.0, 0.0, 5.0, 4.0));
        assert_eq!(b.center(), Point::new(0.0, 2.0));
    }

    #[test]
    fn test_rect_is_finite() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn test_bbox_union() {
        let a = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
        let b = BoundingBox::new(25.0, 25.0, 75.0, 75.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, 0.0, 75.0, 75.0));
    }

    #[test]
    fn test_enclosing_empty() {
        assert!(BoundingBox::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_unreadable_point_sorts_last() {
        let p = Point::unreadable();
        assert!(p.y > f32::MAX);
        assert_eq!(p.x.total_cmp(&1.0e30), std::cmp::Ordering::Greater);
    }
}
