//! Shape source interface and canonical shape geometry.
//!
//! The engine never looks inside a shape. It only needs a stable identity,
//! the outer frame and, for text-bearing shapes, the tighter rectangle the
//! text ink actually occupies (reported relative to the frame origin).
//!
//! Any of those reads may fail on a real document; a failed frame read is
//! modelled as `None` and propagates as an absent [`BoundingBox`], never as
//! a zero-sized one.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{BoundingBox, Point, Rect};

/// A positioned block on a page: paragraph, picture, table, embedded object.
pub trait Shape {
    /// Identity used for exclusion and permutation bookkeeping.
    type Id: Clone + Eq + Hash + Debug;

    /// Stable identity of this shape.
    fn id(&self) -> Self::Id;

    /// Outer frame, `None` when it cannot be read.
    fn frame(&self) -> Option<Rect>;

    /// Ink bounds of the shape's text, relative to the frame origin.
    ///
    /// `None` for shapes without text or when the bounds cannot be read.
    fn content_bounds(&self) -> Option<Rect> {
        None
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    type Id = S::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn frame(&self) -> Option<Rect> {
        (**self).frame()
    }

    fn content_bounds(&self) -> Option<Rect> {
        (**self).content_bounds()
    }
}

/// Frame of `shape` if it is usable as geometry.
fn readable_frame<S: Shape + ?Sized>(shape: &S) -> Option<Rect> {
    shape
        .frame()
        .filter(|f| f.is_finite() && f.width >= 0.0 && f.height >= 0.0)
}

/// Canonical bounding box of a shape.
///
/// Prefers the content rectangle translated to slide coordinates and clamped
/// into the outer frame. Falls back to the outer frame when the content
/// rectangle is missing, degenerate, or clamps away to nothing. Returns
/// `None` only when the frame itself is unreadable.
///
/// # Examples
///
/// ```
/// use shape_order::geometry::{BoundingBox, Rect};
/// use shape_order::shape::{shape_bbox, SlideShape};
///
/// let shape = SlideShape::new(1, 100.0, 50.0, 200.0, 80.0).with_content(10.0, 5.0, 120.0, 20.0);
/// assert_eq!(shape_bbox(&shape), Some(BoundingBox::new(110.0, 55.0, 230.0, 75.0)));
///
/// let broken = SlideShape::unreadable(2);
/// assert_eq!(shape_bbox(&broken), None);
/// ```
pub fn shape_bbox<S: Shape + ?Sized>(shape: &S) -> Option<BoundingBox> {
    let outer = readable_frame(shape)?.to_bbox();

    let content = shape
        .content_bounds()
        .filter(|c| c.is_finite() && c.width > 0.0 && c.height > 0.0);

    if let Some(c) = content {
        let left = (outer.left + c.x).max(outer.left);
        let top = (outer.top + c.y).max(outer.top);
        let right = (outer.left + c.x + c.width).min(outer.right);
        let bottom = (outer.top + c.y + c.height).min(outer.bottom);

        if right > left && bottom > top {
            return Some(BoundingBox::new(left, top, right, bottom));
        }
    }

    Some(outer)
}

/// Point a shape is sorted and row-matched by.
///
/// Center of [`shape_bbox`], else center of the raw frame, else
/// [`Point::unreadable`] so the shape sorts after everything else.
pub fn shape_anchor<S: Shape + ?Sized>(shape: &S) -> Point {
    shape_bbox(shape)
        .map(|b| b.center())
        .or_else(|| shape.frame().filter(Rect::is_finite).map(|f| f.center()))
        .unwrap_or_else(Point::unreadable)
}

/// Height of the shape's text ink, when readable and positive.
pub fn content_height<S: Shape + ?Sized>(shape: &S) -> Option<f32> {
    shape
        .content_bounds()
        .map(|c| c.height)
        .filter(|h| h.is_finite() && *h > 0.0)
}

/// A shape described by plain numbers, e.g. loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideShape {
    /// Shape identity
    pub id: u32,
    /// Outer frame; `None` means the frame could not be read
    #[serde(default)]
    pub frame: Option<Rect>,
    /// Text ink bounds relative to the frame origin
    #[serde(default)]
    pub content: Option<Rect>,
}

impl SlideShape {
    /// Create a shape with a readable frame and no text bounds.
    pub fn new(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            frame: Some(Rect::new(x, y, width, height)),
            content: None,
        }
    }

    /// Create a shape whose geometry cannot be read.
    pub fn unreadable(id: u32) -> Self {
        Self {
            id,
            frame: None,
            content: None,
        }
    }

    /// Attach text ink bounds (relative to the frame origin).
    pub fn with_content(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.content = Some(Rect::new(x, y, width, height));
        self
    }
}

impl Shape for SlideShape {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn frame(&self) -> Option<Rect> {
        self.frame
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.content
    }
}

/// One page (slide) worth of shapes plus the page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidePage {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Shapes on the page, in source order
    #[serde(default)]
    pub shapes: Vec<SlideShape>,
}

impl SlidePage {
    /// Create an empty page of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Parse a page description from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::shape::SlidePage;
    ///
    /// let page = SlidePage::from_json(
    ///     r#"{"width": 720, "height": 540,
    ///         "shapes": [{"id": 3, "frame": {"x": 10, "y": 10, "width": 100, "height": 20}}]}"#,
    /// ).unwrap();
    /// assert_eq!(page.shapes.len(), 1);
    /// assert!(page.shapes[0].content.is_none());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The page rectangle `(0, 0, width, height)`.
    pub fn page_bbox(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}
