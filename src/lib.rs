// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::doc_overindented_list_items)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Shape Order
//!
//! Visual reading order for positioned slide shapes.
//!
//! Given the shapes of one slide (text boxes, pictures, tables, embedded
//! objects) with their frames, the crate produces the order a person would
//! read them in: top to bottom, left to right, one column after the other.
//!
//! ## Core Features
//!
//! - **Adaptive Rows**: shapes share a row when their centers lie within a
//!   tolerance estimated from the median text height on the slide
//! - **Column Detection**: bounded-depth XY-Cut splits title bands and
//!   columns at whitespace gaps, ignoring full-width bridging shapes
//! - **Total by Construction**: unreadable geometry degrades the call to
//!   plain row ordering; no shape is ever dropped or duplicated
//! - **Pluggable Design**: trait-based strategies, immutable serde-backed
//!   configuration, generic over the caller's own shape type
//!
//! ## Quick Start
//!
//! ```
//! use shape_order::pipeline::{ReadingOrderContext, ReadingOrderPipeline};
//! use shape_order::shape::SlideShape;
//!
//! // Title and slide number over two columns on a 500x400 slide
//! let shapes = vec![
//!     SlideShape::new(5, 300.0, 100.0, 200.0, 50.0),
//!     SlideShape::new(1, 0.0, 0.0, 400.0, 50.0),
//!     SlideShape::new(2, 420.0, 10.0, 60.0, 30.0),
//!     SlideShape::new(3, 0.0, 100.0, 200.0, 50.0),
//!     SlideShape::new(4, 0.0, 160.0, 200.0, 50.0),
//!     SlideShape::new(6, 300.0, 160.0, 200.0, 50.0),
//! ];
//!
//! let pipeline = ReadingOrderPipeline::new();
//! let context = ReadingOrderContext::new().with_page_size(500.0, 400.0);
//! let order = pipeline.process(&shapes, &context);
//!
//! assert_eq!(order.ids(), vec![1, 2, 3, 4, 5, 6]);
//! ```
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at
//! your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry primitives and the shape source interface
pub mod geometry;
pub mod shape;

// Layout analysis (rows, cuts, XY-Cut)
pub mod layout;

// Reading order pipeline
pub mod pipeline;

// Re-exports
pub use error::{Error, Result};
pub use pipeline::{
    group_shapes_by_visual_rows, sort_shapes_by_visual_position, ReadingOrder,
    ReadingOrderConfig, ReadingOrderContext, ReadingOrderPipeline, XYCutStrategy,
};
pub use shape::{Shape, SlidePage, SlideShape};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
