//! Geometric layout analysis for slide shapes.
//!
//! This module provides the algorithms the reading order pipeline is built on:
//! - Per-shape measurement (bounding box, anchor, text height)
//! - Adaptive "same row" threshold estimation
//! - Greedy row grouping
//! - Whitespace cut finding and XY-Cut column detection

pub mod column_detector;
pub mod cut_finder;
pub mod placed;
pub mod row_threshold;
pub mod rows;

// Re-export main types
pub use column_detector::{xy_cut, LeafReason, LeafRegion};
pub use cut_finder::{
    find_cut, find_horizontal_cut, find_vertical_cut, is_tall, is_wide, Cut, CutDirection,
};
pub use placed::PlacedShape;
pub use row_threshold::row_threshold;
pub use rows::{group_rows, Row};
