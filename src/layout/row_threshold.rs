//! Adaptive "same row" tolerance.
//!
//! The tolerance follows the typical text size on the page: the median ink
//! height of all text-bearing shapes, scaled by a small factor so text boxes
//! of the same nominal size but slightly different baselines still match.
//! The median keeps one oversized decorative element from inflating it.

use crate::layout::placed::PlacedShape;
use crate::pipeline::config::AdaptiveThresholdConfig;

/// Estimate the row threshold (points) for a set of shapes.
///
/// Returns `config.fallback` when no shape has a positive text height.
/// Otherwise `median * config.multiplier`, clamped into
/// `[config.min_threshold, config.max_threshold]`. The median is the element
/// at index `len / 2` of the sorted heights (no interpolation).
///
/// # Examples
///
/// ```
/// use shape_order::layout::{row_threshold, PlacedShape};
/// use shape_order::pipeline::AdaptiveThresholdConfig;
/// use shape_order::shape::SlideShape;
///
/// let shapes = vec![
///     SlideShape::new(1, 0.0, 0.0, 100.0, 40.0).with_content(0.0, 0.0, 90.0, 20.0),
///     SlideShape::new(2, 0.0, 50.0, 100.0, 40.0).with_content(0.0, 0.0, 90.0, 20.0),
/// ];
/// let placed = PlacedShape::measure_all(&shapes);
/// let t = row_threshold(&placed, &AdaptiveThresholdConfig::default());
/// assert!((t - 26.0).abs() < 1e-4);
/// ```
pub fn row_threshold(shapes: &[PlacedShape], config: &AdaptiveThresholdConfig) -> f32 {
    let mut heights: Vec<f32> = shapes
        .iter()
        .filter_map(|s| s.content_height)
        .filter(|h| h.is_finite() && *h > 0.0)
        .collect();

    if heights.is_empty() {
        log::debug!(
            "Adaptive row threshold: no text heights, using fallback {:.1}",
            config.fallback
        );
        return config.fallback;
    }

    heights.sort_by(|a, b| a.total_cmp(b));
    let median = heights[heights.len() / 2];

    let threshold = (median * config.multiplier)
        .max(config.min_threshold)
        .min(config.max_threshold);

    log::debug!(
        "Adaptive row threshold: median={:.1}, threshold={:.1} (samples={})",
        median,
        threshold,
        heights.len()
    );

    threshold
}
