//! Configuration for the reading-order pipeline.
//!
//! Every tunable of the engine lives in one of these immutable structs and
//! is passed by reference into each call; there is no global state, so
//! callers (and tests) can run with different tuning side by side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::placed::PlacedShape;
use crate::layout::row_threshold::row_threshold;

/// Which ordering strategy the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadingOrderStrategyType {
    /// XY-Cut column detection, then row grouping per region
    #[default]
    #[serde(rename = "xy_cut")]
    XYCut,
    /// Row grouping over the whole page
    #[serde(rename = "simple")]
    Simple,
}

/// Tolerance used to decide whether two shapes share a row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RowThresholdRepr", into = "RowThresholdRepr")]
pub enum RowThreshold {
    /// Estimate from text heights of the shapes being grouped
    #[default]
    Auto,
    /// Fixed tolerance in points
    Fixed(f32),
}

impl RowThreshold {
    /// A fixed threshold, rejecting negative or non-finite values.
    pub fn fixed(points: f32) -> Result<Self> {
        if points.is_finite() && points >= 0.0 {
            Ok(Self::Fixed(points))
        } else {
            Err(Error::InvalidRowThreshold(points.to_string()))
        }
    }

    /// The threshold to use for grouping `shapes`.
    ///
    /// `Auto` is estimated over exactly the shapes passed in, so each region
    /// handed to the row grouper gets its own tolerance.
    pub fn resolve(&self, shapes: &[PlacedShape], adaptive: &AdaptiveThresholdConfig) -> f32 {
        match *self {
            Self::Auto => row_threshold(shapes, adaptive),
            Self::Fixed(points) => points,
        }
    }
}

impl FromStr for RowThreshold {
    type Err = Error;

    /// Parse `"auto"` (any case) or a number of points.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let points: f32 = trimmed
            .parse()
            .map_err(|_| Error::InvalidRowThreshold(s.to_string()))?;
        Self::fixed(points).map_err(|_| Error::InvalidRowThreshold(s.to_string()))
    }
}

impl fmt::Display for RowThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed(points) => write!(f, "{}", points),
        }
    }
}

/// Serialized form: the string `"auto"` or a number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RowThresholdRepr {
    Points(f32),
    Mode(String),
}

impl TryFrom<RowThresholdRepr> for RowThreshold {
    type Error = Error;

    fn try_from(repr: RowThresholdRepr) -> Result<Self> {
        match repr {
            RowThresholdRepr::Points(points) => Self::fixed(points),
            RowThresholdRepr::Mode(mode) => mode.parse(),
        }
    }
}

impl From<RowThreshold> for RowThresholdRepr {
    fn from(threshold: RowThreshold) -> Self {
        match threshold {
            RowThreshold::Auto => Self::Mode("auto".to_string()),
            RowThreshold::Fixed(points) => Self::Points(points),
        }
    }
}

/// Parameters of the adaptive row threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveThresholdConfig {
    /// Factor applied to the median text height (default: 1.3)
    pub multiplier: f32,
    /// Lower clamp in points (default: 10.0)
    pub min_threshold: f32,
    /// Upper clamp in points (default: 100.0)
    pub max_threshold: f32,
    /// Threshold used when no shape has text heights (default: 22.0)
    pub fallback: f32,
}

impl Default for AdaptiveThresholdConfig {
    fn default() -> Self {
        Self {
            multiplier: 1.3,
            min_threshold: 10.0,
            max_threshold: 100.0,
            fallback: 22.0,
        }
    }
}

/// Tunables of the XY-Cut partitioner and cut finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XYCutConfig {
    /// Column gap threshold as a fraction of region width (default: 0.08)
    pub vertical_gap_ratio: f32,
    /// Minimum column gap in points (default: 40.0)
    pub min_vertical_gap: f32,
    /// Band gap threshold as a fraction of region height (default: 0.06)
    pub horizontal_gap_ratio: f32,
    /// Minimum band gap in points (default: 24.0)
    pub min_horizontal_gap: f32,
    /// Width fraction at which a shape bridges columns (default: 0.8)
    pub wide_span_ratio: f32,
    /// Height fraction at which a shape bridges bands (default: 0.9)
    pub tall_span_ratio: f32,
    /// Maximum recursion depth (default: 2)
    pub max_depth: u32,
    /// Minimum shapes on each side of a cut (default: 2)
    pub min_shapes_per_region: usize,
    /// Tolerance for straddle and side tests in points (default: 0.5)
    pub cut_epsilon: f32,
    /// Top fraction of a region where a wide shape counts as a title band (default: 0.25)
    pub title_band_ratio: f32,
    /// Width/height ratio above which columns are tried first (default: 1.5)
    pub landscape_ratio: f32,
}

impl Default for XYCutConfig {
    fn default() -> Self {
        Self {
            vertical_gap_ratio: 0.08,
            min_vertical_gap: 40.0,
            horizontal_gap_ratio: 0.06,
            min_horizontal_gap: 24.0,
            wide_span_ratio: 0.8,
            tall_span_ratio: 0.9,
            max_depth: 2,
            min_shapes_per_region: 2,
            cut_epsilon: 0.5,
            title_band_ratio: 0.25,
            landscape_ratio: 1.5,
        }
    }
}

impl XYCutConfig {
    /// Set the maximum recursion depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set column gap ratio and minimum.
    pub fn with_vertical_gap(mut self, ratio: f32, min_points: f32) -> Self {
        self.vertical_gap_ratio = ratio;
        self.min_vertical_gap = min_points;
        self
    }

    /// Set band gap ratio and minimum.
    pub fn with_horizontal_gap(mut self, ratio: f32, min_points: f32) -> Self {
        self.horizontal_gap_ratio = ratio;
        self.min_horizontal_gap = min_points;
        self
    }
}

/// Unified configuration for the reading-order pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingOrderConfig {
    /// Strategy to run; `Simple` disables multi-column detection
    pub strategy: ReadingOrderStrategyType,
    /// Same-row tolerance, `auto` or fixed points
    pub row_threshold: RowThreshold,
    /// Parameters of the `auto` row threshold
    pub adaptive_threshold: AdaptiveThresholdConfig,
    /// XY-Cut tunables
    pub xy_cut: XYCutConfig,
    /// Inputs smaller than this skip XY-Cut (default: 3)
    pub min_shapes_for_xy_cut: usize,
}

impl Default for ReadingOrderConfig {
    fn default() -> Self {
        Self {
            strategy: ReadingOrderStrategyType::default(),
            row_threshold: RowThreshold::default(),
            adaptive_threshold: AdaptiveThresholdConfig::default(),
            xy_cut: XYCutConfig::default(),
            min_shapes_for_xy_cut: 3,
        }
    }
}

impl ReadingOrderConfig {
    /// Default configuration: XY-Cut enabled, `auto` row threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row grouping only, no column detection.
    pub fn simple() -> Self {
        Self::new().with_strategy(ReadingOrderStrategyType::Simple)
    }

    /// Choose the strategy.
    pub fn with_strategy(mut self, strategy: ReadingOrderStrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable multi-column detection.
    pub fn with_xy_cut(self, enable: bool) -> Self {
        self.with_strategy(if enable {
            ReadingOrderStrategyType::XYCut
        } else {
            ReadingOrderStrategyType::Simple
        })
    }

    /// Set the row threshold mode.
    pub fn with_row_threshold(mut self, row_threshold: RowThreshold) -> Self {
        self.row_threshold = row_threshold;
        self
    }

    /// Replace the XY-Cut tunables.
    pub fn with_xy_cut_config(mut self, xy_cut: XYCutConfig) -> Self {
        self.xy_cut = xy_cut;
        self
    }

    /// Replace the adaptive threshold parameters.
    pub fn with_adaptive_threshold(mut self, adaptive: AdaptiveThresholdConfig) -> Self {
        self.adaptive_threshold = adaptive;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_order::pipeline::{ReadingOrderConfig, RowThreshold};
    ///
    /// let json = r#"{"row_threshold": 18, "xy_cut": {"max_depth": 3}}"#;
    /// let config = ReadingOrderConfig::from_json(json).unwrap();
    /// assert_eq!(config.row_threshold, RowThreshold::Fixed(18.0));
    /// assert_eq!(config.xy_cut.max_depth, 3);
    /// assert_eq!(config.xy_cut.min_vertical_gap, 40.0);
    /// assert_eq!(config.min_shapes_for_xy_cut, 3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable is in range.
    pub fn validate(&self) -> Result<()> {
        if let RowThreshold::Fixed(points) = self.row_threshold {
            RowThreshold::fixed(points)?;
        }

        let a = &self.adaptive_threshold;
        check("adaptive_threshold.multiplier", a.multiplier, positive)?;
        check("adaptive_threshold.min_threshold", a.min_threshold, non_negative)?;
        check("adaptive_threshold.max_threshold", a.max_threshold, non_negative)?;
        check("adaptive_threshold.fallback", a.fallback, non_negative)?;
        if a.min_threshold > a.max_threshold {
            return Err(Error::InvalidConfig {
                field: "adaptive_threshold.min_threshold",
                reason: format!(
                    "{} exceeds max_threshold {}",
                    a.min_threshold, a.max_threshold
                ),
            });
        }

        let x = &self.xy_cut;
        check("xy_cut.vertical_gap_ratio", x.vertical_gap_ratio, non_negative)?;
        check("xy_cut.min_vertical_gap", x.min_vertical_gap, non_negative)?;
        check("xy_cut.horizontal_gap_ratio", x.horizontal_gap_ratio, non_negative)?;
        check("xy_cut.min_horizontal_gap", x.min_horizontal_gap, non_negative)?;
        check("xy_cut.wide_span_ratio", x.wide_span_ratio, unit_ratio)?;
        check("xy_cut.tall_span_ratio", x.tall_span_ratio, unit_ratio)?;
        check("xy_cut.cut_epsilon", x.cut_epsilon, non_negative)?;
        check("xy_cut.title_band_ratio", x.title_band_ratio, non_negative)?;
        check("xy_cut.landscape_ratio", x.landscape_ratio, positive)?;
        if x.min_shapes_per_region == 0 {
            return Err(Error::InvalidConfig {
                field: "xy_cut.min_shapes_per_region",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn unit_ratio(v: f32) -> bool {
    positive(v) && v <= 1.0
}

fn check(field: &'static str, value: f32, valid: fn(f32) -> bool) -> Result<()> {
    if valid(value) {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("{} is out of range", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = ReadingOrderConfig::new();
        assert_eq!(config.strategy, ReadingOrderStrategyType::XYCut);
        assert_eq!(config.row_threshold, RowThreshold::Auto);
        assert_eq!(config.min_shapes_for_xy_cut, 3);

        let x = &config.xy_cut;
        assert_eq!(x.vertical_gap_ratio, 0.08);
        assert_eq!(x.min_vertical_gap, 40.0);
        assert_eq!(x.horizontal_gap_ratio, 0.06);
        assert_eq!(x.min_horizontal_gap, 24.0);
        assert_eq!(x.wide_span_ratio, 0.8);
        assert_eq!(x.tall_span_ratio, 0.9);
        assert_eq!(x.max_depth, 2);
        assert_eq!(x.min_shapes_per_region, 2);
        assert_eq!(x.cut_epsilon, 0.5);

        let a = &config.adaptive_threshold;
        assert_eq!(
            (a.multiplier, a.min_threshold, a.max_threshold, a.fallback),
            (1.3, 10.0, 100.0, 22.0)
        );

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_row_threshold_parse() {
        assert_eq!("auto".parse::<RowThreshold>().unwrap(), RowThreshold::Auto);
        assert_eq!(" AUTO ".parse::<RowThreshold>().unwrap(), RowThreshold::Auto);
        assert_eq!("18.5".parse::<RowThreshold>().unwrap(), RowThreshold::Fixed(18.5));
        assert!(matches!(
            "wide".parse::<RowThreshold>(),
            Err(Error::InvalidRowThreshold(_))
        ));
        assert!("-3".parse::<RowThreshold>().is_err());
        assert!("NaN".parse::<RowThreshold>().is_err());
    }

    #[test]
    fn test_row_threshold_display() {
        assert_eq!(RowThreshold::Auto.to_string(), "auto");
        assert_eq!(RowThreshold::Fixed(22.0).to_string(), "22");
    }

    #[test]
    fn test_row_threshold_serde() {
        let auto: RowThreshold = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, RowThreshold::Auto);
        let fixed: RowThreshold = serde_json::from_str("30").unwrap();
        assert_eq!(fixed, RowThreshold::Fixed(30.0));
        assert!(serde_json::from_str::<RowThreshold>("\"sideways\"").is_err());

        assert_eq!(serde_json::to_string(&RowThreshold::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&RowThreshold::Fixed(12.5)).unwrap(), "12.5");
    }

    #[test]
    fn test_fixed_threshold_resolves_verbatim() {
        let t = RowThreshold::Fixed(7.0).resolve(&[], &AdaptiveThresholdConfig::default());
        assert_eq!(t, 7.0);
        let t = RowThreshold::Auto.resolve(&[], &AdaptiveThresholdConfig::default());
        assert_eq!(t, 22.0);
    }

    #[test]
    fn test_with_xy_cut_toggle() {
        assert_eq!(
            ReadingOrderConfig::new().with_xy_cut(false).strategy,
            ReadingOrderStrategyType::Simple
        );
        assert_eq!(
            ReadingOrderConfig::simple().with_xy_cut(true).strategy,
            ReadingOrderStrategyType::XYCut
        );
    }

    #[test]
    fn test_gap_builders() {
        let xy = XYCutConfig::default()
            .with_vertical_gap(0.1, 30.0)
            .with_horizontal_gap(0.05, 12.0);
        assert_eq!((xy.vertical_gap_ratio, xy.min_vertical_gap), (0.1, 30.0));
        assert_eq!((xy.horizontal_gap_ratio, xy.min_horizontal_gap), (0.05, 12.0));
        assert_eq!(xy.max_depth, 2);

        let config = ReadingOrderConfig::new().with_xy_cut_config(xy.clone());
        assert_eq!(config.xy_cut, xy);
        assert!(config.validate().is_ok());

        let negative = XYCutConfig::default().with_vertical_gap(0.08, -5.0);
        assert!(ReadingOrderConfig::new()
            .with_xy_cut_config(negative)
            .validate()
            .is_err());
    }

    #[test]
    fn test_adaptive_threshold_builder() {
        let adaptive = AdaptiveThresholdConfig {
            multiplier: 2.0,
            min_threshold: 5.0,
            max_threshold: 40.0,
            fallback: 15.0,
        };
        let config = ReadingOrderConfig::new().with_adaptive_threshold(adaptive.clone());
        assert_eq!(config.adaptive_threshold, adaptive);
        assert!(config.validate().is_ok());

        let inverted = AdaptiveThresholdConfig {
            min_threshold: 50.0,
            max_threshold: 40.0,
            ..AdaptiveThresholdConfig::default()
        };
        assert!(ReadingOrderConfig::new()
            .with_adaptive_threshold(inverted)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ReadingOrderConfig::new();
        config.xy_cut.min_shapes_per_region = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field: "xy_cut.min_shapes_per_region", .. })
        ));

        let mut config = ReadingOrderConfig::new();
        config.xy_cut.vertical_gap_ratio = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = ReadingOrderConfig::new();
        config.adaptive_threshold.min_threshold = 200.0;
        assert!(config.validate().is_err());

        let config = ReadingOrderConfig::new().with_row_threshold(RowThreshold::Fixed(-1.0));
        assert!(matches!(config.validate(), Err(Error::InvalidRowThreshold(_))));
    }

    #[test]
    fn test_from_json_strategy_names() {
        let json = r#"{"strategy": "simple", "row_threshold": "auto"}"#;
        let config = ReadingOrderConfig::from_json(json).unwrap();
        assert_eq!(config.strategy, ReadingOrderStrategyType::Simple);
        assert_eq!(config.xy_cut, XYCutConfig::default());

        assert!(ReadingOrderConfig::from_json(r#"{"strategy": "columns"}"#).is_err());
        assert!(ReadingOrderConfig::from_json(r#"{"xy_cut": {"cut_epsilon": -1}}"#).is_err());
    }
}
