//! Error types for the reading-order engine.
//!
//! Ordering itself never fails: missing geometry and unusable layouts degrade
//! to simpler orderings. Errors only come from the configuration and input
//! boundary.

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating configuration or loading page descriptions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tunable is outside its valid range.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Row threshold is neither `auto` nor a finite, non-negative number.
    #[error("Invalid row threshold: '{0}' (expected \"auto\" or a non-negative number)")]
    InvalidRowThreshold(String),

    /// JSON page description or configuration could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
