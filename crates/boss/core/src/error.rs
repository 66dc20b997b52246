//! Error types for boss-core.
//!
//! The per-tick pipeline never fails: degenerate inputs are clamped or fall
//! back to documented defaults. The only fallible surface is configuration
//! validation, which tooling runs before handing a config to the engine.

/// Violation reported by [`crate::BossConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{low}` must not exceed `{high}`")]
    InvertedThreshold {
        low: &'static str,
        high: &'static str,
    },

    #[error("`{min}` must not exceed `{max}`")]
    InvertedRange {
        min: &'static str,
        max: &'static str,
    },

    #[error("`{field}` must be a ratio in [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: f32 },

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

impl ConfigError {
    /// Name of the offending field (the upper bound for inverted pairs).
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvertedThreshold { high, .. } => *high,
            Self::InvertedRange { max, .. } => *max,
            Self::RatioOutOfRange { field, .. }
            | Self::NegativeValue { field, .. }
            | Self::NonPositive { field, .. } => *field,
        }
    }
}
