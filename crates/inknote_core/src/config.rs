//! Tunable thresholds for the ink pipeline.
//!
//! # Responsibility
//! - Hold distance thresholds used by pen filtering, erasing and swipes.
//! - Decode host-provided overrides from JSON.
//!
//! # Invariants
//! - Every threshold is finite and strictly positive.
//! - `pen_min_distance < pen_max_distance`.
//! - The logical page size is fixed and deliberately not part of this config.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound (exclusive) of the pen band-pass filter.
pub const DEFAULT_PEN_MIN_DISTANCE: f32 = 3.0;
/// Upper bound (inclusive) of the pen band-pass filter.
pub const DEFAULT_PEN_MAX_DISTANCE: f32 = 30.0;
/// Minimum spacing (exclusive) between simplified eraser points.
pub const DEFAULT_ERASER_MIN_SPACING: f32 = 5.0;
/// Eraser hit radius (inclusive).
pub const DEFAULT_ERASER_HIT_RADIUS: f32 = 10.0;
/// Minimum `|dx| + |dy|` for a move to cast a swipe vote.
pub const DEFAULT_SWIPE_MIN_DELTA: f32 = 10.0;

/// Ink pipeline thresholds, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkConfig {
    pub pen_min_distance: f32,
    pub pen_max_distance: f32,
    pub eraser_min_spacing: f32,
    pub eraser_hit_radius: f32,
    pub swipe_min_delta: f32,
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            pen_min_distance: DEFAULT_PEN_MIN_DISTANCE,
            pen_max_distance: DEFAULT_PEN_MAX_DISTANCE,
            eraser_min_spacing: DEFAULT_ERASER_MIN_SPACING,
            eraser_hit_radius: DEFAULT_ERASER_HIT_RADIUS,
            swipe_min_delta: DEFAULT_SWIPE_MIN_DELTA,
        }
    }
}

impl InkConfig {
    /// Parses a JSON override document; missing keys keep their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` when the document is not valid JSON for this shape.
    /// - Any `validate()` error for the decoded values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates threshold invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("pen_min_distance", self.pen_min_distance),
            ("pen_max_distance", self.pen_max_distance),
            ("eraser_min_spacing", self.eraser_min_spacing),
            ("eraser_hit_radius", self.eraser_hit_radius),
            ("swipe_min_delta", self.swipe_min_delta),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.pen_min_distance >= self.pen_max_distance {
            return Err(ConfigError::InvertedPenBand {
                min: self.pen_min_distance,
                max: self.pen_max_distance,
            });
        }
        Ok(())
    }
}

/// Config decoding and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NonPositive { name: &'static str, value: f32 },
    InvertedPenBand { min: f32, max: f32 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid ink config json: {message}"),
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be finite and > 0, got {value}")
            }
            Self::InvertedPenBand { min, max } => write!(
                f,
                "pen_min_distance ({min}) must be < pen_max_distance ({max})"
            ),
        }
    }
}

impl Error for ConfigError {}
