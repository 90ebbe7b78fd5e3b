//! Stroke domain model.
//!
//! # Responsibility
//! - Define the persisted `{id, points:[{x,y,pressure}]}` stroke shape.
//! - Quantize captured samples to one decimal digit.
//!
//! # Invariants
//! - `id` is non-nil and never reused for another stroke.
//! - `points` is never empty and stays in capture order.
//! - A `StrokePoint` is immutable once created.

use crate::model::sample::{distance, Sample};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one persisted stroke.
pub type StrokeId = Uuid;

/// Rounds a raw reading to one decimal digit.
///
/// Bounds storage size and suppresses sub-tenth sensor jitter.
pub fn quantize(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// A simplified, quantized point of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    x: f32,
    y: f32,
    pressure: f32,
}

impl StrokePoint {
    /// Creates a point with every component quantized.
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            x: quantize(x),
            y: quantize(y),
            pressure: quantize(pressure),
        }
    }

    /// Quantizes one raw sample; the timestamp is dropped.
    pub fn from_sample(sample: &Sample) -> Self {
        Self::new(sample.x, sample.y, sample.pressure)
    }

    /// Builds a point from stored or rescaled coordinates without rounding.
    ///
    /// Only capture quantizes; anything loaded back or rescaled must stay
    /// round-trippable.
    pub fn from_stored(x: f32, y: f32, pressure: f32) -> Self {
        Self { x, y, pressure }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    pub fn distance_to(&self, other: &StrokePoint) -> f32 {
        distance(self.x, self.y, other.x, other.y)
    }

    pub fn distance_to_sample(&self, sample: &Sample) -> f32 {
        distance(self.x, self.y, sample.x, sample.y)
    }
}

/// Validation errors for stroke construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrokeValidationError {
    NilId,
    EmptyPoints,
}

impl Display for StrokeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "stroke id must not be nil"),
            Self::EmptyPoints => write!(f, "stroke must contain at least one point"),
        }
    }
}

impl Error for StrokeValidationError {}

/// One persisted ink mark.
///
/// Owned by exactly one page; never shared across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRecord")]
pub struct Stroke {
    id: StrokeId,
    points: Vec<StrokePoint>,
}

/// Unvalidated wire shape; decoding goes through `Stroke::with_id`.
#[derive(Deserialize)]
struct StrokeRecord {
    id: StrokeId,
    points: Vec<StrokePoint>,
}

impl TryFrom<StrokeRecord> for Stroke {
    type Error = StrokeValidationError;

    fn try_from(value: StrokeRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.points)
    }
}

impl Stroke {
    /// Creates a stroke with a freshly generated id.
    pub fn new(points: Vec<StrokePoint>) -> Result<Self, StrokeValidationError> {
        Self::with_id(Uuid::new_v4(), points)
    }

    /// Creates a stroke with a caller-provided id.
    ///
    /// Used by load paths where identity already exists in the page document.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyPoints` when `points` is empty.
    pub fn with_id(
        id: StrokeId,
        points: Vec<StrokePoint>,
    ) -> Result<Self, StrokeValidationError> {
        if id.is_nil() {
            return Err(StrokeValidationError::NilId);
        }
        if points.is_empty() {
            return Err(StrokeValidationError::EmptyPoints);
        }
        Ok(Self { id, points })
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed stroke; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a copy with every point mapped, keeping the id.
    pub(crate) fn map_points(&self, f: impl Fn(&StrokePoint) -> StrokePoint) -> Self {
        Self {
            id: self.id,
            points: self.points.iter().map(f).collect(),
        }
    }
}
