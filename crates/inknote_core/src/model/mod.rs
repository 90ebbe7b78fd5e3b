//! Ink domain model shared by capture, gesture and normalization code.
//!
//! # Responsibility
//! - Define raw digitizer samples and the persisted stroke shape.
//! - Own the one-decimal quantization rule applied to stored points.
//!
//! # Invariants
//! - Every stroke is identified by a stable, non-nil `StrokeId`.
//! - Every stroke holds at least one point.
//! - `Sample` is ephemeral and never persisted.

pub mod sample;
pub mod stroke;
