//! Coordinate frames and rescaling between them.
//!
//! # Responsibility
//! - Map stroke coordinates between a device surface and the logical page.
//!
//! # Invariants
//! - Rescaling never touches pressure.
//! - A `FrameSize` always has finite, strictly positive dimensions.

pub mod normalize;
