//! Ink capture: raw digitizer batches to stroke geometry or erase hits.
//!
//! # Responsibility
//! - Simplify pen samples with a streaming band-pass distance filter.
//! - Simplify eraser paths and hit-test them against visible strokes.
//! - Track the `Idle -> Active(Pen|Erase) -> Idle` contact lifecycle.
//!
//! # Invariants
//! - Mode is fixed for the duration of one contact.
//! - No state survives a contact except what the caller persisted.
//! - Empty batches are no-ops.

pub mod engine;
pub mod eraser;
pub mod pen;
