//! Eraser path simplification and stroke hit testing.
//!
//! # Single hit per call
//! `find_erased_stroke` reports **at most one** stroke id and stops at the
//! first point within the hit radius, even when more strokes lie under the
//! eraser path. Callers re-invoke it on every eraser batch, so strokes left
//! under the path are picked up on the following batches. Each call stays
//! bounded by `visible strokes x points` per simplified eraser point.

use crate::model::sample::Sample;
use crate::model::stroke::{Stroke, StrokeId};

/// Thins an eraser batch: the first sample is kept, later samples only when
/// farther than `min_spacing` from the last kept one. No upper bound applies.
pub fn simplify_eraser_path(batch: &[Sample], min_spacing: f32) -> Vec<Sample> {
    let mut path: Vec<Sample> = Vec::with_capacity(batch.len());
    for sample in batch {
        let keep = match path.last() {
            None => true,
            Some(last) => last.distance_to(sample) > min_spacing,
        };
        if keep {
            path.push(*sample);
        }
    }
    path
}

/// Returns the id of the first stroke with a point within `hit_radius`
/// (inclusive) of any eraser point.
///
/// Iteration order is eraser point, then stroke, then stroke point; the
/// first match wins. `strokes` is only read; removal is the caller's job.
pub fn find_erased_stroke(
    eraser_path: &[Sample],
    strokes: &[Stroke],
    hit_radius: f32,
) -> Option<StrokeId> {
    for eraser_point in eraser_path {
        for stroke in strokes {
            let hit = stroke
                .points()
                .iter()
                .any(|point| point.distance_to_sample(eraser_point) <= hit_radius);
            if hit {
                return Some(stroke.id());
            }
        }
    }
    None
}
