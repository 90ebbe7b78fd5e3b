//! Streaming band-pass simplification for pen samples.
//!
//! This is a single O(n) pass, not a Douglas-Peucker reduction: the only
//! state is the last accepted point. A sample is kept when its distance to
//! that point lies in `(min_distance, max_distance]`. Samples below the
//! lower bound are jitter; samples above the upper bound are spurious jumps
//! and never become the new reference.

use crate::model::sample::Sample;
use crate::model::stroke::StrokePoint;

/// Per-stroke band-pass filter state.
#[derive(Debug, Clone)]
pub struct PenFilter {
    min_distance: f32,
    max_distance: f32,
    last_accepted: Option<StrokePoint>,
}

impl PenFilter {
    pub fn new(min_distance: f32, max_distance: f32) -> Self {
        Self {
            min_distance,
            max_distance,
            last_accepted: None,
        }
    }

    /// Last point appended to the stroke, if any.
    pub fn last_accepted(&self) -> Option<StrokePoint> {
        self.last_accepted
    }

    /// Filters one digitizer batch, appending accepted points to `out`.
    ///
    /// Returns the number of points appended.
    ///
    /// # Contract
    /// - The first sample of a stroke seeds it unfiltered.
    /// - A batch holding exactly one sample is appended unfiltered and
    ///   becomes the reference for the next batch.
    /// - Otherwise every sample is compared with the reference carried over
    ///   from earlier samples or batches.
    pub fn push_batch(&mut self, batch: &[Sample], out: &mut Vec<StrokePoint>) -> usize {
        if let [single] = batch {
            self.accept(StrokePoint::from_sample(single), out);
            return 1;
        }

        let before = out.len();
        for sample in batch {
            let keep = match self.last_accepted {
                None => true,
                Some(reference) => self.in_band(reference.distance_to_sample(sample)),
            };
            if keep {
                self.accept(StrokePoint::from_sample(sample), out);
            }
        }
        out.len() - before
    }

    fn in_band(&self, distance: f32) -> bool {
        distance > self.min_distance && distance <= self.max_distance
    }

    fn accept(&mut self, point: StrokePoint, out: &mut Vec<StrokePoint>) {
        out.push(point);
        self.last_accepted = Some(point);
    }
}
