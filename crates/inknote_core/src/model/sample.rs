//! Raw digitizer readings.

/// One raw digitizer reading as delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    /// Normalized pen pressure as reported by the digitizer.
    pub pressure: f32,
    /// Milliseconds on the host's input clock.
    pub timestamp_ms: i64,
}

impl Sample {
    pub fn new(x: f32, y: f32, pressure: f32, timestamp_ms: i64) -> Self {
        Self {
            x,
            y,
            pressure,
            timestamp_ms,
        }
    }

    /// Euclidean distance to another sample, ignoring pressure.
    pub fn distance_to(&self, other: &Sample) -> f32 {
        distance(self.x, self.y, other.x, other.y)
    }
}

pub(crate) fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}
