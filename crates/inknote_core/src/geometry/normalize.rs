//! Surface <-> logical page coordinate normalization.
//!
//! Each axis is scaled independently; aspect ratio is not preserved.
//!
//! ```text
//! x' = x * dst.width  / src.width
//! y' = y * dst.height / src.height
//! ```

use crate::model::stroke::{Stroke, StrokePoint};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed logical page every stored stroke is normalized into.
pub const LOGICAL_PAGE: FrameSize = FrameSize {
    width: 1404.0,
    height: 1872.0,
};

/// Width/height of one rectangular coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    width: f32,
    height: f32,
}

impl FrameSize {
    /// Creates a validated frame size.
    ///
    /// # Errors
    /// - `FrameSizeError` when either dimension is zero, negative or not finite.
    pub fn new(width: f32, height: f32) -> Result<Self, FrameSizeError> {
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(FrameSizeError { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

fn is_valid_dimension(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Rejected frame dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSizeError {
    pub width: f32,
    pub height: f32,
}

impl Display for FrameSizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame dimensions must be finite and > 0, got {}x{}",
            self.width, self.height
        )
    }
}

impl Error for FrameSizeError {}

/// Rescales points from `source` into `destination`.
pub fn rescale_points(
    points: &[StrokePoint],
    source: FrameSize,
    destination: FrameSize,
) -> Vec<StrokePoint> {
    let scale_x = destination.width / source.width;
    let scale_y = destination.height / source.height;
    points
        .iter()
        .map(|point| scale_point(point, scale_x, scale_y))
        .collect()
}

/// Rescales every point of a stroke, keeping its id.
pub fn rescale_stroke(stroke: &Stroke, source: FrameSize, destination: FrameSize) -> Stroke {
    let scale_x = destination.width / source.width;
    let scale_y = destination.height / source.height;
    stroke.map_points(|point| scale_point(point, scale_x, scale_y))
}

/// Surface coordinates -> logical page coordinates.
pub fn to_logical(points: &[StrokePoint], surface: FrameSize) -> Vec<StrokePoint> {
    rescale_points(points, surface, LOGICAL_PAGE)
}

/// Logical page coordinates -> surface coordinates.
pub fn to_physical(points: &[StrokePoint], surface: FrameSize) -> Vec<StrokePoint> {
    rescale_points(points, LOGICAL_PAGE, surface)
}

fn scale_point(point: &StrokePoint, scale_x: f32, scale_y: f32) -> StrokePoint {
    StrokePoint::from_stored(point.x() * scale_x, point.y() * scale_y, point.pressure())
}

#[cfg(test)]
mod tests {
    use super::{rescale_points, to_logical, to_physical, FrameSize, LOGICAL_PAGE};
    use crate::model::stroke::StrokePoint;

    #[test]
    fn frame_size_rejects_degenerate_dimensions() {
        assert!(FrameSize::new(0.0, 10.0).is_err());
        assert!(FrameSize::new(10.0, -1.0).is_err());
        assert!(FrameSize::new(f32::NAN, 10.0).is_err());
        assert!(FrameSize::new(f32::INFINITY, 10.0).is_err());
        assert!(FrameSize::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn axes_scale_independently_and_pressure_is_kept() {
        let source = FrameSize::new(100.0, 200.0).unwrap();
        let destination = FrameSize::new(200.0, 100.0).unwrap();
        let scaled = rescale_points(&[StrokePoint::new(10.0, 40.0, 0.7)], source, destination);
        assert_eq!(scaled[0].x(), 20.0);
        assert_eq!(scaled[0].y(), 20.0);
        assert_eq!(scaled[0].pressure(), 0.7);
    }

    #[test]
    fn logical_page_round_trips_identity_surface() {
        let points = [StrokePoint::new(702.0, 936.0, 0.5)];
        let logical = to_logical(&points, LOGICAL_PAGE);
        assert_eq!(logical, points);
        assert_eq!(to_physical(&logical, LOGICAL_PAGE), points);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(to_logical(&[], LOGICAL_PAGE).is_empty());
    }
}
