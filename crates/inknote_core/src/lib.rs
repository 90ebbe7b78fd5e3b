//! Core digital-ink pipeline for InkNote.
//! This crate owns capture, erasing, swipe classification and page
//! coordinate normalization; rendering and storage live elsewhere.

pub mod capture;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod service;

pub use capture::engine::{InkCaptureEngine, ToolMode};
pub use capture::eraser::{find_erased_stroke, simplify_eraser_path};
pub use capture::pen::PenFilter;
pub use config::{ConfigError, InkConfig};
pub use geometry::normalize::{
    rescale_points, rescale_stroke, to_logical, to_physical, FrameSize, FrameSizeError,
    LOGICAL_PAGE,
};
pub use gesture::swipe::{MoveOutcome, SwipeContact, SwipeDirection, SwipeVotes};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::sample::Sample;
pub use model::stroke::{quantize, Stroke, StrokeId, StrokePoint, StrokeValidationError};
pub use service::ink_service::{
    BatchOutcome, InkSession, MemoryStrokeSink, SinkEvent, StrokeSink,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
