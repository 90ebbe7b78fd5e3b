//! Page ink use-case service.
//!
//! # Responsibility
//! - Drive the capture engine and swipe classification for one page.
//! - Keep the page's visible strokes in surface coordinates.
//! - Forward completed strokes (in logical coordinates) and erasures to a
//!   `StrokeSink` collaborator.
//!
//! # Invariants
//! - Strokes handed to the sink are always in logical page space.
//! - The visible set is never mutated during a hit test; removal happens
//!   after the engine reports an id.
//! - The service is storage-agnostic; persistence lives behind `StrokeSink`.

use crate::capture::engine::{InkCaptureEngine, ToolMode};
use crate::config::{ConfigError, InkConfig};
use crate::geometry::normalize::{rescale_stroke, FrameSize, LOGICAL_PAGE};
use crate::gesture::swipe::{MoveOutcome, SwipeContact, SwipeDirection};
use crate::model::sample::Sample;
use crate::model::stroke::{Stroke, StrokeId, StrokePoint};
use log::{debug, info};

/// Persistence collaborator notified of ink changes on one page.
pub trait StrokeSink {
    /// A pen contact completed; `stroke` is in logical page coordinates.
    fn stroke_completed(&mut self, stroke: Stroke);
    /// The stroke with `id` was erased from the page.
    fn stroke_erased(&mut self, id: StrokeId);
}

/// One notification recorded by `MemoryStrokeSink`.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Completed(Stroke),
    Erased(StrokeId),
}

/// In-memory sink that records every notification in order.
#[derive(Debug, Default)]
pub struct MemoryStrokeSink {
    events: Vec<SinkEvent>,
}

impl MemoryStrokeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Drains recorded events, oldest first.
    pub fn take_events(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StrokeSink for MemoryStrokeSink {
    fn stroke_completed(&mut self, stroke: Stroke) {
        self.events.push(SinkEvent::Completed(stroke));
    }

    fn stroke_erased(&mut self, id: StrokeId) {
        self.events.push(SinkEvent::Erased(id));
    }
}

/// What one sample batch did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No contact was active.
    Idle,
    /// Pen contact; `accepted` points were appended to the pending stroke.
    Drawn { accepted: usize },
    /// Erase contact removed this stroke.
    Erased(StrokeId),
    /// Erase contact hit nothing.
    Missed,
}

/// Ink session bound to one page and one drawing surface.
pub struct InkSession<S: StrokeSink> {
    surface: FrameSize,
    engine: InkCaptureEngine,
    swipe: Option<SwipeContact>,
    visible: Vec<Stroke>,
    sink: S,
}

impl<S: StrokeSink> InkSession<S> {
    /// Creates a session for an empty page.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config` violates threshold invariants.
    pub fn new(surface: FrameSize, config: InkConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            surface,
            engine: InkCaptureEngine::new(config),
            swipe: None,
            visible: Vec::new(),
            sink,
        })
    }

    pub fn surface(&self) -> FrameSize {
        self.surface
    }

    pub fn config(&self) -> &InkConfig {
        self.engine.config()
    }

    /// Visible strokes in surface coordinates.
    pub fn visible_strokes(&self) -> &[Stroke] {
        &self.visible
    }

    /// Points of the in-progress pen stroke, in surface coordinates.
    pub fn pending_points(&self) -> &[StrokePoint] {
        self.engine.pending_points()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Replaces the visible set with persisted strokes.
    ///
    /// `strokes` are in logical page space. Any active contact is cancelled.
    pub fn load_page(&mut self, strokes: &[Stroke]) {
        self.engine.cancel();
        self.swipe = None;
        self.visible = strokes
            .iter()
            .map(|stroke| rescale_stroke(stroke, LOGICAL_PAGE, self.surface))
            .collect();
        info!(
            "event=page_loaded module=service status=ok strokes={}",
            self.visible.len()
        );
    }

    /// Visible strokes converted to logical page space, in page order.
    pub fn export_page(&self) -> Vec<Stroke> {
        self.visible
            .iter()
            .map(|stroke| rescale_stroke(stroke, self.surface, LOGICAL_PAGE))
            .collect()
    }

    /// Rescales the visible set onto a new surface size, e.g. after rotation.
    ///
    /// Any active contact is cancelled since its samples belong to the old frame.
    pub fn resize_surface(&mut self, surface: FrameSize) {
        self.engine.cancel();
        self.swipe = None;
        let previous = self.surface;
        self.visible = self
            .visible
            .iter()
            .map(|stroke| rescale_stroke(stroke, previous, surface))
            .collect();
        self.surface = surface;
        debug!(
            "event=surface_resized module=service status=ok width={} height={}",
            surface.width(),
            surface.height()
        );
    }

    /// Pointer-down for a pen or eraser contact.
    pub fn begin_contact(&mut self, mode: ToolMode) {
        self.engine.begin_contact(mode);
    }

    /// Feeds one digitizer batch to the active contact.
    pub fn push_samples(&mut self, batch: &[Sample]) -> BatchOutcome {
        match self.engine.mode() {
            None => BatchOutcome::Idle,
            Some(ToolMode::Pen) => BatchOutcome::Drawn {
                accepted: self.engine.pen_batch(batch),
            },
            Some(ToolMode::Erase) => match self.engine.erase_batch(batch, &self.visible) {
                Some(stroke_id) => {
                    self.visible.retain(|stroke| stroke.id() != stroke_id);
                    self.sink.stroke_erased(stroke_id);
                    BatchOutcome::Erased(stroke_id)
                }
                None => BatchOutcome::Missed,
            },
        }
    }

    /// Pointer-up; returns the id of the stroke a pen contact completed.
    pub fn end_contact(&mut self) -> Option<StrokeId> {
        let stroke = self.engine.end_contact()?;
        let stroke_id = stroke.id();
        self.sink
            .stroke_completed(rescale_stroke(&stroke, self.surface, LOGICAL_PAGE));
        self.visible.push(stroke);
        Some(stroke_id)
    }

    /// Abandons the active contact; nothing is reported to the sink.
    pub fn cancel_contact(&mut self) {
        self.engine.cancel();
    }

    /// Pointer-down for a navigation gesture; resets all votes.
    pub fn swipe_begin(&mut self, x: f32, y: f32) {
        self.swipe = Some(SwipeContact::begin(
            x,
            y,
            self.engine.config().swipe_min_delta,
        ));
    }

    /// Pointer-move for a navigation gesture.
    pub fn swipe_move(&mut self, x: f32, y: f32) -> MoveOutcome {
        match self.swipe.as_mut() {
            Some(contact) => contact.on_move(x, y),
            None => MoveOutcome::Ignored,
        }
    }

    /// Pointer-up for a navigation gesture.
    pub fn swipe_end(&mut self) -> Option<SwipeDirection> {
        self.swipe.take()?.finish()
    }
}
