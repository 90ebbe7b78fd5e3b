//! Per-contact ink capture state machine.
//!
//! `Idle -> Active(Pen | Erase) -> Idle`, driven by `begin_contact`,
//! batch calls and `end_contact`/`cancel`. Strokes are only produced on a
//! completed contact; an abandoned contact leaves nothing behind.

use crate::capture::eraser::{find_erased_stroke, simplify_eraser_path};
use crate::capture::pen::PenFilter;
use crate::config::InkConfig;
use crate::model::sample::Sample;
use crate::model::stroke::{Stroke, StrokeId, StrokePoint};
use log::{debug, info, warn};
use uuid::Uuid;

/// Tool bound to one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    Pen,
    Erase,
}

impl ToolMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Erase => "erase",
        }
    }
}

#[derive(Debug)]
enum ContactState {
    Idle,
    Pen {
        stroke_id: StrokeId,
        filter: PenFilter,
        points: Vec<StrokePoint>,
    },
    Erase,
}

/// Streaming capture engine for one drawing surface.
///
/// At most one contact is active at a time; the host delivers events on a
/// single thread, so the engine holds no locks.
#[derive(Debug)]
pub struct InkCaptureEngine {
    config: InkConfig,
    state: ContactState,
}

impl InkCaptureEngine {
    pub fn new(config: InkConfig) -> Self {
        Self {
            config,
            state: ContactState::Idle,
        }
    }

    pub fn config(&self) -> &InkConfig {
        &self.config
    }

    /// Active tool, or `None` while idle.
    pub fn mode(&self) -> Option<ToolMode> {
        match self.state {
            ContactState::Idle => None,
            ContactState::Pen { .. } => Some(ToolMode::Pen),
            ContactState::Erase => Some(ToolMode::Erase),
        }
    }

    /// Points accepted so far for the in-progress pen stroke.
    pub fn pending_points(&self) -> &[StrokePoint] {
        match &self.state {
            ContactState::Pen { points, .. } => points,
            _ => &[],
        }
    }

    /// Starts a contact with a fixed tool.
    ///
    /// A contact still active at this point was never ended by the host; it
    /// is discarded without producing a stroke.
    pub fn begin_contact(&mut self, mode: ToolMode) {
        if let Some(previous) = self.mode() {
            warn!(
                "event=ink_contact_begin module=capture status=discarded previous_mode={}",
                previous.as_str()
            );
        }
        self.state = match mode {
            ToolMode::Pen => ContactState::Pen {
                stroke_id: Uuid::new_v4(),
                filter: PenFilter::new(self.config.pen_min_distance, self.config.pen_max_distance),
                points: Vec::new(),
            },
            ToolMode::Erase => ContactState::Erase,
        };
        debug!(
            "event=ink_contact_begin module=capture status=ok mode={}",
            mode.as_str()
        );
    }

    /// Feeds one pen batch; returns how many points were accepted.
    ///
    /// Ignored (returns 0) unless a pen contact is active.
    pub fn pen_batch(&mut self, batch: &[Sample]) -> usize {
        match &mut self.state {
            ContactState::Pen { filter, points, .. } => filter.push_batch(batch, points),
            _ => {
                debug!(
                    "event=ink_pen_batch module=capture status=ignored reason=no_pen_contact samples={}",
                    batch.len()
                );
                0
            }
        }
    }

    /// Feeds one eraser batch and hit-tests it against `visible`.
    ///
    /// Returns the id of at most one stroke to remove. See
    /// [`find_erased_stroke`] for the single-hit contract. Ignored unless an
    /// erase contact is active.
    pub fn erase_batch(&mut self, batch: &[Sample], visible: &[Stroke]) -> Option<StrokeId> {
        if !matches!(self.state, ContactState::Erase) {
            debug!(
                "event=ink_erase_batch module=capture status=ignored reason=no_erase_contact samples={}",
                batch.len()
            );
            return None;
        }
        if batch.is_empty() {
            return None;
        }

        let path = simplify_eraser_path(batch, self.config.eraser_min_spacing);
        let hit = find_erased_stroke(&path, visible, self.config.eraser_hit_radius);
        if let Some(stroke_id) = hit {
            info!(
                "event=ink_stroke_erased module=capture status=ok stroke_id={} eraser_points={}",
                stroke_id,
                path.len()
            );
        }
        hit
    }

    /// Ends the active contact.
    ///
    /// Returns the completed stroke for a pen contact that accepted at least
    /// one point; `None` for erase contacts, empty pen contacts, or when idle.
    pub fn end_contact(&mut self) -> Option<Stroke> {
        match std::mem::replace(&mut self.state, ContactState::Idle) {
            ContactState::Pen {
                stroke_id, points, ..
            } => {
                let point_count = points.len();
                match Stroke::with_id(stroke_id, points) {
                    Ok(stroke) => {
                        info!(
                            "event=ink_stroke_completed module=capture status=ok stroke_id={} points={}",
                            stroke_id, point_count
                        );
                        Some(stroke)
                    }
                    Err(err) => {
                        debug!(
                            "event=ink_stroke_completed module=capture status=skipped reason={}",
                            err
                        );
                        None
                    }
                }
            }
            ContactState::Erase | ContactState::Idle => None,
        }
    }

    /// Abandons the active contact without reporting anything.
    pub fn cancel(&mut self) {
        if let Some(mode) = self.mode() {
            info!(
                "event=ink_contact_cancelled module=capture status=ok mode={} pending_points={}",
                mode.as_str(),
                self.pending_points().len()
            );
        }
        self.state = ContactState::Idle;
    }
}
