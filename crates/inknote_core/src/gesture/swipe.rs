//! Majority-vote swipe classification.
//!
//! Every sufficiently large move segment casts one vote for the 90° sector
//! its direction falls into, so curved flicks still classify. The angle is
//! `atan2(dy, dx)` with `dx = current.x - previous.x` and
//! `dy = previous.y - current.y` (screen Y grows downward):
//!
//! | sector               | direction       |
//! |----------------------|-----------------|
//! | (-45°, 45°]          | `LeftToRight`   |
//! | (45°, 135°]          | `DownToUp`      |
//! | [-135°, -45°]        | `UpToDown`      |
//! | [135°, 180°], (-180°, -135°) | `RightToLeft` |
//!
//! Sectors are tested with exact component comparisons rather than a
//! floating-point angle, so boundary angles always land in the same sector.

use log::debug;
use serde::{Deserialize, Serialize};

/// Cardinal swipe direction, in vote-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    LeftToRight,
    RightToLeft,
    UpToDown,
    DownToUp,
}

impl SwipeDirection {
    /// All directions in tie-break order.
    pub const ALL: [SwipeDirection; 4] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::UpToDown,
        Self::DownToUp,
    ];

    fn index(self) -> usize {
        match self {
            Self::LeftToRight => 0,
            Self::RightToLeft => 1,
            Self::UpToDown => 2,
            Self::DownToUp => 3,
        }
    }

    /// Stable string id used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
            Self::UpToDown => "up_to_down",
            Self::DownToUp => "down_to_up",
        }
    }

    /// Sector of a travel vector, `dy` pointing up.
    pub fn from_delta(dx: f32, dy: f32) -> Self {
        if dx > 0.0 && dy <= dx && dy > -dx {
            Self::LeftToRight
        } else if dy > dx && dy >= -dx {
            Self::DownToUp
        } else if dy < 0.0 && dx >= dy && dx <= -dy {
            Self::UpToDown
        } else {
            Self::RightToLeft
        }
    }
}

/// Per-direction vote counters for one contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeVotes {
    counts: [u32; 4],
}

impl SwipeVotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, direction: SwipeDirection) {
        let slot = &mut self.counts[direction.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, direction: SwipeDirection) -> u32 {
        self.counts[direction.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Direction with the highest count, or `None` when nothing voted.
    ///
    /// Equal maxima resolve to the lowest index in `SwipeDirection::ALL`.
    /// That tie-break is arbitrary and kept as-is until product intent says
    /// otherwise.
    pub fn winner(&self) -> Option<SwipeDirection> {
        let mut best: Option<(SwipeDirection, u32)> = None;
        for direction in SwipeDirection::ALL {
            let count = self.count(direction);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((direction, count)),
            }
        }
        best.map(|(direction, _)| direction)
    }
}

/// Result of feeding one pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was too small to be directional.
    Ignored,
    /// The move cast a vote; the host must not also treat it as a scroll.
    Consumed(SwipeDirection),
}

impl MoveOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed(_))
    }
}

/// Swipe state for exactly one press-to-release contact.
///
/// Created on pointer-down, consumed on pointer-up by [`SwipeContact::finish`].
#[derive(Debug, Clone)]
pub struct SwipeContact {
    min_delta: f32,
    last_x: f32,
    last_y: f32,
    votes: SwipeVotes,
}

impl SwipeContact {
    /// Starts a contact at the pointer-down position with zeroed votes.
    pub fn begin(x: f32, y: f32, min_delta: f32) -> Self {
        Self {
            min_delta,
            last_x: x,
            last_y: y,
            votes: SwipeVotes::new(),
        }
    }

    pub fn votes(&self) -> &SwipeVotes {
        &self.votes
    }

    /// Feeds one pointer move.
    ///
    /// The delta is always measured from the previous move, whether or not
    /// that move voted. Non-finite coordinates are ignored and do not move
    /// the reference.
    pub fn on_move(&mut self, x: f32, y: f32) -> MoveOutcome {
        if !x.is_finite() || !y.is_finite() {
            return MoveOutcome::Ignored;
        }
        let dx = x - self.last_x;
        let dy = self.last_y - y;
        self.last_x = x;
        self.last_y = y;

        if dx.abs() + dy.abs() < self.min_delta {
            return MoveOutcome::Ignored;
        }
        let direction = SwipeDirection::from_delta(dx, dy);
        self.votes.record(direction);
        MoveOutcome::Consumed(direction)
    }

    /// Ends the contact and reports the winning direction, if any.
    pub fn finish(self) -> Option<SwipeDirection> {
        let winner = self.votes.winner();
        debug!(
            "event=swipe_classified module=gesture status=ok direction={} votes={}",
            winner.map(SwipeDirection::as_str).unwrap_or("none"),
            self.votes.total()
        );
        winner
    }
}
