//! Tick-driven playback of a resolved move.
//!
//! The sequencer owns the `PendingMove` for the duration of one turn. It
//! advances one path entry every `step_delay` ticks and reports completion
//! when the final entry has been reached. It never writes player positions.

use serde::{Deserialize, Serialize};

use crate::board::{BoardTopology, ShortcutKind};
use crate::core::{PlayerId, Square};
use crate::rules::MovePath;

/// A resolved move waiting to be played out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub player: PlayerId,
    pub start: Square,
    /// Non-empty; ends at the fully resolved square.
    pub path: MovePath,
    pub redirect: Option<ShortcutKind>,
}

impl PendingMove {
    /// Final square of the path.
    #[must_use]
    pub fn final_position(&self) -> Square {
        self.path.last().copied().unwrap_or(self.start)
    }
}

/// Result of advancing the sequencer by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerStatus {
    /// Still counting down towards the next square.
    Waiting,
    /// Moved onto an intermediate square.
    Stepped(Square),
    /// Reached the last entry of the path.
    Complete,
}

/// Display position between two squares.
///
/// `progress` runs from 0.0 (on `from`) towards 1.0 (on `to`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayPosition {
    pub from: Square,
    pub to: Square,
    pub progress: f32,
}

impl DisplayPosition {
    /// A token standing still on `square`.
    #[must_use]
    pub fn at(square: Square) -> Self {
        Self {
            from: square,
            to: square,
            progress: 0.0,
        }
    }

    /// Fractional square number.
    #[must_use]
    pub fn value(&self) -> f32 {
        let from = f32::from(self.from.number());
        let to = f32::from(self.to.number());
        from + (to - from) * self.progress
    }

    /// Grid coordinates (col, row), interpolated between the two cells.
    ///
    /// Interpolating cells rather than square numbers keeps row turns and
    /// shortcut jumps on a straight line between the two tiles.
    #[must_use]
    pub fn cell_coords(&self, board: &BoardTopology) -> (f32, f32) {
        let a = board.square_to_cell(self.from);
        let b = board.square_to_cell(self.to);
        let lerp = |x: u8, y: u8| f32::from(x) + (f32::from(y) - f32::from(x)) * self.progress;
        (lerp(a.col, b.col), lerp(a.row, b.row))
    }
}

/// Plays one `PendingMove` square by square.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, Square};
/// use snakes_ladders::engine::{AnimationSequencer, PendingMove, SequencerStatus};
/// use snakes_ladders::rules::MovePath;
///
/// let pending = PendingMove {
///     player: PlayerId::new(0),
///     start: Square::new(1),
///     path: MovePath::from_slice(&[Square::new(2), Square::new(3)]),
///     redirect: None,
/// };
/// let mut seq = AnimationSequencer::new(pending, 2);
///
/// assert_eq!(seq.tick(), SequencerStatus::Waiting);
/// assert_eq!(seq.tick(), SequencerStatus::Stepped(Square::new(2)));
/// assert_eq!(seq.tick(), SequencerStatus::Waiting);
/// assert_eq!(seq.tick(), SequencerStatus::Complete);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSequencer {
    pending: PendingMove,
    /// Number of path entries reached so far.
    cursor: usize,
    timer: u32,
    step_delay: u32,
}

impl AnimationSequencer {
    /// Start playing `pending`, spending `step_delay` ticks per square.
    #[must_use]
    pub fn new(pending: PendingMove, step_delay: u32) -> Self {
        debug_assert!(!pending.path.is_empty(), "pending move has an empty path");
        Self {
            pending,
            cursor: 0,
            timer: 0,
            step_delay: step_delay.max(1),
        }
    }

    /// Advance by one tick. At most one square is reached per tick.
    pub fn tick(&mut self) -> SequencerStatus {
        if self.is_complete() {
            return SequencerStatus::Complete;
        }

        self.timer += 1;
        if self.timer < self.step_delay {
            return SequencerStatus::Waiting;
        }

        self.timer = 0;
        self.cursor += 1;
        if self.is_complete() {
            SequencerStatus::Complete
        } else {
            SequencerStatus::Stepped(self.pending.path[self.cursor - 1])
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.pending.path.len()
    }

    #[must_use]
    pub fn pending(&self) -> &PendingMove {
        &self.pending
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Last square reached, or the start square before the first step.
    #[must_use]
    pub fn stepped_square(&self) -> Square {
        match self.cursor {
            0 => self.pending.start,
            n => self.pending.path[n - 1],
        }
    }

    /// Interpolated position between the last square reached and the next.
    #[must_use]
    pub fn display_position(&self) -> DisplayPosition {
        let from = self.stepped_square();
        match self.pending.path.get(self.cursor) {
            Some(&to) => DisplayPosition {
                from,
                to,
                progress: self.timer as f32 / self.step_delay as f32,
            },
            None => DisplayPosition::at(from),
        }
    }
}
