//! Events emitted by `tick()` and the per-turn history.
//!
//! Events describe the single transition a tick performed, so the
//! presentation layer can react (play a sound, flash a tile) without diffing
//! state. `TurnRecord`s are kept for replay and debugging.

use serde::{Deserialize, Serialize};

use crate::board::ShortcutKind;
use crate::core::{PlayerId, Square};

/// What a tick did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The moving token reached an intermediate square.
    Stepped { player: PlayerId, square: Square },

    /// The move finished playing and the position was committed. A
    /// redirect also puts up a notification on the same tick.
    MoveCommitted {
        player: PlayerId,
        square: Square,
        redirect: Option<ShortcutKind>,
    },

    /// The shortcut message for the move just committed has been released
    /// and the turn is wrapping up.
    NotificationShown {
        player: PlayerId,
        category: ShortcutKind,
    },

    /// The turn ended without a winner and `next` is now up.
    TurnPassed { next: PlayerId },

    /// A player reached the last square.
    GameWon { winner: PlayerId },
}

/// How a turn's roll was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    /// Roll would have overshot the last square. The turn was consumed.
    Rejected,
    /// Token moved to `to`, possibly via a shortcut.
    Moved {
        to: Square,
        redirect: Option<ShortcutKind>,
    },
}

/// A recorded turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    pub player: PlayerId,

    pub die: u8,

    /// Square the player rolled from.
    pub from: Square,

    pub result: TurnResult,
}

impl TurnRecord {
    /// Square the player ended the turn on.
    #[must_use]
    pub fn landed_on(&self) -> Square {
        match self.result {
            TurnResult::Rejected => self.from,
            TurnResult::Moved { to, .. } => to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landed_on() {
        let rejected = TurnRecord {
            turn: 3,
            player: PlayerId::new(1),
            die: 6,
            from: Square::new(98),
            result: TurnResult::Rejected,
        };
        assert_eq!(rejected.landed_on(), Square::new(98));

        let moved = TurnRecord {
            result: TurnResult::Moved {
                to: Square::new(60),
                redirect: Some(ShortcutKind::Snake),
            },
            ..rejected
        };
        assert_eq!(moved.landed_on(), Square::new(60));
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::MoveCommitted {
            player: PlayerId::new(0),
            square: Square::new(14),
            redirect: Some(ShortcutKind::Ladder),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
