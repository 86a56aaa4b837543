//! Error types.
//!
//! Only construction can fail. Rejected moves and rolls requested at the
//! wrong time are ordinary outcomes, not errors.

use super::square::Square;

/// Malformed ladder/snake table, reported when a `BoardTopology` is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {square} is off the board")]
    SquareOutOfRange { square: u8 },

    #[error("shortcut at square {square} leads back to itself")]
    SelfLoop { square: Square },

    #[error("ladder {from} -> {to} does not climb")]
    LadderNotAscending { from: Square, to: Square },

    #[error("snake {from} -> {to} does not descend")]
    SnakeNotDescending { from: Square, to: Square },

    #[error("square {square} is both a ladder and a snake entry")]
    DuplicateKey { square: Square },

    #[error("the last square cannot start a shortcut")]
    ShortcutOnLastSquare,
}

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Session could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("player count {count} is outside 1..=4")]
    PlayerCount { count: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
