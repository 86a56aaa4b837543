//! # snakes-ladders
//!
//! Turn engine for a 100-square snakes and ladders board, 1-4 players.
//!
//! ## Design Principles
//!
//! 1. **One owner per fact**: `GameSession` alone writes player positions,
//!    and only once a move has fully played out.
//!
//! 2. **Tagged turn phase**: The turn is a single `TurnPhase` enum instead of
//!    a set of independent flags, so contradictory states cannot exist.
//!
//! 3. **Fixed tick**: All timing is counted in ticks. The caller ticks once
//!    per frame; nothing blocks and no callbacks are involved.
//!
//! ## Modules
//!
//! - `core`: Squares, players, RNG, configuration, errors
//! - `board`: Serpentine layout and the ladder/snake table
//! - `rules`: Die value → validated move path
//! - `engine`: Session state machine, animation, dice, notifications
//!
//! Drawing, menus and input handling live outside this crate; they read
//! the projections on `GameSession` (or a `GameView`) and send `Command`s.

pub mod core;
pub mod board;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Square, Player, PlayerId, PlayerMap, PlayerToken,
    GameRng, GameRngState,
    EngineConfig, NotificationPolicy,
    BoardError, ConfigError, SessionError,
};

pub use crate::board::{BoardTopology, Cell, Shortcut, ShortcutKind};

pub use crate::rules::{MoveOutcome, MovePath, MoveResolver};

pub use crate::engine::{
    AnimationSequencer, DisplayPosition, PendingMove,
    DiceController, DiceState,
    Notification, NotificationTimer,
    GameEvent, TurnRecord, TurnResult,
    GameSession, PhaseKind, RollOutcome, TurnPhase,
    GameView, PlayerView,
    Command, CommandOutcome, GameController, Screen,
};
