//! Core engine types: squares, players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the move rules and the
//! turn engine.

pub mod square;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use square::Square;
pub use player::{Player, PlayerId, PlayerMap, PlayerToken, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{EngineConfig, NotificationPolicy};
pub use error::{BoardError, ConfigError, SessionError};
