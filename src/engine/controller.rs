//! Top-level controller: menu vs. playing.
//!
//! The event pump maps keys to `Command`s and calls `tick()` once per
//! frame. Leaving a game drops the whole session, so nothing from a move in
//! flight survives.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::board::BoardTopology;
use crate::core::{EngineConfig, GameRng, SessionError};

use super::event::GameEvent;
use super::session::{GameSession, RollOutcome};

/// Input the presentation layer forwards to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Roll key.
    Roll,
    /// Escape key while playing.
    ReturnToMenu,
    /// Menu choice for a number of players.
    Start(usize),
}

/// What a `Command` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Result of a roll request. `RollOutcome::Ignored` on the menu.
    Roll(RollOutcome),
    /// A fresh session replaced whatever was on screen.
    Started { player_count: usize },
    /// The session was dropped and the menu is showing.
    ReturnedToMenu,
    /// Already on the menu.
    Ignored,
}

/// Active screen.
#[derive(Clone, Debug, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing(GameSession),
}

/// Owns the current screen and hands out sessions.
#[derive(Clone, Debug)]
pub struct GameController {
    config: EngineConfig,
    board: Arc<BoardTopology>,
    screen: Screen,
    /// Seeds successive sessions.
    seeds: GameRng,
}

impl GameController {
    /// Create a controller sitting on the menu.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let seeds = GameRng::new(config.seed).for_context("sessions");
        Self {
            config,
            board: BoardTopology::standard(),
            screen: Screen::Menu,
            seeds,
        }
    }

    /// Apply one command.
    ///
    /// Commands that make no sense on the current screen are ignored.
    pub fn handle(&mut self, command: Command) -> Result<CommandOutcome, SessionError> {
        match command {
            Command::Roll => Ok(CommandOutcome::Roll(self.request_roll())),
            Command::ReturnToMenu => Ok(if self.return_to_menu() {
                CommandOutcome::ReturnedToMenu
            } else {
                CommandOutcome::Ignored
            }),
            Command::Start(player_count) => {
                self.start_session(player_count)?;
                Ok(CommandOutcome::Started { player_count })
            }
        }
    }

    /// Replace any current game with a fresh one.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, player_count: usize) -> Result<(), SessionError> {
        let config = self.config.clone().with_seed(self.seeds.next_seed());
        let session = GameSession::new(player_count, config, Arc::clone(&self.board))?;
        info!(player_count, "session started");
        self.screen = Screen::Playing(session);
        Ok(())
    }

    /// Same as `start_session`; kept for callers restarting from game over.
    pub fn reset_session(&mut self, player_count: usize) -> Result<(), SessionError> {
        self.start_session(player_count)
    }

    /// Drop the current game, including any move still animating.
    ///
    /// Returns whether a game was dropped.
    pub fn return_to_menu(&mut self) -> bool {
        match std::mem::take(&mut self.screen) {
            Screen::Playing(_) => {
                debug!("returning to menu");
                true
            }
            Screen::Menu => false,
        }
    }

    /// Roll for the current player. Ignored on the menu.
    pub fn request_roll(&mut self) -> RollOutcome {
        match &mut self.screen {
            Screen::Playing(session) => session.request_roll(),
            Screen::Menu => RollOutcome::Ignored,
        }
    }

    /// Advance the active game by one tick.
    pub fn tick(&mut self) -> Option<GameEvent> {
        match &mut self.screen {
            Screen::Playing(session) => session.tick(),
            Screen::Menu => None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            Screen::Menu => None,
        }
    }
}
