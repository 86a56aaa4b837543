//! Game session: the authoritative owner of positions and turn flow.
//!
//! ## Turn state machine
//!
//! ```text
//! AwaitingRoll --request_move--> Animating            (accepted roll)
//! AwaitingRoll --request_move--> TurnComplete         (roll overshoots 100)
//! Animating    --tick----------> ShowingNotification  (landed on a shortcut)
//! Animating    --tick----------> TurnComplete         (plain landing)
//! ShowingNotification --tick---> TurnComplete         (message released)
//! TurnComplete --tick----------> GameOver             (on square 100)
//! TurnComplete --tick----------> AwaitingRoll         (next player)
//! ```
//!
//! `tick()` performs at most one transition, so a move can never finish and
//! accept the next roll on the same tick. Player positions change only in
//! `commit_move`, when a path has fully played out.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, trace, warn};

use crate::board::{BoardTopology, ShortcutKind};
use crate::core::{
    EngineConfig, GameRng, NotificationPolicy, Player, PlayerId, PlayerMap, PlayerToken,
    SessionError, Square, DIE_FACES, MAX_PLAYERS,
};
use crate::rules::MoveResolver;

use super::animation::{AnimationSequencer, DisplayPosition, PendingMove, SequencerStatus};
use super::dice::DiceController;
use super::event::{GameEvent, TurnRecord, TurnResult};
use super::notification::{messages_for, Notification, NotificationTimer};

/// Turn state. Exactly one is active at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    AwaitingRoll,
    /// A move is playing out. Rolls are refused.
    Animating(AnimationSequencer),
    /// The move landed on a shortcut and its message is up.
    ShowingNotification { category: ShortcutKind },
    /// The roll is spent; the next tick checks for a win or rotates.
    TurnComplete,
    /// Terminal.
    GameOver { winner: PlayerId },
}

/// Payload-free tag of a `TurnPhase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    AwaitingRoll,
    Animating,
    ShowingNotification,
    TurnComplete,
    GameOver,
}

impl TurnPhase {
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            TurnPhase::AwaitingRoll => PhaseKind::AwaitingRoll,
            TurnPhase::Animating(_) => PhaseKind::Animating,
            TurnPhase::ShowingNotification { .. } => PhaseKind::ShowingNotification,
            TurnPhase::TurnComplete => PhaseKind::TurnComplete,
            TurnPhase::GameOver { .. } => PhaseKind::GameOver,
        }
    }
}

/// Answer to a roll or move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// Not the time to roll (animating, turn wrapping up, or game over).
    Ignored,
    /// The roll would overshoot the last square. The turn is spent.
    Rejected { die: u8 },
    /// The move is playing out towards `destination`.
    Moving { die: u8, destination: Square },
}

/// One game from first roll to win.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{EngineConfig, PlayerId, Square};
/// use snakes_ladders::engine::{GameSession, RollOutcome};
///
/// let config = EngineConfig::default().with_step_delay(1);
/// let mut session = GameSession::standard(2, config).unwrap();
///
/// // Position 1, die 3: plain move to 4, then the ladder to 14.
/// assert_eq!(
///     session.request_move(3),
///     RollOutcome::Moving { die: 3, destination: Square::new(14) }
/// );
///
/// while session.current_player() == PlayerId::new(0) {
///     session.tick();
/// }
/// assert_eq!(session.position(PlayerId::new(0)), Some(Square::new(14)));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: EngineConfig,
    resolver: MoveResolver,
    positions: PlayerMap<Square>,
    current: PlayerId,
    phase: TurnPhase,
    dice: DiceController,
    notification: NotificationTimer,
    rng: GameRng,
    message_rng: GameRng,
    turn_number: u32,
    history: Vector<TurnRecord>,
}

impl GameSession {
    /// Start a session for `player_count` players on `board`.
    ///
    /// Every player starts on square 1 and player 0 rolls first.
    pub fn new(
        player_count: usize,
        config: EngineConfig,
        board: Arc<BoardTopology>,
    ) -> Result<Self, SessionError> {
        if !(1..=MAX_PLAYERS).contains(&player_count) {
            return Err(SessionError::PlayerCount {
                count: player_count,
            });
        }
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let dice = DiceController::new(config.dice_roll_ticks, rng.for_context("dice-spin"));
        let message_rng = rng.for_context("messages");

        debug!(player_count, seed = config.seed, "starting session");

        Ok(Self {
            resolver: MoveResolver::new(board),
            positions: PlayerMap::with_value(player_count, Square::FIRST),
            current: PlayerId::new(0),
            phase: TurnPhase::AwaitingRoll,
            dice,
            notification: NotificationTimer::new(config.notification_ticks),
            rng,
            message_rng,
            turn_number: 0,
            history: Vector::new(),
            config,
        })
    }

    /// Start a session on the standard board.
    pub fn standard(player_count: usize, config: EngineConfig) -> Result<Self, SessionError> {
        Self::new(player_count, config, BoardTopology::standard())
    }

    // === Commands ===

    /// Roll the die for the current player and start the move.
    ///
    /// Ignored unless the session is waiting for a roll.
    #[instrument(skip(self), fields(player = self.current.0))]
    pub fn request_roll(&mut self) -> RollOutcome {
        if !self.can_roll() {
            trace!(phase = ?self.phase.kind(), "roll ignored");
            return RollOutcome::Ignored;
        }

        let die = self.dice.commit_roll(&mut self.rng);
        self.request_move(die)
    }

    /// Resolve a committed die value for the current player.
    ///
    /// Ignored unless the session is waiting for a roll. An overshooting
    /// roll spends the turn without moving.
    #[instrument(skip(self), fields(player = self.current.0))]
    pub fn request_move(&mut self, die: u8) -> RollOutcome {
        if !self.can_roll() {
            trace!(phase = ?self.phase.kind(), "move ignored");
            return RollOutcome::Ignored;
        }
        if !(1..=DIE_FACES).contains(&die) {
            warn!(die, "die value out of range");
            return RollOutcome::Ignored;
        }

        let player = self.current;
        let from = self.positions[player];
        let outcome = self.resolver.resolve(from, die);
        self.turn_number += 1;

        if !outcome.accepted {
            info!(%from, die, "roll overshoots the last square");
            self.record(player, die, from, TurnResult::Rejected);
            self.phase = TurnPhase::TurnComplete;
            return RollOutcome::Rejected { die };
        }

        let destination = outcome.final_position;
        debug!(%from, die, %destination, redirect = ?outcome.redirect, "move resolved");
        self.record(
            player,
            die,
            from,
            TurnResult::Moved {
                to: destination,
                redirect: outcome.redirect,
            },
        );

        let pending = PendingMove {
            player,
            start: from,
            path: outcome.path,
            redirect: outcome.redirect,
        };
        self.phase =
            TurnPhase::Animating(AnimationSequencer::new(pending, self.config.step_delay_ticks));

        RollOutcome::Moving { die, destination }
    }

    /// Advance timers and the turn state machine by one tick.
    ///
    /// Returns the transition performed, if any.
    pub fn tick(&mut self) -> Option<GameEvent> {
        self.dice.tick();
        self.notification.tick();

        match self.phase {
            TurnPhase::AwaitingRoll | TurnPhase::GameOver { .. } => None,
            TurnPhase::Animating(_) => self.tick_animation(),
            TurnPhase::ShowingNotification { category } => {
                let release = match self.config.notification_policy {
                    NotificationPolicy::Informational => true,
                    NotificationPolicy::Blocking => !self.notification.is_active(),
                };
                if !release {
                    return None;
                }
                self.phase = TurnPhase::TurnComplete;
                Some(GameEvent::NotificationShown {
                    player: self.current,
                    category,
                })
            }
            TurnPhase::TurnComplete => Some(self.finish_turn()),
        }
    }

    fn tick_animation(&mut self) -> Option<GameEvent> {
        let TurnPhase::Animating(sequencer) = &mut self.phase else {
            return None;
        };

        match sequencer.tick() {
            SequencerStatus::Waiting => None,
            SequencerStatus::Stepped(square) => Some(GameEvent::Stepped {
                player: sequencer.pending().player,
                square,
            }),
            SequencerStatus::Complete => {
                let pending = sequencer.pending().clone();
                Some(self.commit_move(&pending))
            }
        }
    }

    /// The only place a player's position changes.
    fn commit_move(&mut self, pending: &PendingMove) -> GameEvent {
        let square = pending.final_position();
        self.positions[pending.player] = square;
        debug!(player = pending.player.0, %square, "move committed");

        match pending.redirect {
            Some(category) => {
                let text = self
                    .message_rng
                    .choose(messages_for(category))
                    .copied()
                    .unwrap_or_default();
                self.notification.trigger(category, text);
                self.phase = TurnPhase::ShowingNotification { category };
            }
            None => self.phase = TurnPhase::TurnComplete,
        }

        GameEvent::MoveCommitted {
            player: pending.player,
            square,
            redirect: pending.redirect,
        }
    }

    fn finish_turn(&mut self) -> GameEvent {
        let player = self.current;
        if self.positions[player] == Square::LAST {
            info!(winner = player.0, turns = self.turn_number, "game won");
            self.phase = TurnPhase::GameOver { winner: player };
            return GameEvent::GameWon { winner: player };
        }

        self.current = player.next(self.positions.player_count());
        self.phase = TurnPhase::AwaitingRoll;
        trace!(next = self.current.0, "turn passed");
        GameEvent::TurnPassed { next: self.current }
    }

    fn record(&mut self, player: PlayerId, die: u8, from: Square, result: TurnResult) {
        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            player,
            die,
            from,
            result,
        });
    }

    // === Projections ===

    /// Whether a roll would be accepted right now.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingRoll)
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.positions.player_count()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Committed square of `player`.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<Square> {
        self.positions.get(player).copied()
    }

    /// All players with their committed squares.
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        self.positions.iter().map(|(id, &position)| Player {
            id,
            position,
            token: PlayerToken::for_player(id),
        })
    }

    /// Where to draw `player` this frame.
    ///
    /// Follows the animation for the moving player; everyone else sits on
    /// their committed square.
    #[must_use]
    pub fn display_position(&self, player: PlayerId) -> Option<DisplayPosition> {
        let committed = self.position(player)?;
        match &self.phase {
            TurnPhase::Animating(sequencer) if sequencer.pending().player == player => {
                Some(sequencer.display_position())
            }
            _ => Some(DisplayPosition::at(committed)),
        }
    }

    /// The move being played, if any.
    #[must_use]
    pub fn pending_move(&self) -> Option<&PendingMove> {
        match &self.phase {
            TurnPhase::Animating(sequencer) => Some(sequencer.pending()),
            _ => None,
        }
    }

    #[must_use]
    pub fn dice_display_value(&self) -> u8 {
        self.dice.display_value()
    }

    #[must_use]
    pub fn dice_value(&self) -> u8 {
        self.dice.committed_value()
    }

    #[must_use]
    pub fn is_dice_rolling(&self) -> bool {
        self.dice.is_rolling()
    }

    #[must_use]
    pub fn active_notification(&self) -> Option<&Notification> {
        self.notification.active()
    }

    /// Number of rolls consumed so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every consumed roll, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn board(&self) -> &Arc<BoardTopology> {
        self.resolver.board()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
