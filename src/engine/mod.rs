//! Turn engine: session state, animation, dice and notifications.
//!
//! ## Tick model
//!
//! The external loop calls `tick()` once per frame. Each tick decrements the
//! dice spin and the notification timer, then performs at most one turn
//! transition. Nothing here blocks; "animating" is a phase, not a call.
//!
//! ## Ownership
//!
//! - `GameSession` is the only writer of player positions
//! - `AnimationSequencer` owns the pending move while it plays
//! - `DiceController` and `NotificationTimer` tick independently
//! - `GameController` swaps whole sessions in and out

pub mod animation;
pub mod dice;
pub mod notification;
pub mod event;
pub mod session;
pub mod view;
pub mod controller;

pub use animation::{AnimationSequencer, DisplayPosition, PendingMove, SequencerStatus};
pub use dice::{DiceController, DiceState};
pub use notification::{messages_for, Notification, NotificationTimer, LADDER_MESSAGES, SNAKE_MESSAGES};
pub use event::{GameEvent, TurnRecord, TurnResult};
pub use session::{GameSession, PhaseKind, RollOutcome, TurnPhase};
pub use view::{GameView, PlayerView};
pub use controller::{Command, CommandOutcome, GameController, Screen};
