//! Engine timing configuration.
//!
//! All timers count ticks, not wall-clock time. The external loop calls
//! `tick()` once per frame at `tick_rate_hz`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// What happens to turn flow while a ladder/snake message is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPolicy {
    /// The message is shown after the move is committed; the turn passes on
    /// the next tick and the next roll is allowed while it is still visible.
    #[default]
    Informational,
    /// Rolls stay locked until the message expires.
    Blocking,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed update rate the external loop ticks at.
    pub tick_rate_hz: u32,

    /// Ticks spent on each square of a move path.
    pub step_delay_ticks: u32,

    /// Ticks the die spins after a roll. Purely cosmetic.
    pub dice_roll_ticks: u32,

    /// Ticks a ladder/snake message stays visible.
    pub notification_ticks: u32,

    pub notification_policy: NotificationPolicy,

    /// Seed for dice and message selection.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            step_delay_ticks: 20,
            dice_roll_ticks: 30,
            notification_ticks: 180,
            notification_policy: NotificationPolicy::Informational,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the per-square animation delay.
    #[must_use]
    pub fn with_step_delay(mut self, ticks: u32) -> Self {
        self.step_delay_ticks = ticks;
        self
    }

    /// Set the dice spin duration.
    #[must_use]
    pub fn with_dice_roll_ticks(mut self, ticks: u32) -> Self {
        self.dice_roll_ticks = ticks;
        self
    }

    /// Set how long ladder/snake messages stay up.
    #[must_use]
    pub fn with_notification_ticks(mut self, ticks: u32) -> Self {
        self.notification_ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_notification_policy(mut self, policy: NotificationPolicy) -> Self {
        self.notification_policy = policy;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Convert a wall-clock duration to whole ticks at `tick_rate_hz`.
    #[must_use]
    pub fn ticks_for(&self, duration: Duration) -> u32 {
        (duration.as_secs_f64() * f64::from(self.tick_rate_hz)).round() as u32
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::Validation("tick_rate_hz must be > 0".into()));
        }
        if self.step_delay_ticks == 0 {
            return Err(ConfigError::Validation(
                "step_delay_ticks must be > 0".into(),
            ));
        }
        if self.dice_roll_ticks == 0 {
            return Err(ConfigError::Validation("dice_roll_ticks must be > 0".into()));
        }
        if self.notification_ticks == 0 {
            return Err(ConfigError::Validation(
                "notification_ticks must be > 0".into(),
            ));
        }
        Ok(())
    }
}
