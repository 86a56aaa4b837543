//! Die state: the committed value plus a cosmetic spin.
//!
//! The committed value is known the moment a roll is made; the spin is only
//! what the presentation shows while `is_rolling` is set.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Snapshot of the die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceState {
    pub committed_value: u8,
    pub is_rolling: bool,
    pub roll_ticks_remaining: u32,
}

impl Default for DiceState {
    fn default() -> Self {
        Self {
            committed_value: 1,
            is_rolling: false,
            roll_ticks_remaining: 0,
        }
    }
}

/// Owns the die and its spin timer.
#[derive(Clone, Debug)]
pub struct DiceController {
    state: DiceState,
    /// Face shown this tick. Random while spinning.
    display_value: u8,
    roll_ticks: u32,
    /// Cosmetic faces come from their own stream so they never shift
    /// committed rolls.
    spin_rng: GameRng,
}

impl DiceController {
    /// Create a die that spins for `roll_ticks` after each roll.
    #[must_use]
    pub fn new(roll_ticks: u32, spin_rng: GameRng) -> Self {
        let state = DiceState::default();
        Self {
            display_value: state.committed_value,
            state,
            roll_ticks,
            spin_rng,
        }
    }

    /// Roll the die and start the spin. The returned value is final.
    pub fn commit_roll(&mut self, rng: &mut GameRng) -> u8 {
        let value = rng.roll_die();
        self.state = DiceState {
            committed_value: value,
            is_rolling: true,
            roll_ticks_remaining: self.roll_ticks,
        };
        self.display_value = self.spin_rng.roll_die();
        value
    }

    /// Advance the spin by one tick.
    pub fn tick(&mut self) {
        if !self.state.is_rolling {
            return;
        }

        self.state.roll_ticks_remaining = self.state.roll_ticks_remaining.saturating_sub(1);
        if self.state.roll_ticks_remaining == 0 {
            self.state.is_rolling = false;
            self.display_value = self.state.committed_value;
        } else {
            self.display_value = self.spin_rng.roll_die();
        }
    }

    #[must_use]
    pub fn state(&self) -> DiceState {
        self.state
    }

    #[must_use]
    pub fn committed_value(&self) -> u8 {
        self.state.committed_value
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.state.is_rolling
    }

    /// Face to draw this frame.
    #[must_use]
    pub fn display_value(&self) -> u8 {
        self.display_value
    }
}
