//! Transient ladder/snake messages.

use serde::{Deserialize, Serialize};

use crate::board::ShortcutKind;

/// Shown after climbing a ladder.
pub const LADDER_MESSAGES: [&str; 6] = [
    "Great job! Keep climbing!",
    "Education lifts you up!",
    "Kindness is your ladder!",
    "Hard work pays off!",
    "Dream big, achieve bigger!",
    "Helping others helps you!",
];

/// Shown after sliding down a snake.
pub const SNAKE_MESSAGES: [&str; 8] = [
    "Don't pollute! Keep Earth clean!",
    "Say no to plastic! Go green!",
    "Plant trees! Save the planet!",
    "Save water! Every drop counts!",
    "Reduce, reuse, recycle!",
    "Choose renewable energy!",
    "Protect wildlife! They need us!",
    "Walk or cycle! Reduce pollution!",
];

/// Message bank for a shortcut kind.
#[must_use]
pub fn messages_for(category: ShortcutKind) -> &'static [&'static str] {
    match category {
        ShortcutKind::Ladder => &LADDER_MESSAGES,
        ShortcutKind::Snake => &SNAKE_MESSAGES,
    }
}

/// An active message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub category: ShortcutKind,
    pub ticks_remaining: u32,
}

/// Holds at most one message and expires it.
#[derive(Clone, Debug, Default)]
pub struct NotificationTimer {
    active: Option<Notification>,
    budget: u32,
}

impl NotificationTimer {
    /// Messages stay up for `budget` ticks.
    #[must_use]
    pub fn new(budget: u32) -> Self {
        Self {
            active: None,
            budget,
        }
    }

    /// Show a message, replacing any current one.
    pub fn trigger(&mut self, category: ShortcutKind, text: impl Into<String>) {
        self.active = Some(Notification {
            text: text.into(),
            category,
            ticks_remaining: self.budget,
        });
    }

    pub fn tick(&mut self) {
        if let Some(notification) = &mut self.active {
            notification.ticks_remaining = notification.ticks_remaining.saturating_sub(1);
            if notification.ticks_remaining == 0 {
                self.active = None;
            }
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
