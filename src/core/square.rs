//! Board squares.
//!
//! A `Square` is a coordinate on the 100-square board, numbered 1 to 100
//! along the serpentine track. It is never stored as an entity of its own.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// A square on the board, always in [1, 100].
///
/// ```
/// use snakes_ladders::core::Square;
///
/// assert_eq!(Square::FIRST.number(), 1);
/// assert_eq!(Square::LAST.number(), 100);
/// assert!(Square::checked(101).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Starting square for every player.
    pub const FIRST: Square = Square(1);

    /// Winning square.
    pub const LAST: Square = Square(100);

    /// Create a square from a number known to be on the board.
    ///
    /// Panics when `number` is outside [1, 100]; use `checked` for
    /// untrusted input.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        assert!(
            number >= Self::FIRST.0 && number <= Self::LAST.0,
            "square number off the board"
        );
        Self(number)
    }

    /// Create a square, returning `None` when `number` is off the board.
    #[must_use]
    pub fn checked(number: u16) -> Option<Self> {
        if (Self::FIRST.0 as u16..=Self::LAST.0 as u16).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    /// Get the raw square number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Raw square number `steps` ahead. May run past the last square.
    #[must_use]
    pub const fn offset(self, steps: u8) -> u16 {
        self.0 as u16 + steps as u16
    }
}

impl TryFrom<u8> for Square {
    type Error = BoardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::checked(number.into()).ok_or(BoardError::SquareOutOfRange { square: number })
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_bounds() {
        assert_eq!(Square::checked(0), None);
        assert_eq!(Square::checked(1), Some(Square::FIRST));
        assert_eq!(Square::checked(100), Some(Square::LAST));
        assert_eq!(Square::checked(101), None);
        assert_eq!(Square::checked(300), None);
    }

    #[test]
    #[should_panic(expected = "square number off the board")]
    fn test_new_rejects_zero() {
        let _ = Square::new(0);
    }

    #[test]
    #[should_panic(expected = "square number off the board")]
    fn test_new_rejects_past_last() {
        let _ = Square::new(101);
    }

    #[test]
    fn test_deserialize_checks_range() {
        let square: Square = serde_json::from_str("42").unwrap();
        assert_eq!(square, Square::new(42));
        assert_eq!(serde_json::to_string(&square).unwrap(), "42");

        assert!(serde_json::from_str::<Square>("0").is_err());
        assert!(serde_json::from_str::<Square>("200").is_err());
        assert_eq!(Square::try_from(101), Err(BoardError::SquareOutOfRange { square: 101 }));
    }

    #[test]
    fn test_offset_can_overshoot() {
        assert_eq!(Square::new(98).offset(6), 104);
        assert_eq!(Square::new(2).offset(2), 4);
    }

    #[test]
    fn test_display_and_order() {
        assert_eq!(Square::new(42).to_string(), "42");
        assert!(Square::new(3) < Square::new(14));
    }
}
