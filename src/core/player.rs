//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index for 1-4 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## PlayerToken
//!
//! Opaque presentation identity for each seat. The engine only carries it
//! around so the presentation layer can look up colors by id.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::square::Square;

/// Maximum number of seats at the board.
pub const MAX_PLAYERS: usize = 4;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// Stops at `MAX_PLAYERS` seats.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// assert_eq!(PlayerId::all(300).count(), 4);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..MAX_PLAYERS as u8)
            .take(player_count)
            .map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Presentation identity of a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerToken {
    Red,
    Green,
    Blue,
    Purple,
}

impl PlayerToken {
    /// Tokens in seat order.
    pub const SEATS: [PlayerToken; MAX_PLAYERS] = [
        PlayerToken::Red,
        PlayerToken::Green,
        PlayerToken::Blue,
        PlayerToken::Purple,
    ];

    /// Token assigned to a seat.
    #[must_use]
    pub fn for_player(player: PlayerId) -> Self {
        Self::SEATS[player.index() % MAX_PLAYERS]
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerToken::Red => "Red",
            PlayerToken::Green => "Green",
            PlayerToken::Blue => "Blue",
            PlayerToken::Purple => "Purple",
        }
    }
}

/// Read-only view of one player, handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Committed square. Only changes when a move finishes animating.
    pub position: Square,
    pub token: PlayerToken,
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap, Square};
///
/// let mut positions = PlayerMap::with_value(2, Square::FIRST);
/// positions[PlayerId::new(1)] = Square::new(14);
///
/// assert_eq!(positions[PlayerId::new(0)], Square::FIRST);
/// assert_eq!(positions[PlayerId::new(1)], Square::new(14));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Panics when `player_count` is 0 or above `MAX_PLAYERS`; callers
    /// validate the count before building a session.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {MAX_PLAYERS} players supported"
        );

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
