//! Board topology: serpentine layout and the ladder/snake table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

use crate::core::{BoardError, Square};

/// Squares per row.
pub const BOARD_WIDTH: u8 = 10;

/// Ladders on the standard board, as (entry, exit).
pub const STANDARD_LADDERS: [(u8, u8); 8] = [
    (4, 14),
    (9, 31),
    (20, 38),
    (28, 84),
    (40, 59),
    (51, 67),
    (63, 81),
    (71, 91),
];

/// Snakes on the standard board, as (head, tail).
pub const STANDARD_SNAKES: [(u8, u8); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Grid cell, counted from the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

/// Ladder or snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutKind {
    Ladder,
    Snake,
}

/// A single redirect on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub kind: ShortcutKind,
    pub from: Square,
    pub to: Square,
}

/// Immutable board layout.
///
/// Built once with every table invariant checked, so move resolution never
/// has to revalidate anything.
///
/// ## Example
///
/// ```
/// use snakes_ladders::board::{BoardTopology, Cell};
/// use snakes_ladders::core::Square;
///
/// let board = BoardTopology::standard();
///
/// assert_eq!(board.resolve_shortcut(Square::new(4)), Square::new(14));
/// assert_eq!(board.resolve_shortcut(Square::new(64)), Square::new(60));
/// assert_eq!(board.resolve_shortcut(Square::new(5)), Square::new(5));
///
/// // Row 1 runs right to left.
/// assert_eq!(board.square_to_cell(Square::new(11)), Cell { col: 9, row: 1 });
/// ```
#[derive(Clone, Debug)]
pub struct BoardTopology {
    ladders: FxHashMap<Square, Square>,
    snakes: FxHashMap<Square, Square>,
}

impl BoardTopology {
    /// Build a topology from raw (entry, exit) pairs.
    ///
    /// Fails on any square off the board, a self loop, a ladder that does
    /// not climb, a snake that does not descend, an entry used twice, or a
    /// shortcut starting on the last square.
    pub fn new(ladders: &[(u8, u8)], snakes: &[(u8, u8)]) -> Result<Self, BoardError> {
        let mut board = Self {
            ladders: FxHashMap::default(),
            snakes: FxHashMap::default(),
        };

        for &(from, to) in ladders {
            let (from, to) = board.check_pair(from, to)?;
            if to < from {
                return Err(BoardError::LadderNotAscending { from, to });
            }
            board.ladders.insert(from, to);
        }

        for &(from, to) in snakes {
            let (from, to) = board.check_pair(from, to)?;
            if to > from {
                return Err(BoardError::SnakeNotDescending { from, to });
            }
            board.snakes.insert(from, to);
        }

        Ok(board)
    }

    fn check_pair(&self, from: u8, to: u8) -> Result<(Square, Square), BoardError> {
        let from_sq =
            Square::checked(from.into()).ok_or(BoardError::SquareOutOfRange { square: from })?;
        let to_sq = Square::checked(to.into()).ok_or(BoardError::SquareOutOfRange { square: to })?;

        if from_sq == to_sq {
            return Err(BoardError::SelfLoop { square: from_sq });
        }
        if from_sq == Square::LAST {
            return Err(BoardError::ShortcutOnLastSquare);
        }
        if self.ladders.contains_key(&from_sq) || self.snakes.contains_key(&from_sq) {
            return Err(BoardError::DuplicateKey { square: from_sq });
        }
        Ok((from_sq, to_sq))
    }

    /// The fixed board every session plays on.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn standard() -> Arc<BoardTopology> {
        static STANDARD: OnceLock<Arc<BoardTopology>> = OnceLock::new();
        STANDARD
            .get_or_init(|| {
                let board = BoardTopology::new(&STANDARD_LADDERS, &STANDARD_SNAKES)
                    .expect("standard shortcut table is well formed");
                Arc::new(board)
            })
            .clone()
    }

    /// Map a square to its grid cell.
    ///
    /// Rows alternate direction, starting left to right on the bottom row.
    #[must_use]
    pub fn square_to_cell(&self, square: Square) -> Cell {
        let index = square.number() - 1;
        let row = index / BOARD_WIDTH;
        let mut col = index % BOARD_WIDTH;
        if row % 2 == 1 {
            col = BOARD_WIDTH - 1 - col;
        }
        Cell { col, row }
    }

    /// Apply at most one ladder or snake to `square`.
    #[must_use]
    pub fn resolve_shortcut(&self, square: Square) -> Square {
        self.ladders
            .get(&square)
            .or_else(|| self.snakes.get(&square))
            .copied()
            .unwrap_or(square)
    }

    /// The shortcut starting at `square`, if any.
    #[must_use]
    pub fn shortcut(&self, square: Square) -> Option<Shortcut> {
        if let Some(&to) = self.ladders.get(&square) {
            return Some(Shortcut {
                kind: ShortcutKind::Ladder,
                from: square,
                to,
            });
        }
        self.snakes.get(&square).map(|&to| Shortcut {
            kind: ShortcutKind::Snake,
            from: square,
            to,
        })
    }

    /// Ladders sorted by entry square.
    pub fn ladders(&self) -> impl Iterator<Item = Shortcut> + '_ {
        Self::sorted(&self.ladders, ShortcutKind::Ladder)
    }

    /// Snakes sorted by head square.
    pub fn snakes(&self) -> impl Iterator<Item = Shortcut> + '_ {
        Self::sorted(&self.snakes, ShortcutKind::Snake)
    }

    fn sorted(
        table: &FxHashMap<Square, Square>,
        kind: ShortcutKind,
    ) -> impl Iterator<Item = Shortcut> + '_ {
        let mut entries: Vec<_> = table.iter().map(|(&from, &to)| (from, to)).collect();
        entries.sort_unstable();
        entries
            .into_iter()
            .map(move |(from, to)| Shortcut { kind, from, to })
    }
}
