//! Move resolution: die value → validated path across the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

use crate::board::{BoardTopology, ShortcutKind};
use crate::core::{Square, DIE_FACES};

/// Squares a token visits during one move, in order.
///
/// At most six forward steps plus one redirect, so it never spills to the
/// heap.
pub type MovePath = SmallVec<[Square; 8]>;

/// Result of resolving one die roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// False when the roll would run past the last square.
    pub accepted: bool,

    /// Every square stepped on, ending with the redirect target if the move
    /// landed on a shortcut. Empty when rejected.
    pub path: MovePath,

    /// Where the token ends up. Equals the start square when rejected.
    pub final_position: Square,

    /// Ladder or snake taken at the end of the move.
    pub redirect: Option<ShortcutKind>,
}

impl MoveOutcome {
    fn rejected(current: Square) -> Self {
        Self {
            accepted: false,
            path: MovePath::new(),
            final_position: current,
            redirect: None,
        }
    }

    /// Whether the move ends on the winning square.
    #[must_use]
    pub fn reaches_goal(&self) -> bool {
        self.accepted && self.final_position == Square::LAST
    }
}

/// Resolves rolls against a board.
///
/// ## Example
///
/// ```
/// use snakes_ladders::board::{BoardTopology, ShortcutKind};
/// use snakes_ladders::core::Square;
/// use snakes_ladders::rules::MoveResolver;
///
/// let resolver = MoveResolver::new(BoardTopology::standard());
///
/// let outcome = resolver.resolve(Square::new(2), 2);
/// assert!(outcome.accepted);
/// assert_eq!(outcome.path.as_slice(), &[Square::new(3), Square::new(4), Square::new(14)]);
/// assert_eq!(outcome.redirect, Some(ShortcutKind::Ladder));
///
/// assert!(!resolver.resolve(Square::new(98), 6).accepted);
/// ```
#[derive(Clone, Debug)]
pub struct MoveResolver {
    board: Arc<BoardTopology>,
}

impl MoveResolver {
    #[must_use]
    pub fn new(board: Arc<BoardTopology>) -> Self {
        Self { board }
    }

    /// Board this resolver plays on.
    #[must_use]
    pub fn board(&self) -> &Arc<BoardTopology> {
        &self.board
    }

    /// Resolve a roll of `die` from `current`.
    ///
    /// Overshooting the last square rejects the move outright. Otherwise the
    /// path walks every square up to the landing square, then applies at most
    /// one shortcut. A shortcut target that is itself a shortcut entry is
    /// not followed.
    #[must_use]
    pub fn resolve(&self, current: Square, die: u8) -> MoveOutcome {
        debug_assert!(
            (1..=DIE_FACES).contains(&die),
            "die value {die} outside 1..={DIE_FACES}"
        );

        let raw = current.offset(die);
        let Some(landing) = Square::checked(raw) else {
            return MoveOutcome::rejected(current);
        };

        let mut path: MovePath = (current.number() + 1..=landing.number())
            .map(Square::new)
            .collect();

        let target = self.board.resolve_shortcut(landing);
        let redirect = if target == landing {
            None
        } else {
            path.push(target);
            Some(if target > landing {
                ShortcutKind::Ladder
            } else {
                ShortcutKind::Snake
            })
        };

        MoveOutcome {
            accepted: true,
            final_position: target,
            path,
            redirect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MoveResolver {
        MoveResolver::new(BoardTopology::standard())
    }

    fn squares(ns: &[u8]) -> Vec<Square> {
        ns.iter().copied().map(Square::new).collect()
    }

    #[test]
    fn test_plain_move() {
        let outcome = resolver().resolve(Square::new(1), 4);

        assert!(outcome.accepted);
        assert_eq!(outcome.path.to_vec(), squares(&[2, 3, 4, 5]));
        assert_eq!(outcome.final_position, Square::new(5));
        assert_eq!(outcome.redirect, None);
    }

    #[test]
    fn test_ladder_appends_target() {
        let outcome = resolver().resolve(Square::new(2), 2);

        assert_eq!(outcome.path.to_vec(), squares(&[3, 4, 14]));
        assert_eq!(outcome.final_position, Square::new(14));
        assert_eq!(outcome.redirect, Some(ShortcutKind::Ladder));
    }

    #[test]
    fn test_snake_appends_target() {
        let outcome = resolver().resolve(Square::new(60), 4);

        assert_eq!(outcome.path.to_vec(), squares(&[61, 62, 63, 64, 60]));
        assert_eq!(outcome.final_position, Square::new(60));
        assert_eq!(outcome.redirect, Some(ShortcutKind::Snake));
    }

    #[test]
    fn test_overshoot_is_rejected() {
        let outcome = resolver().resolve(Square::new(98), 6);

        assert!(!outcome.accepted);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.final_position, Square::new(98));
        assert!(!outcome.reaches_goal());
    }

    #[test]
    fn test_exact_landing_on_last_square() {
        let outcome = resolver().resolve(Square::new(95), 5);

        assert!(outcome.accepted);
        assert_eq!(outcome.path.to_vec(), squares(&[96, 97, 98, 99, 100]));
        assert_eq!(outcome.redirect, None);
        assert!(outcome.reaches_goal());
    }

    #[test]
    fn test_passing_over_a_shortcut_does_not_trigger_it() {
        // 16 is a snake head but the move lands on 17.
        let outcome = resolver().resolve(Square::new(14), 3);
        assert_eq!(outcome.final_position, Square::new(17));
        assert_eq!(outcome.redirect, None);
    }

    #[test]
    fn test_redirects_are_not_chained() {
        // Ladder 2 -> 4 lands on the entry of ladder 4 -> 14.
        let board = BoardTopology::new(&[(2, 4), (4, 14)], &[]).unwrap();
        let resolver = MoveResolver::new(Arc::new(board));

        let outcome = resolver.resolve(Square::new(1), 1);
        assert_eq!(outcome.path.to_vec(), squares(&[2, 4]));
        assert_eq!(outcome.final_position, Square::new(4));
    }

    #[test]
    fn test_path_never_spills() {
        let resolver = resolver();
        for start in 1..=99u8 {
            for die in 1..=DIE_FACES {
                let outcome = resolver.resolve(Square::new(start), die);
                assert!(!outcome.path.spilled());
                assert!(outcome.path.len() <= die as usize + 1);
            }
        }
    }
}
