//! The fixed 100-square board.
//!
//! - Serpentine numbering: square → grid cell, rows alternating direction
//! - The ladder/snake shortcut table, validated at construction
//!
//! The topology is immutable. Sessions share one instance through an `Arc`.

pub mod topology;

pub use topology::{
    BoardTopology, Cell, Shortcut, ShortcutKind, BOARD_WIDTH, STANDARD_LADDERS, STANDARD_SNAKES,
};
