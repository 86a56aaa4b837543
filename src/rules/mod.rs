//! Move rules.
//!
//! `MoveResolver` turns a die value into a validated path:
//! - Overshooting the last square rejects the roll
//! - Every square stepped over is part of the path
//! - One ladder or snake is applied at the landing square
//!
//! Resolution is pure. It never touches player positions; the turn engine
//! commits the outcome once the path has played out.

pub mod resolver;

pub use resolver::{MoveOutcome, MovePath, MoveResolver};
