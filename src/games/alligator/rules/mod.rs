//! Game rules for Alligator Chess.
//!
//! This module contains pure functions over board snapshots. Rules are
//! separated from game state so that the opponent, the contracts and the
//! session all share one validation path.

pub mod movement;
pub mod outcome;

pub use movement::{all_legal_moves, apply_move, is_capture, is_legal, legal_targets};
pub use outcome::{annihilation, breakthrough, check_outcome, stalemate, Outcome, WinReason};
