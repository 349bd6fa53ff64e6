//! First-class move and error types for Alligator Chess.
//!
//! Moves are domain values, not side effects. A move means nothing on its
//! own; it is checked and applied against a specific board snapshot.

use super::{Position, Side};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: the piece on `from` goes to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Square the piece leaves.
    pub from: Position,
    /// Square the piece lands on.
    pub to: Position,
}

impl Move {
    /// Row delta of this move.
    pub fn d_row(&self) -> i16 {
        i16::from(self.to.row) - i16::from(self.from.row)
    }

    /// Column delta of this move.
    pub fn d_col(&self) -> i16 {
        i16::from(self.to.col) - i16::from(self.from.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Why a move was rejected.
///
/// A rejected move leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// There is no piece on the source square (or it is off the board).
    #[display("No piece at {}", _0)]
    NoPiece(Position),

    /// The piece belongs to the side not on move.
    #[display("It's {}'s turn, not {}'s", expected, found)]
    WrongSide {
        /// Side to move.
        expected: Side,
        /// Owner of the piece that was picked.
        found: Side,
    },

    /// The move has an illegal shape or target.
    #[display("Illegal move {}", _0)]
    Illegal(Move),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Misuse of the opponent entry point.
///
/// Kept apart from "no legal move": that case is a stalemate loss and
/// produces a finished game, not an error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum OpponentError {
    /// The opponent was asked to move while Monkey is on move.
    #[display("It is not the opponent's turn")]
    NotOpponentsTurn,

    /// The opponent was asked to move in a finished game.
    #[display("Game is already over")]
    GameOver,

    /// The chosen reply failed validation.
    #[display("Opponent move rejected: {}", _0)]
    Rejected(MoveError),
}

impl std::error::Error for OpponentError {}
