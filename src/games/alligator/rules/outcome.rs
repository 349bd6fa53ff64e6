//! Win detection for Alligator Chess.
//!
//! The checks run in a fixed order and the first hit decides the game:
//! breakthrough, then annihilation, then stalemate. Degenerate boards can
//! satisfy more than one check, so the order is part of the rules. None of
//! the checks depend on whose turn it is.

use super::super::{Board, Position, Side, SIZE};
use super::movement::all_legal_moves;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum WinReason {
    /// A piece reached the enemy's home row.
    Breakthrough,
    /// The loser has no pieces left.
    Annihilation,
    /// The loser has no legal move.
    Stalemate,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// The side that won.
    pub winner: Side,
    /// The rule that decided it.
    pub reason: WinReason,
}

impl Outcome {
    /// Creates an outcome.
    pub fn new(winner: Side, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// The side that lost.
    pub fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            WinReason::Breakthrough => write!(f, "{} wins by reaching the far edge", self.winner),
            WinReason::Annihilation => {
                write!(f, "{} wins by capturing every {}", self.winner, self.loser())
            }
            WinReason::Stalemate => {
                write!(f, "{} wins: {} can no longer move", self.winner, self.loser())
            }
        }
    }
}

/// A piece on its goal row wins.
///
/// Columns are scanned left to right, and within a column a Monkey on row 0
/// is tested before an Alligator on row 2.
#[instrument(skip(board), fields(board = %board))]
pub fn breakthrough(board: &Board) -> Option<Side> {
    (0..SIZE as i8).find_map(|col| {
        [Side::Monkey, Side::Alligator]
            .into_iter()
            .find(|side| board.is_occupied_by(Position::new(side.goal_row(), col), *side))
    })
}

/// A side with no pieces left loses. Monkey's count is tested first.
#[instrument(skip(board), fields(board = %board))]
pub fn annihilation(board: &Board) -> Option<Side> {
    if board.count(Side::Monkey) == 0 {
        Some(Side::Alligator)
    } else if board.count(Side::Alligator) == 0 {
        Some(Side::Monkey)
    } else {
        None
    }
}

/// A side with no legal move loses, whoever is on move.
///
/// Monkey is tested first, so a board where neither side can move goes to
/// Alligator.
#[instrument(skip(board), fields(board = %board))]
pub fn stalemate(board: &Board) -> Option<Side> {
    [Side::Monkey, Side::Alligator]
        .into_iter()
        .find(|side| all_legal_moves(*side, board).is_empty())
        .map(Side::opponent)
}

/// Evaluates the board after a move.
///
/// Returns `None` while the game goes on.
#[instrument(skip(board), fields(board = %board))]
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    let outcome = breakthrough(board)
        .map(|winner| Outcome::new(winner, WinReason::Breakthrough))
        .or_else(|| annihilation(board).map(|winner| Outcome::new(winner, WinReason::Annihilation)))
        .or_else(|| stalemate(board).map(|winner| Outcome::new(winner, WinReason::Stalemate)));

    if let Some(outcome) = outcome {
        debug!(%outcome, "Terminal position");
    }
    outcome
}
