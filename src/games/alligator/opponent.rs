//! Greedy one-ply opponent for the Alligator side.

use super::rules::is_capture;
use super::{Board, Move, Side};
use tracing::{debug, instrument};

/// Picks the Alligator's reply on `board`.
///
/// Alligators are scanned in row-major order. The first one that can
/// capture does so, taking the left diagonal before the right. If no
/// Alligator can capture, the first one with an open cell ahead steps
/// forward. Returns `None` when no Alligator can move, which means the
/// Alligator side has lost by stalemate.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board) -> Option<Move> {
    let side = Side::Alligator;
    let pieces = board.pieces(side);
    let forward = side.forward();

    let capture = pieces.iter().find_map(|&from| {
        [-1, 1]
            .into_iter()
            .map(|d_col| Move::new(from, from.offset(forward, d_col)))
            .find(|mv| is_capture(board, *mv))
    });
    if let Some(mv) = capture {
        debug!(%mv, "Opponent captures");
        return Some(mv);
    }

    let step = pieces
        .iter()
        .map(|&from| Move::new(from, from.offset(forward, 0)))
        .find(|mv| board.is_empty(mv.to));
    match step {
        Some(mv) => debug!(%mv, "Opponent steps forward"),
        None => debug!("Opponent has no move"),
    }
    step
}
