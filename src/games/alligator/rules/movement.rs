//! Move legality and application.

use super::super::{Board, Cell, Move, MoveError, Position, Side};
use tracing::{instrument, trace};

/// Checks whether the piece on `from` may move to `to`.
///
/// Pieces move one row toward the enemy edge: straight ahead onto an empty
/// cell, or diagonally onto an enemy piece (capturing it). Anything else,
/// including off-board coordinates, is illegal.
#[instrument(level = "trace", skip(board))]
pub fn is_legal(board: &Board, from: Position, to: Position) -> bool {
    if !to.is_on_board() {
        return false;
    }
    let Some(Cell::Occupied(side)) = board.get(from) else {
        return false;
    };

    let mv = Move::new(from, to);
    if mv.d_row() != i16::from(side.forward()) {
        return false;
    }

    match (mv.d_col(), board.get(to)) {
        (0, Some(Cell::Empty)) => true,
        (-1 | 1, Some(Cell::Occupied(target))) => target == side.opponent(),
        _ => false,
    }
}

/// Checks whether `mv` is a legal diagonal capture.
pub fn is_capture(board: &Board, mv: Move) -> bool {
    mv.d_col() != 0 && is_legal(board, mv.from, mv.to)
}

/// Every legal move for `side`.
///
/// Source cells are scanned in row-major order, and for each source the
/// destinations are scanned in row-major order too. Computed fresh on every
/// call.
#[instrument(skip(board), fields(board = %board))]
pub fn all_legal_moves(side: Side, board: &Board) -> Vec<Move> {
    let moves: Vec<Move> = Position::ALL
        .iter()
        .copied()
        .filter(|from| board.is_occupied_by(*from, side))
        .flat_map(|from| {
            Position::ALL
                .iter()
                .copied()
                .filter(move |to| is_legal(board, from, *to))
                .map(move |to| Move::new(from, to))
        })
        .collect();
    trace!(count = moves.len(), "Enumerated legal moves");
    moves
}

/// Legal destinations for the piece on `from`, in row-major order.
///
/// Empty when `from` holds no piece.
#[instrument(skip(board))]
pub fn legal_targets(board: &Board, from: Position) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|to| is_legal(board, from, *to))
        .collect()
}

/// Applies a legal move to a copy of `board`.
///
/// The captured piece, if any, is overwritten. The input board is never
/// modified.
///
/// # Errors
///
/// Returns [`MoveError::Illegal`] if the move is not legal on `board`.
#[instrument(skip(board, mv), fields(board = %board, mv = %mv))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if !is_legal(board, mv.from, mv.to) {
        return Err(MoveError::Illegal(mv));
    }

    let mut next = *board;
    let piece = next.get(mv.from).ok_or(MoveError::NoPiece(mv.from))?;
    next.set(mv.to, piece)
        .map_err(|_| MoveError::Illegal(mv))?;
    next.set(mv.from, Cell::Empty)
        .map_err(|_| MoveError::NoPiece(mv.from))?;
    Ok(next)
}
