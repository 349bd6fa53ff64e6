//! Contract-based validation for Alligator Chess moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} move {Q}. Preconditions
//! are always checked and decide whether a move is rejected.
//! Postconditions are checked in debug builds only.

use super::action::{Move, MoveError};
use super::invariants::{AlligatorInvariants, InvariantSet, InvariantViolation};
use super::rules::is_legal;
use super::{Cell, GameState, Side};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`MoveError::GameOver`] once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the incoming state satisfies [`AlligatorInvariants`].
///
/// States built through [`GameState::from_board`] always do; a snapshot
/// deserialized from elsewhere might not.
pub struct ConsistentState;

impl ConsistentState {
    /// Fails with [`MoveError::InvariantViolation`] listing every broken invariant.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        AlligatorInvariants::check_all(game).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Precondition failed: {}",
                describe(&violations)
            ))
        })
    }
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Precondition: the source square holds a piece of the side to move.
pub struct PieceOfSideToMove;

impl PieceOfSideToMove {
    /// Checks who owns the source square. Off-board sources count as empty.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), MoveError> {
        match game.board().get(mv.from) {
            None | Some(Cell::Empty) => Err(MoveError::NoPiece(mv.from)),
            Some(Cell::Occupied(found)) if found != game.to_move() => Err(MoveError::WrongSide {
                expected: game.to_move(),
                found,
            }),
            Some(Cell::Occupied(_)) => Ok(()),
        }
    }
}

/// Precondition: the move is a forward step or a diagonal capture.
pub struct LegalShape;

impl LegalShape {
    /// Checks the move against the movement rules.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), MoveError> {
        if is_legal(game.board(), mv.from, mv.to) {
            Ok(())
        } else {
            Err(MoveError::Illegal(*mv))
        }
    }
}

/// Composite precondition for a move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, reporting the first that fails.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        ConsistentState::check(game)?;
        PieceOfSideToMove::check(mv, game)?;
        LegalShape::check(mv, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: game in progress, consistent state, piece of the side to
/// move, legal shape.
///
/// Postconditions: no side gains pieces, and [`AlligatorInvariants`] hold
/// on the new state.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).inspect_err(|err| {
            debug!(%action, %err, "Move rejected");
        })
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut problems: Vec<String> = Side::iter()
            .filter(|side| after.board().count(*side) > before.board().count(*side))
            .map(|side| format!("{} gained pieces", side))
            .collect();

        if let Err(violations) = AlligatorInvariants::check_all(after) {
            problems.push(describe(&violations));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                problems.join("; ")
            )))
        }
    }
}
