//! First-class invariants for Alligator Chess.
//!
//! Invariants are logical properties that must hold for every game state
//! reachable through the public API. The move contract checks them on the
//! incoming state before every move, and again on the result in debug
//! builds.

use super::{Board, GameState, Side, SIZE};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Invariant Trait
// ─────────────────────────────────────────────────────────────

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game Invariants
// ─────────────────────────────────────────────────────────────

/// Each side has at most one row's worth of pieces.
pub struct PieceBudget;

impl PieceBudget {
    /// Returns the first side over budget on `board`, with its count.
    pub fn excess(board: &Board) -> Option<(Side, usize)> {
        Side::iter()
            .map(|side| (side, board.count(side)))
            .find(|(_, count)| *count > SIZE)
    }
}

impl Invariant<GameState> for PieceBudget {
    #[instrument(skip(state))]
    fn holds(state: &GameState) -> bool {
        match Self::excess(state.board()) {
            Some((side, count)) => {
                warn!(%side, count, "Piece budget exceeded");
                false
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Each side has at most 3 pieces"
    }
}

/// The "opponent is deciding" flag is only raised while the opponent owes a move.
pub struct ThinkingFlagConsistent;

impl Invariant<GameState> for ThinkingFlagConsistent {
    #[instrument(skip(state))]
    fn holds(state: &GameState) -> bool {
        let ok = !state.opponent_thinking()
            || (!state.is_over() && state.to_move() == Side::Alligator);
        if !ok {
            warn!(to_move = %state.to_move(), over = state.is_over(), "Thinking flag out of sync");
        }
        ok
    }

    fn description() -> &'static str {
        "Opponent thinks only on its own turn in a live game"
    }
}

// Alligator Chess invariant set (all game invariants)

/// Every invariant a live or finished game must satisfy.
pub type AlligatorInvariants = (PieceBudget, ThinkingFlagConsistent);
