//! Game state snapshots and transitions.
//!
//! A [`GameState`] is never changed once built. Every applied move returns a
//! fresh snapshot holding its own copy of the board, so a presentation layer
//! can keep old snapshots around without seeing them change.

use super::action::{Move, MoveError, OpponentError};
use super::contracts::{Contract, MoveContract};
use super::invariants::PieceBudget;
use super::opponent::choose_move;
use super::rules::{self, check_outcome, Outcome, WinReason};
use super::{Board, BoardError, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game has ended.
    Finished(Outcome),
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Side to move.
    to_move: Side,
    /// Game status.
    status: GameStatus,
    /// Set while the opponent owes its reply.
    opponent_thinking: bool,
}

impl GameState {
    /// Creates a new game: start layout, Monkey to move.
    #[instrument]
    pub fn new() -> Self {
        info!("New game");
        Self {
            board: Board::initial(),
            to_move: Side::Monkey,
            status: GameStatus::InProgress,
            opponent_thinking: false,
        }
    }

    /// Builds a state from an arbitrary position with `to_move` on move.
    ///
    /// The position is evaluated immediately, so a board that is already
    /// decided yields a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyPieces`] if a side has more than
    /// [`SIZE`](super::SIZE) pieces.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board, to_move: Side) -> Result<Self, BoardError> {
        if let Some((side, count)) = PieceBudget::excess(&board) {
            warn!(%side, count, "Rejected board over piece budget");
            return Err(BoardError::TooManyPieces { side, count });
        }
        Ok(Self::settle(board, to_move))
    }

    fn settle(board: Board, to_move: Side) -> Self {
        let status = match check_outcome(&board) {
            Some(outcome) => {
                info!(%outcome, "Game over");
                GameStatus::Finished(outcome)
            }
            None => GameStatus::InProgress,
        };
        Self {
            board,
            to_move,
            status,
            opponent_thinking: status == GameStatus::InProgress && to_move == Side::Alligator,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Whether the opponent owes a reply.
    pub fn opponent_thinking(&self) -> bool {
        self.opponent_thinking
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Finished(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    /// Returns the winner of a finished game.
    pub fn winner(&self) -> Option<Side> {
        self.outcome().map(|outcome| outcome.winner)
    }

    /// Legality probe on the current board, ignoring whose turn it is.
    pub fn is_legal(&self, mv: Move) -> bool {
        rules::is_legal(&self.board, mv.from, mv.to)
    }

    /// Legal moves for the side to move. Empty once the game is over.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        rules::all_legal_moves(self.to_move, &self.board)
    }

    /// Legal destinations for the piece on `from`, for highlighting.
    pub fn legal_targets(&self, from: Position) -> Vec<Position> {
        rules::legal_targets(&self.board, from)
    }

    /// Validates and applies a move for the side to move.
    ///
    /// Returns the next snapshot with the outcome evaluated and the turn
    /// passed on.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing why the move was rejected. `self`
    /// is left exactly as it was.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn attempt_move(&self, mv: Move) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &mv)?;

        let board = rules::apply_move(&self.board, mv)?;
        let next = Self::settle(board, self.to_move.opponent());

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Like [`GameState::attempt_move`], but returns an unchanged copy on rejection.
    pub fn attempt_move_or_keep(&self, mv: Move) -> GameState {
        self.attempt_move(mv).unwrap_or_else(|_| self.clone())
    }

    /// Plays the opponent's reply.
    ///
    /// When the opponent has no move at all, the result is a finished game
    /// won by Monkey on stalemate. Snapshots built here never reach that
    /// case, since a blocked Alligator already ends the game on Monkey's
    /// move; it only arises for snapshots restored from elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an [`OpponentError`] if it is not Alligator's turn or the
    /// game is already over.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn opponent_move(&self) -> Result<GameState, OpponentError> {
        if self.is_over() {
            return Err(OpponentError::GameOver);
        }
        if self.to_move != Side::Alligator {
            return Err(OpponentError::NotOpponentsTurn);
        }

        match choose_move(&self.board) {
            Some(mv) => self.attempt_move(mv).map_err(OpponentError::Rejected),
            None => {
                let outcome = Outcome::new(Side::Monkey, WinReason::Stalemate);
                info!(%outcome, "Opponent cannot move");
                Ok(GameState {
                    status: GameStatus::Finished(outcome),
                    opponent_thinking: false,
                    ..self.clone()
                })
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical initial state.
pub fn new_game() -> GameState {
    GameState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
        Move::new(from.into(), to.into())
    }

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.to_move(), Side::Monkey);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert!(!game.opponent_thinking());
    }

    #[test]
    fn test_attempt_move_advances_turn() {
        let game = GameState::new();
        let next = game.attempt_move(mv((2, 0), (1, 0))).unwrap();
        assert_eq!(next.to_move(), Side::Alligator);
        assert!(next.opponent_thinking());
        assert_eq!(next.board().to_string(), "AAA/M../.MM");
        // The original snapshot is untouched.
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_illegal_move_keeps_state() {
        let game = GameState::new();
        let kept = game.attempt_move_or_keep(mv((2, 0), (0, 0)));
        assert_eq!(kept, game);
        assert!(game.attempt_move(mv((2, 0), (3, 0))).is_err());
    }

    #[test]
    fn test_opponent_precondition_errors() {
        let game = GameState::new();
        assert_eq!(
            game.opponent_move(),
            Err(OpponentError::NotOpponentsTurn)
        );

        let won = GameState::from_board("M../.A./...".parse().unwrap(), Side::Alligator).unwrap();
        assert_eq!(won.opponent_move(), Err(OpponentError::GameOver));
    }

    #[test]
    fn test_opponent_reply_hands_turn_back() {
        let game = GameState::new().attempt_move(mv((2, 0), (1, 0))).unwrap();
        let reply = game.opponent_move().unwrap();
        assert_eq!(reply.to_move(), Side::Monkey);
        assert!(!reply.opponent_thinking());
        // (0,1) captures the advanced Monkey on its left diagonal.
        assert_eq!(reply.board().to_string(), "A.A/A../.MM");
    }

    #[test]
    fn test_legal_moves_empty_when_over() {
        let won = GameState::from_board(".../.A./A..".parse().unwrap(), Side::Monkey).unwrap();
        assert!(won.is_over());
        assert!(won.legal_moves().is_empty());
    }

    #[test]
    fn test_from_board_rejects_extra_pieces() {
        let board = "MMM/M../MMM".parse().unwrap();
        assert_eq!(
            GameState::from_board(board, Side::Monkey),
            Err(BoardError::TooManyPieces {
                side: Side::Monkey,
                count: 7,
            })
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_string(&GameState::new()).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameState::new());
    }
}
