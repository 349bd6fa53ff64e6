mod action;
pub mod contracts;
pub mod invariants;
pub mod opponent;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError, OpponentError};
pub use opponent::choose_move;
pub use position::Position;
pub use rules::{Outcome, WinReason};
pub use state::{new_game, GameState, GameStatus};
pub use types::{Board, BoardError, Cell, Side, SIZE};
