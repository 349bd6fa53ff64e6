//! Alligator Chess library - rules engine and scripted opponent
//!
//! Alligator Chess is played on a 3x3 board. Monkeys start on the bottom
//! row and Alligators on the top row. Pieces step straight ahead onto empty
//! cells and capture diagonally forward. A side wins by reaching the far
//! edge, by capturing every enemy piece, or when the enemy has nothing left
//! to play.
//!
//! # Architecture
//!
//! - **Games**: board model, move rules, outcome detection and the greedy
//!   Alligator opponent, all pure functions over board snapshots
//! - **Session**: one human against the opponent, with a cancellable
//!   delayed reply
//! - **Config**: TOML settings for the session and the binary
//!
//! # Example
//!
//! ```
//! use alligator_chess::{GameState, Move, Position, Side};
//!
//! let game = GameState::new();
//! let game = game
//!     .attempt_move(Move::new(Position::new(2, 0), Position::new(1, 0)))
//!     .expect("opening step is legal");
//! let game = game.opponent_move().expect("opponent is on move");
//! assert_eq!(game.to_move(), Side::Monkey);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{Session, SessionError};

// Crate-level exports - Game types
pub use games::alligator::{
    choose_move, new_game, Board, BoardError, Cell, GameState, GameStatus, Move, MoveError,
    OpponentError, Outcome, Position, Side, WinReason, SIZE,
};

// Crate-level exports - Rules, contracts and invariants
pub use games::alligator::{contracts, invariants, rules};
