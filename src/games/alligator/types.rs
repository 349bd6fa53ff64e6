//! Core domain types for Alligator Chess.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Board edge length. The grid is always `SIZE x SIZE`.
pub const SIZE: usize = 3;

/// One of the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Side {
    /// The human side. Starts on row 2 and advances toward row 0.
    Monkey,
    /// The scripted side. Starts on row 0 and advances toward row 2.
    Alligator,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Monkey => Side::Alligator,
            Side::Alligator => Side::Monkey,
        }
    }

    /// Row delta of a single forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::Monkey => -1,
            Side::Alligator => 1,
        }
    }

    /// Row this side starts on.
    pub fn home_row(self) -> i8 {
        match self {
            Side::Monkey => 2,
            Side::Alligator => 0,
        }
    }

    /// Row this side wins by reaching.
    pub fn goal_row(self) -> i8 {
        self.opponent().home_row()
    }

    /// One-letter symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Side::Monkey => 'M',
            Side::Alligator => 'A',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// A piece of the given side.
    Occupied(Side),
}

impl Cell {
    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    /// One-letter symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(side) => side.symbol(),
        }
    }
}

/// Errors from direct board manipulation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Position lies outside the grid.
    #[display("Position {} is off the board", _0)]
    OffBoard(Position),

    /// Board notation could not be parsed.
    #[display("Malformed board notation: {}", _0)]
    Notation(String),

    /// A side has more pieces than fit on its home row.
    #[display("{side} has {count} pieces, at most {} allowed", SIZE)]
    TooManyPieces {
        /// The side over budget.
        side: Side,
        /// Its piece count.
        count: usize,
    },
}

impl std::error::Error for BoardError {}

/// 3x3 Alligator Chess board.
///
/// Row 0 is Alligator's home edge, row 2 is Monkey's. The board is a plain
/// value: copying it never shares cells with the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the starting layout: Alligators on row 0, Monkeys on row 2.
    #[instrument]
    pub fn initial() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[Side::Alligator.home_row() as usize] = [Cell::Occupied(Side::Alligator); SIZE];
        cells[Side::Monkey.home_row() as usize] = [Cell::Occupied(Side::Monkey); SIZE];
        Self { cells }
    }

    /// Gets the cell at the given position, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        let (row, col) = pos.indices()?;
        Some(self.cells[row][col])
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), BoardError> {
        let (row, col) = pos.indices().ok_or(BoardError::OffBoard(pos))?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Checks if the position is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Checks if the position holds a piece of `side`.
    pub fn is_occupied_by(&self, pos: Position, side: Side) -> bool {
        self.get(pos) == Some(Cell::Occupied(side))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Positions of every piece of `side`, in row-major order.
    pub fn pieces(&self, side: Side) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_occupied_by(*pos, side))
            .collect()
    }

    /// Number of pieces `side` has left.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(side))
            .count()
    }
}

/// Compact notation: rows top to bottom separated by `/`,
/// `A` Alligator, `M` Monkey, `.` empty. The start layout is `AAA/.../MMM`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(BoardError::Notation(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != SIZE {
                return Err(BoardError::Notation(format!(
                    "row {} has {} cells",
                    r,
                    symbols.len()
                )));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                cells[r][c] = match symbol {
                    '.' => Cell::Empty,
                    'M' | 'm' => Cell::Occupied(Side::Monkey),
                    'A' | 'a' => Cell::Occupied(Side::Alligator),
                    other => {
                        return Err(BoardError::Notation(format!(
                            "unknown symbol {:?} at row {}",
                            other, r
                        )));
                    }
                };
            }
        }

        Ok(Self { cells })
    }
}
