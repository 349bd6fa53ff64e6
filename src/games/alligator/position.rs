//! Board coordinates.

use super::types::SIZE;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate.
///
/// Coordinates are signed and unchecked so that off-board destinations can
/// be expressed and rejected as ordinary illegal moves. Use
/// [`Position::is_on_board`] or [`Position::indices`] to test bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Position {
    /// Row, 0 at the top (Alligator's home edge).
    pub row: i8,
    /// Column, 0 at the left.
    pub col: i8,
}

impl Position {
    /// All 9 on-board positions in row-major order.
    pub const ALL: [Position; SIZE * SIZE] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Checks whether both coordinates lie in `[0, 2]`.
    pub fn is_on_board(self) -> bool {
        self.indices().is_some()
    }

    /// Array indices for this position, or `None` off the board.
    pub fn indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < SIZE)?;
        Some((row, col))
    }

    /// Position shifted by the given deltas. The result may be off the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Position {
        Position {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
