//! Grid coordinates.

use std::fmt;

/// A `(row, column)` cell on the board.
///
/// Row index doubles as queen index: queen `i` always lives in row `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns true if both coordinates fit on a board of `size`.
    pub fn is_within(&self, size: usize) -> bool {
        self.row < size && self.column < size
    }

    /// Returns true if the two positions share a row or a column.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.row == other.row || self.column == other.column
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
