//! Board state.
//!
//! A [`Board`] owns three views of the same configuration:
//! - the position list, one entry per row (queen `i` lives in row `i`)
//! - a row-major N×N grid of [`Cell`] markers
//! - the cached heuristic value of the position list
//!
//! Every mutation goes through [`Board::apply_move`], which updates all three
//! in the same call. `Clone` yields a fully independent copy.

use std::fmt;

use rand::Rng;

use crate::error::{QueensError, Result};
use crate::heuristic::conflict_count;
use crate::position::Position;

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Queen,
    Empty,
}

impl Cell {
    pub fn is_queen(self) -> bool {
        matches!(self, Cell::Queen)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Marker used by board snapshots.
    pub fn symbol(self) -> char {
        match self {
            Cell::Queen => 'Q',
            Cell::Empty => '-',
        }
    }
}

/// N-Queens board with exactly one queen per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    positions: Vec<Position>,
    cells: Vec<Cell>,
    heuristic: u64,
}

impl Board {
    /// Creates a board with a uniformly random column for every row.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidSize`] if `size` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenforge_core::Board;
    ///
    /// let board = Board::random(8, &mut rand::rng()).unwrap();
    /// assert_eq!(board.size(), 8);
    /// assert_eq!(board.heuristic(), queenforge_core::conflict_count(board.positions()));
    /// ```
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(QueensError::InvalidSize(0));
        }
        let columns: Vec<usize> = (0..size).map(|_| rng.random_range(0..size)).collect();
        Self::from_columns(&columns)
    }

    /// Creates a board from one column per row.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenforge_core::Board;
    ///
    /// let board = Board::from_columns(&[0, 0, 0, 0]).unwrap();
    /// assert_eq!(board.heuristic(), 12);
    /// ```
    pub fn from_columns(columns: &[usize]) -> Result<Self> {
        let positions: Vec<Position> = columns
            .iter()
            .enumerate()
            .map(|(row, &column)| Position::new(row, column))
            .collect();
        Self::from_positions(columns.len(), positions)
    }

    /// Creates a board from an explicit position list.
    ///
    /// The list must hold exactly one position per row, in row order.
    pub fn from_positions(size: usize, positions: Vec<Position>) -> Result<Self> {
        if size == 0 {
            return Err(QueensError::InvalidSize(0));
        }
        if positions.len() != size {
            return Err(QueensError::PositionCount {
                expected: size,
                actual: positions.len(),
            });
        }

        let mut cells = vec![Cell::Empty; size * size];
        for (queen, position) in positions.iter().enumerate() {
            if !position.is_within(size) {
                return Err(QueensError::InvalidPosition {
                    position: *position,
                    size,
                });
            }
            if position.row != queen {
                return Err(QueensError::RowMismatch {
                    queen,
                    destination: *position,
                });
            }
            cells[position.row * size + position.column] = Cell::Queen;
        }

        let heuristic = conflict_count(&positions);
        Ok(Self {
            size,
            positions,
            cells,
            heuristic,
        })
    }

    /// Returns N, the number of rows, columns and queens.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the position list indexed by queen (row).
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the position of a queen.
    pub fn position(&self, queen: usize) -> Option<Position> {
        self.positions.get(queen).copied()
    }

    /// Returns the cached heuristic of the current configuration.
    pub fn heuristic(&self) -> u64 {
        self.heuristic
    }

    /// Returns true if no two queens share a row or a column.
    pub fn is_solved(&self) -> bool {
        self.heuristic == 0
    }

    /// Returns the grid cell at `position`, or `None` outside the board.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.is_within(self.size) {
            Some(self.cells[position.row * self.size + position.column])
        } else {
            None
        }
    }

    /// Iterates over grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Relocates `queen` to `destination` and recomputes the heuristic.
    ///
    /// Returns the new heuristic value.
    ///
    /// # Errors
    ///
    /// Fails without touching the board if the queen does not exist, the
    /// destination is off the board, or the destination is in another row.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenforge_core::{Board, Position};
    ///
    /// let mut board = Board::from_columns(&[0, 0, 0, 0]).unwrap();
    /// let heuristic = board.apply_move(0, Position::new(0, 1)).unwrap();
    /// assert_eq!(heuristic, 6);
    /// assert_eq!(board.position(0), Some(Position::new(0, 1)));
    /// ```
    pub fn apply_move(&mut self, queen: usize, destination: Position) -> Result<u64> {
        let size = self.size;
        let Some(origin) = self.position(queen) else {
            return Err(QueensError::QueenOutOfRange { queen, size });
        };
        if !destination.is_within(size) {
            return Err(QueensError::InvalidPosition {
                position: destination,
                size,
            });
        }
        if destination.row != queen {
            return Err(QueensError::RowMismatch { queen, destination });
        }

        self.cells[origin.row * size + origin.column] = Cell::Empty;
        self.cells[destination.row * size + destination.column] = Cell::Queen;
        self.positions[queen] = destination;
        self.heuristic = conflict_count(&self.positions);

        Ok(self.heuristic)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f, "Heuristic value: {}", self.heuristic)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests;
