//! Error types for QueenForge

use thiserror::Error;

use crate::position::Position;

/// Main error type for board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size was zero or negative.
    #[error("Invalid board size {0}: the number of queens must be greater than 0")]
    InvalidSize(i64),

    /// Position list does not hold one entry per row.
    #[error("Expected {expected} queen positions, got {actual}")]
    PositionCount { expected: usize, actual: usize },

    /// Queen index does not name a row of the board.
    #[error("Queen {queen} does not exist on a board of size {size}")]
    QueenOutOfRange { queen: usize, size: usize },

    /// Position lies outside the board.
    #[error("Position {position} is outside a board of size {size}")]
    InvalidPosition { position: Position, size: usize },

    /// Move would take a queen out of its own row.
    #[error("Queen {queen} cannot move to {destination}: queens stay in their own row")]
    RowMismatch { queen: usize, destination: Position },
}

/// Result type alias for QueenForge operations
pub type Result<T> = std::result::Result<T, QueensError>;

/// Validates a user-supplied board size.
///
/// # Examples
///
/// ```
/// use queenforge_core::{board_size, QueensError};
///
/// assert_eq!(board_size(8), Ok(8));
/// assert_eq!(board_size(0), Err(QueensError::InvalidSize(0)));
/// assert_eq!(board_size(-3), Err(QueensError::InvalidSize(-3)));
/// ```
pub fn board_size(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(QueensError::InvalidSize(n));
    }
    usize::try_from(n).map_err(|_| QueensError::InvalidSize(n))
}
