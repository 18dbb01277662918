//! Move applier.

use queenforge_core::{Board, Result};

use crate::neighbor::CandidateMove;

/// Commits an improving candidate to the board.
///
/// Returns whether the search should continue: `false` once the board has
/// no conflicts left. A board that is already solved is left untouched and
/// reports `false`.
///
/// # Examples
///
/// ```
/// use queenforge_core::{Board, Position};
/// use queenforge_solver::{move_to_lower_heuristic, CandidateMove};
///
/// let mut board = Board::from_columns(&[0, 0]).unwrap();
/// let candidate = CandidateMove { queen: 1, destination: Position::new(1, 1), heuristic: 0 };
///
/// assert!(!move_to_lower_heuristic(&mut board, &candidate).unwrap());
/// assert!(board.is_solved());
/// ```
pub fn move_to_lower_heuristic(board: &mut Board, candidate: &CandidateMove) -> Result<bool> {
    if board.is_solved() {
        return Ok(false);
    }
    let heuristic = board.apply_move(candidate.queen, candidate.destination)?;
    Ok(heuristic != 0)
}
