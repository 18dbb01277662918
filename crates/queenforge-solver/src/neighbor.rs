//! Neighbor generation for the target queen.
//!
//! One scan evaluates every empty cell of the grid as a hypothetical
//! destination for the target queen and keeps the first cell, in row-major
//! order, whose resulting heuristic is strictly below the best known value.
//! The live board is never modified.

use std::fmt;

use queenforge_core::{conflict_count, Board, Position, QueensError, Result};

/// A relocation of one queen together with the heuristic it would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub queen: usize,
    pub destination: Position,
    pub heuristic: u64,
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queen {} -> {} (heuristic {})",
            self.queen, self.destination, self.heuristic
        )
    }
}

/// Result of scanning the neighborhood of the target queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The board already has no conflicts; nothing was evaluated.
    Solved,
    /// A strictly better cell was found.
    Improved(CandidateMove),
    /// No empty cell improves on the best known heuristic.
    LocalOptimum,
}

/// Heuristic value of every empty cell for one target queen.
///
/// Occupied cells hold `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicBoard {
    size: usize,
    target: usize,
    values: Vec<Option<u64>>,
}

impl HeuristicBoard {
    fn new(size: usize, target: usize) -> Self {
        Self {
            size,
            target,
            values: vec![None; size * size],
        }
    }

    fn record(&mut self, position: Position, heuristic: u64) {
        self.values[position.row * self.size + position.column] = Some(heuristic);
    }

    /// Returns the queen whose relocations this board describes.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the heuristic for moving the target to `position`, or `None`
    /// for occupied cells and positions outside the board.
    pub fn value(&self, position: Position) -> Option<u64> {
        if position.is_within(self.size) {
            self.values[position.row * self.size + position.column]
        } else {
            None
        }
    }

    /// Iterates over evaluated cells in row-major order.
    pub fn evaluated(&self) -> impl Iterator<Item = (Position, u64)> + '_ {
        self.values.iter().enumerate().filter_map(move |(i, value)| {
            value.map(|h| (Position::new(i / self.size, i % self.size), h))
        })
    }
}

impl fmt::Display for HeuristicBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .values
            .iter()
            .flatten()
            .max()
            .map_or(1, |max| max.to_string().len());
        for row in self.values.chunks(self.size) {
            let line: Vec<String> = row
                .iter()
                .map(|value| match value {
                    Some(h) => format!("{h:>width$}"),
                    None => format!("{:>width$}", "Q"),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Everything one neighbor scan produced.
#[derive(Debug, Clone)]
pub struct NeighborScan {
    pub outcome: ScanOutcome,
    /// Per-cell heuristics; `None` when the scan short-circuited.
    pub heuristic_board: Option<HeuristicBoard>,
    /// Number of candidate cells evaluated.
    pub evaluated: u64,
}

impl NeighborScan {
    /// Returns true if an improving candidate was found.
    pub fn found_better(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Improved(_))
    }

    /// Returns the improving candidate, if any.
    pub fn best(&self) -> Option<&CandidateMove> {
        match &self.outcome {
            ScanOutcome::Improved(candidate) => Some(candidate),
            _ => None,
        }
    }
}

/// Evaluates every empty cell as a destination for `target`.
///
/// Tracks the lowest heuristic strictly below `lower_heuristic`; the first
/// such cell in row-major order wins ties. A board whose heuristic is
/// already 0 short-circuits to [`ScanOutcome::Solved`].
///
/// # Errors
///
/// Returns [`QueensError::QueenOutOfRange`] if `target` is not a queen of
/// the board.
///
/// # Examples
///
/// ```
/// use queenforge_core::{Board, Position};
/// use queenforge_solver::{scan_neighbors, ScanOutcome};
///
/// let board = Board::from_columns(&[0, 0, 0, 0]).unwrap();
/// let scan = scan_neighbors(&board, 0, board.heuristic()).unwrap();
///
/// let best = scan.best().unwrap();
/// assert_eq!(best.destination, Position::new(0, 1));
/// assert_eq!(best.heuristic, 6);
/// ```
pub fn scan_neighbors(board: &Board, target: usize, lower_heuristic: u64) -> Result<NeighborScan> {
    let size = board.size();
    if target >= size {
        return Err(QueensError::QueenOutOfRange {
            queen: target,
            size,
        });
    }

    if board.is_solved() {
        return Ok(NeighborScan {
            outcome: ScanOutcome::Solved,
            heuristic_board: None,
            evaluated: 0,
        });
    }

    let mut scratch = board.positions().to_vec();
    let mut heuristic_board = HeuristicBoard::new(size, target);
    let mut lowest = lower_heuristic;
    let mut best = None;
    let mut evaluated = 0;

    for row in 0..size {
        for column in 0..size {
            let cell = Position::new(row, column);
            if board.cell(cell).is_some_and(|c| c.is_queen()) {
                continue;
            }

            scratch[target] = cell;
            let heuristic = conflict_count(&scratch);
            heuristic_board.record(cell, heuristic);
            evaluated += 1;

            if heuristic < lowest {
                lowest = heuristic;
                best = Some(CandidateMove {
                    queen: target,
                    destination: cell,
                    heuristic,
                });
            }
        }
    }

    let outcome = match best {
        Some(candidate) => ScanOutcome::Improved(candidate),
        None => ScanOutcome::LocalOptimum,
    };

    Ok(NeighborScan {
        outcome,
        heuristic_board: Some(heuristic_board),
        evaluated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenforge_test::{all_same_column_board, local_optimum_board, solved_four_queens};

    #[test]
    fn test_solved_board_short_circuits() {
        let board = solved_four_queens();
        let scan = scan_neighbors(&board, 2, board.heuristic()).unwrap();

        assert_eq!(scan.outcome, ScanOutcome::Solved);
        assert_eq!(scan.evaluated, 0);
        assert!(scan.heuristic_board.is_none());
        assert!(!scan.found_better());
    }

    #[test]
    fn test_single_queen_is_solved() {
        let board = Board::from_columns(&[0]).unwrap();
        let scan = scan_neighbors(&board, 0, 0).unwrap();
        assert_eq!(scan.outcome, ScanOutcome::Solved);
    }

    #[test]
    fn test_never_proposes_occupied_cells() {
        let board = Board::from_columns(&[0, 0, 2, 2, 1]).unwrap();
        for target in 0..board.size() {
            let scan = scan_neighbors(&board, target, u64::MAX).unwrap();
            let heuristic_board = scan.heuristic_board.as_ref().unwrap();

            for position in board.positions() {
                assert_eq!(heuristic_board.value(*position), None);
            }
            assert_eq!(scan.evaluated, (25 - 5) as u64);

            let best = scan.best().unwrap();
            assert_ne!(Some(best.destination), board.position(target));
            assert!(board.cell(best.destination).unwrap().is_empty());
        }
    }

    #[test]
    fn test_heuristic_board_matches_independent_count() {
        let board = all_same_column_board(4);
        let scan = scan_neighbors(&board, 1, board.heuristic()).unwrap();
        let heuristic_board = scan.heuristic_board.unwrap();

        for (position, heuristic) in heuristic_board.evaluated() {
            let mut scratch = board.positions().to_vec();
            scratch[1] = position;
            assert_eq!(heuristic, conflict_count(&scratch));
        }
        // Row 1 already holds the target, so only the column term changes.
        assert_eq!(heuristic_board.value(Position::new(1, 2)), Some(6));
        // Another row adds the row conflict with that row's queen.
        assert_eq!(heuristic_board.value(Position::new(0, 2)), Some(8));
    }

    #[test]
    fn test_first_strictly_improving_cell_wins_ties() {
        // Columns 1, 2 and 3 of row 0 all give 6; column 1 is met first.
        let board = all_same_column_board(4);
        let scan = scan_neighbors(&board, 0, board.heuristic()).unwrap();
        assert_eq!(scan.best().unwrap().destination, Position::new(0, 1));
    }

    #[test]
    fn test_local_optimum_when_nothing_is_strictly_better() {
        let board = local_optimum_board();
        let scan = scan_neighbors(&board, 0, board.heuristic()).unwrap();
        assert_eq!(scan.outcome, ScanOutcome::LocalOptimum);
        assert!(scan.evaluated > 0);
    }

    #[test]
    fn test_lower_heuristic_bounds_improvement() {
        let board = all_same_column_board(4);
        let scan = scan_neighbors(&board, 0, 6).unwrap();
        assert_eq!(scan.outcome, ScanOutcome::LocalOptimum);
    }

    #[test]
    fn test_target_out_of_range() {
        let board = Board::from_columns(&[0, 1]).unwrap();
        assert!(matches!(
            scan_neighbors(&board, 2, 0),
            Err(QueensError::QueenOutOfRange { queen: 2, size: 2 })
        ));
    }

    #[test]
    fn test_heuristic_board_display() {
        let board = Board::from_columns(&[0, 0]).unwrap();
        let scan = scan_neighbors(&board, 0, board.heuristic()).unwrap();
        // (0,1): alone in its column -> 0. (1,1): shares row 1 with queen 1 -> 2.
        assert_eq!(scan.heuristic_board.unwrap().to_string(), "Q 0\nQ 2\n");
    }
}
