//! Board fixtures.

use queenforge_core::Board;

// (0,1) (1,3) (2,0) (3,2)
const SOLVED_FOUR_QUEENS_COLUMNS: [usize; 4] = [1, 3, 0, 2];

/// A 4-queens board with heuristic 0.
pub fn solved_four_queens() -> Board {
    Board::from_columns(&SOLVED_FOUR_QUEENS_COLUMNS).expect("fixture columns are valid")
}

/// An `n`-queens board with every queen in column 0.
///
/// Its heuristic is `n * (n - 1)`: every ordered pair shares the column.
///
/// # Panics
///
/// Panics if `n` is 0.
pub fn all_same_column_board(n: usize) -> Board {
    Board::from_columns(&vec![0; n]).expect("board size must be positive")
}

/// A 5-queens board on which queen 0 cannot improve.
///
/// Queen 0 sits alone in column 0 while columns 1 and 2 each hold two
/// queens, so every relocation of queen 0 keeps or raises the heuristic.
pub fn local_optimum_board() -> Board {
    Board::from_columns(&[0, 1, 1, 2, 2]).expect("fixture columns are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_heuristics() {
        assert_eq!(solved_four_queens().heuristic(), 0);
        assert_eq!(all_same_column_board(1).heuristic(), 0);
        assert_eq!(all_same_column_board(4).heuristic(), 12);
        assert_eq!(all_same_column_board(8).heuristic(), 56);
        assert_eq!(local_optimum_board().heuristic(), 4);
    }

    #[test]
    #[should_panic(expected = "board size must be positive")]
    fn test_empty_board_panics() {
        all_same_column_board(0);
    }
}
