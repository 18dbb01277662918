//! Row/column conflict heuristic.
//!
//! The heuristic counts, for every *ordered* pair of distinct queens, one
//! conflict if the two share a row or a column. A conflicting pair therefore
//! contributes 2 to the total. Diagonals are not considered.

use crate::position::Position;

/// Returns the total conflict count for an arbitrary position list.
///
/// Pure function, O(n²).
///
/// # Examples
///
/// ```
/// use queenforge_core::{conflict_count, Position};
///
/// let solved: Vec<Position> = [1, 3, 0, 2]
///     .iter()
///     .enumerate()
///     .map(|(row, &column)| Position::new(row, column))
///     .collect();
/// assert_eq!(conflict_count(&solved), 0);
///
/// let stacked: Vec<Position> = (0..4).map(|row| Position::new(row, 0)).collect();
/// assert_eq!(conflict_count(&stacked), 12);
/// ```
pub fn conflict_count(positions: &[Position]) -> u64 {
    let mut total = 0;
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate() {
            if i != j && a.collides_with(b) {
                total += 1;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn positions(columns: &[usize]) -> Vec<Position> {
        columns
            .iter()
            .enumerate()
            .map(|(row, &column)| Position::new(row, column))
            .collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(conflict_count(&[]), 0);
        assert_eq!(conflict_count(&[Position::new(0, 0)]), 0);
    }

    #[test]
    fn test_known_solution_is_zero() {
        assert_eq!(conflict_count(&positions(&[1, 3, 0, 2])), 0);
    }

    #[test]
    fn test_same_column_counts_both_directions() {
        assert_eq!(conflict_count(&positions(&[0, 0, 0, 0])), 12);
        assert_eq!(conflict_count(&positions(&[0, 0, 1, 2])), 2);
    }

    #[test]
    fn test_row_sharing_counts() {
        // Not reachable through the board, but the evaluator still counts it.
        let shared_row = [Position::new(1, 0), Position::new(1, 3)];
        assert_eq!(conflict_count(&shared_row), 2);
    }

    #[test]
    fn test_diagonals_ignored() {
        assert_eq!(conflict_count(&positions(&[0, 1, 2, 3])), 0);
    }

    proptest! {
        #[test]
        fn prop_permutation_invariant(
            columns in proptest::collection::vec(0usize..8, 1..8),
            seed in any::<u64>(),
        ) {
            let original = positions(&columns);
            let mut shuffled = original.clone();
            let len = shuffled.len();
            let rotation = (seed as usize) % len;
            shuffled.rotate_left(rotation);
            shuffled.reverse();
            prop_assert_eq!(conflict_count(&original), conflict_count(&shuffled));
        }

        #[test]
        fn prop_always_even(columns in proptest::collection::vec(0usize..8, 0..8)) {
            prop_assert_eq!(conflict_count(&positions(&columns)) % 2, 0);
        }

        #[test]
        fn prop_distinct_columns_are_conflict_free(size in 1usize..10, shift in 0usize..10) {
            let columns: Vec<usize> = (0..size).map(|row| (row + shift) % size).collect();
            prop_assert_eq!(conflict_count(&positions(&columns)), 0);
        }
    }
}
