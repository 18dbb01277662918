//! Tests for board state.

use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn assert_consistent(board: &Board) {
    let size = board.size();
    assert_eq!(board.positions().len(), size);
    for (row_index, row) in board.rows().enumerate() {
        let queens: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_queen())
            .map(|(column, _)| column)
            .collect();
        assert_eq!(queens.len(), 1, "row {row_index} must hold one queen");
        assert_eq!(board.positions()[row_index], Position::new(row_index, queens[0]));
    }
    assert_eq!(board.heuristic(), conflict_count(board.positions()));
}

#[test]
fn test_random_board_has_one_queen_per_row() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for size in 1..=12 {
        let board = Board::random(size, &mut rng).unwrap();
        assert_eq!(board.size(), size);
        assert_consistent(&board);
    }
}

#[test]
fn test_random_rejects_zero() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    assert_eq!(Board::random(0, &mut rng), Err(QueensError::InvalidSize(0)));
}

#[test]
fn test_known_solution() {
    let positions = vec![
        Position::new(0, 1),
        Position::new(1, 3),
        Position::new(2, 0),
        Position::new(3, 2),
    ];
    let board = Board::from_positions(4, positions).unwrap();
    assert_eq!(board.heuristic(), 0);
    assert!(board.is_solved());
}

#[test]
fn test_all_same_column() {
    let board = Board::from_columns(&[0, 0, 0, 0]).unwrap();
    assert_eq!(board.heuristic(), 12);
    assert!(!board.is_solved());
}

#[test]
fn test_from_positions_validation() {
    assert_eq!(
        Board::from_positions(3, vec![Position::new(0, 0)]),
        Err(QueensError::PositionCount {
            expected: 3,
            actual: 1
        })
    );
    assert_eq!(
        Board::from_columns(&[0, 5]),
        Err(QueensError::InvalidPosition {
            position: Position::new(1, 5),
            size: 2
        })
    );
    assert!(matches!(
        Board::from_positions(2, vec![Position::new(1, 0), Position::new(0, 1)]),
        Err(QueensError::RowMismatch { queen: 0, .. })
    ));
}

#[test]
fn test_apply_move_keeps_grid_consistent() {
    let mut board = Board::from_columns(&[0, 0, 0, 0]).unwrap();

    let heuristic = board.apply_move(2, Position::new(2, 3)).unwrap();

    assert_eq!(heuristic, 6);
    assert_eq!(board.cell(Position::new(2, 0)), Some(Cell::Empty));
    assert_eq!(board.cell(Position::new(2, 3)), Some(Cell::Queen));
    assert_consistent(&board);
}

#[test]
fn test_apply_move_to_same_cell() {
    let mut board = Board::from_columns(&[1, 3, 0, 2]).unwrap();
    board.apply_move(1, Position::new(1, 3)).unwrap();
    assert_eq!(board.heuristic(), 0);
    assert_consistent(&board);
}

#[test]
fn test_apply_move_rejects_invalid_moves() {
    let mut board = Board::from_columns(&[0, 1, 2]).unwrap();
    let before = board.clone();

    assert_eq!(
        board.apply_move(3, Position::new(3, 0)),
        Err(QueensError::QueenOutOfRange { queen: 3, size: 3 })
    );
    assert!(matches!(
        board.apply_move(0, Position::new(0, 3)),
        Err(QueensError::InvalidPosition { .. })
    ));
    assert!(matches!(
        board.apply_move(0, Position::new(1, 2)),
        Err(QueensError::RowMismatch { queen: 0, .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn test_clone_is_independent() {
    let original = Board::from_columns(&[0, 0, 0, 0]).unwrap();
    let mut copy = original.clone();

    copy.apply_move(0, Position::new(0, 1)).unwrap();

    assert_eq!(original.position(0), Some(Position::new(0, 0)));
    assert_eq!(original.heuristic(), 12);
    assert_eq!(copy.heuristic(), 6);
}

#[test]
fn test_cell_outside_board() {
    let board = Board::from_columns(&[0]).unwrap();
    assert_eq!(board.cell(Position::new(0, 1)), None);
    assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Queen));
}

#[test]
fn test_display_snapshot() {
    let board = Board::from_columns(&[1, 0]).unwrap();
    assert_eq!(board.to_string(), "- Q\nQ -\nHeuristic value: 0\n\n");
}
