//! Tests for recovery strategies.

use super::*;
use crate::scope::SearchScope;
use queenforge_test::all_same_column_board;

#[test]
fn test_hill_climbing_stops() {
    let mut search = SearchScope::with_seed(1);
    let board = all_same_column_board(5);
    let mut scope = AttemptScope::new(&mut search, board.clone(), 0);
    let target = scope.target();
    let mut recovery: Box<dyn Recovery> = Box::new(HillClimbingRecovery::new());

    assert_eq!(recovery.recover(&mut scope).unwrap(), RecoveryOutcome::Stop);
    assert_eq!(scope.board(), &board);
    assert_eq!(scope.target(), target);
}

#[test]
fn test_sideways_keeps_board_and_changes_target() {
    let mut search = SearchScope::with_seed(2);
    let board = all_same_column_board(5);
    let mut scope = AttemptScope::new(&mut search, board.clone(), 0);
    let mut recovery = SidewaysRecovery::new();

    for _ in 0..50 {
        let before = scope.target();
        match recovery.recover(&mut scope).unwrap() {
            RecoveryOutcome::Retargeted { previous, target } => {
                assert_eq!(previous, before);
                assert_ne!(target, previous);
                assert_eq!(target, scope.target());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(scope.board(), &board);
    }
}

#[test]
fn test_random_restart_regenerates_board() {
    let mut search = SearchScope::with_seed(3);
    search.start_search();
    {
        let mut scope = AttemptScope::new(&mut search, all_same_column_board(12), 0);
        let mut recovery = RandomRestartRecovery::new();

        match recovery.recover(&mut scope).unwrap() {
            RecoveryOutcome::Restarted { target, heuristic } => {
                assert_eq!(target, scope.target());
                assert_eq!(heuristic, scope.board().heuristic());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(scope.board().size(), 12);
    }
    assert_eq!(search.stats().restarts, 1);
}

#[test]
fn test_restart_sideways_alternates() {
    let mut search = SearchScope::with_seed(4);
    let mut scope = AttemptScope::new(&mut search, all_same_column_board(6), 0);
    let mut recovery = RestartSidewaysRecovery::new(2);
    recovery.attempt_started();

    let first = recovery.recover(&mut scope).unwrap();
    let second = recovery.recover(&mut scope).unwrap();
    let third = recovery.recover(&mut scope).unwrap();
    let fourth = recovery.recover(&mut scope).unwrap();

    assert!(matches!(first, RecoveryOutcome::Retargeted { .. }));
    assert!(matches!(second, RecoveryOutcome::Retargeted { .. }));
    assert!(matches!(third, RecoveryOutcome::Restarted { .. }));
    assert!(matches!(fourth, RecoveryOutcome::Retargeted { .. }));
    assert_eq!(recovery.sideways_taken(), 1);
}

#[test]
fn test_restart_sideways_improvement_resets_count() {
    let mut search = SearchScope::with_seed(5);
    let mut scope = AttemptScope::new(&mut search, all_same_column_board(6), 0);
    let mut recovery = RestartSidewaysRecovery::new(1);

    recovery.recover(&mut scope).unwrap();
    assert_eq!(recovery.sideways_taken(), 1);
    recovery.step_improved();
    assert_eq!(recovery.sideways_taken(), 0);

    let outcome = recovery.recover(&mut scope).unwrap();
    assert!(matches!(outcome, RecoveryOutcome::Retargeted { .. }));
}

#[test]
fn test_restart_sideways_single_queen_restarts() {
    let mut search = SearchScope::with_seed(6);
    let mut scope = AttemptScope::new(&mut search, all_same_column_board(1), 0);
    let mut recovery = RestartSidewaysRecovery::new(3);

    let outcome = recovery.recover(&mut scope).unwrap();
    assert_eq!(
        outcome,
        RecoveryOutcome::Restarted {
            target: 0,
            heuristic: 0
        }
    );
}

#[test]
fn test_strategy_types() {
    let recoveries: Vec<Box<dyn Recovery>> = vec![
        Box::new(HillClimbingRecovery::new()),
        Box::new(SidewaysRecovery::new()),
        Box::new(RandomRestartRecovery::new()),
        Box::new(RestartSidewaysRecovery::new(3)),
    ];
    let types: Vec<_> = recoveries.iter().map(|r| r.strategy_type()).collect();
    assert_eq!(types, StrategyType::ALL.to_vec());
}
