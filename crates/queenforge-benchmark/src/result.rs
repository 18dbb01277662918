//! Run result types.

use std::time::Duration;

use queenforge_config::StrategyType;
use queenforge_core::Board;
use queenforge_solver::StrategyOutcome;

/// Aggregated result of one strategy.
#[derive(Debug, Clone)]
pub struct StrategyResult {
    pub strategy_type: StrategyType,
    /// Attempts run.
    pub attempts: u64,
    /// Attempts that ended on a conflict-free board.
    pub solved_attempts: u64,
    /// Step count of every recorded success.
    pub success_steps: Vec<u64>,
    /// Step count of every recorded failure.
    pub failure_steps: Vec<u64>,
    pub local_optima: u64,
    pub retargets: u64,
    pub restarts: u64,
    pub moves_applied: u64,
    pub candidates_evaluated: u64,
    /// Wall time of the whole strategy.
    pub solve_time: Duration,
    /// Final board of the first solved attempt.
    pub solution: Option<Board>,
    /// Board each attempt ended on, in attempt order.
    pub final_boards: Vec<Board>,
}

impl StrategyResult {
    /// Tallies a strategy outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use queenforge_benchmark::StrategyResult;
    /// use queenforge_config::StrategyType;
    /// use queenforge_solver::{AttemptOutcome, StrategyOutcome};
    ///
    /// let mut outcome = StrategyOutcome::new(StrategyType::SidewaysMove);
    /// outcome.record(0, AttemptOutcome::Solved { steps: 4 });
    /// outcome.record(1, AttemptOutcome::Solved { steps: 6 });
    ///
    /// let result = StrategyResult::from_outcome(outcome);
    /// assert_eq!(result.success_steps, vec![4, 6]);
    /// assert_eq!(result.mean_success_steps(), Some(5.0));
    /// assert_eq!(result.mean_failure_steps(), None);
    /// ```
    pub fn from_outcome(outcome: StrategyOutcome) -> Self {
        let success_steps = outcome.success_steps();
        let failure_steps = outcome.failure_steps();
        let solution = outcome.first_solution().cloned();
        let final_boards = outcome
            .attempts
            .iter()
            .map(|attempt| attempt.final_board.clone())
            .collect();
        let stats = &outcome.stats;

        Self {
            strategy_type: outcome.strategy_type,
            attempts: outcome.attempts.len() as u64,
            solved_attempts: outcome.attempts.iter().filter(|a| a.solved).count() as u64,
            success_steps,
            failure_steps,
            local_optima: stats.local_optima,
            retargets: stats.retargets,
            restarts: stats.restarts,
            moves_applied: stats.moves_applied,
            candidates_evaluated: stats.candidates_evaluated,
            solve_time: stats.elapsed(),
            solution,
            final_boards,
        }
    }

    pub fn success_count(&self) -> usize {
        self.success_steps.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failure_steps.len()
    }

    /// Mean step count of the successes, if there were any.
    pub fn mean_success_steps(&self) -> Option<f64> {
        mean(&self.success_steps)
    }

    /// Mean step count of the failures, if there were any.
    pub fn mean_failure_steps(&self) -> Option<f64> {
        mean(&self.failure_steps)
    }

    /// Fraction of attempts that ended solved.
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.solved_attempts as f64 / self.attempts as f64
        }
    }

    /// Returns candidate evaluations per second.
    pub fn candidates_per_second(&self) -> f64 {
        if self.solve_time.is_zero() {
            0.0
        } else {
            self.candidates_evaluated as f64 / self.solve_time.as_secs_f64()
        }
    }
}

fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: u64 = values.iter().sum();
    Some(total as f64 / values.len() as f64)
}

/// Everything one run of the controller produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub board_size: usize,
    /// Seed the run was derived from; reusing it reproduces the run.
    pub seed: u64,
    /// Board every strategy started from.
    pub initial_board: Board,
    /// One entry per configured strategy, in configuration order.
    pub results: Vec<StrategyResult>,
}

impl RunSummary {
    /// Returns the result of a strategy, if it was part of the run.
    pub fn result(&self, strategy_type: StrategyType) -> Option<&StrategyResult> {
        self.results
            .iter()
            .find(|r| r.strategy_type == strategy_type)
    }

    /// Returns true if at least one strategy solved the board.
    pub fn any_solved(&self) -> bool {
        self.results.iter().any(|r| r.solved_attempts > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenforge_solver::{AttemptOutcome, AttemptSummary, FailureReason};
    use queenforge_test::{all_same_column_board, solved_four_queens};

    fn outcome() -> StrategyOutcome {
        let mut outcome = StrategyOutcome::new(StrategyType::RandomRestart);
        outcome.record(
            0,
            AttemptOutcome::Failed {
                steps: 3,
                reason: FailureReason::LocalOptimum,
            },
        );
        outcome.record(0, AttemptOutcome::Solved { steps: 9 });
        outcome.record(
            1,
            AttemptOutcome::Failed {
                steps: 100,
                reason: FailureReason::StepLimit,
            },
        );
        outcome.attempts.push(AttemptSummary {
            attempt: 0,
            steps: 9,
            solved: true,
            final_board: solved_four_queens(),
        });
        outcome.attempts.push(AttemptSummary {
            attempt: 1,
            steps: 100,
            solved: false,
            final_board: all_same_column_board(4),
        });
        outcome.stats.local_optima = 1;
        outcome.stats.restarts = 1;
        outcome
    }

    #[test]
    fn test_from_outcome_tallies_buckets() {
        let result = StrategyResult::from_outcome(outcome());

        assert_eq!(result.attempts, 2);
        assert_eq!(result.solved_attempts, 1);
        assert_eq!(result.success_steps, vec![9]);
        assert_eq!(result.failure_steps, vec![3, 100]);
        assert_eq!(result.mean_success_steps(), Some(9.0));
        assert_eq!(result.mean_failure_steps(), Some(51.5));
        assert!((result.success_rate() - 0.5).abs() < f64::EPSILON);
        assert_eq!(result.solution, Some(solved_four_queens()));
        assert_eq!(result.restarts, 1);
    }

    #[test]
    fn test_empty_outcome() {
        let result = StrategyResult::from_outcome(StrategyOutcome::new(StrategyType::HillClimbing));

        assert_eq!(result.success_rate(), 0.0);
        assert_eq!(result.mean_success_steps(), None);
        assert_eq!(result.mean_failure_steps(), None);
        assert!(result.solution.is_none());
        assert_eq!(result.candidates_per_second(), 0.0);
    }

    #[test]
    fn test_run_summary_lookup() {
        let summary = RunSummary {
            board_size: 4,
            seed: 1,
            initial_board: all_same_column_board(4),
            results: vec![StrategyResult::from_outcome(outcome())],
        };

        assert!(summary.any_solved());
        assert!(summary.result(StrategyType::RandomRestart).is_some());
        assert!(summary.result(StrategyType::SidewaysMove).is_none());
    }
}
