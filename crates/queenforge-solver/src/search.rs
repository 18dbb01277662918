//! Hill-climbing search loop.
//!
//! Every variant runs the same loop. Each step scans the neighborhood of
//! the target queen, then either commits the improving move or hands the
//! local optimum to the variant's [`Recovery`].

use tracing::{debug, info, trace};

use queenforge_config::StrategyPlan;
use queenforge_core::{Board, Result};

use crate::builder::RecoveryBuilder;
use crate::moves::move_to_lower_heuristic;
use crate::neighbor::{scan_neighbors, ScanOutcome};
use crate::outcome::{AttemptOutcome, AttemptSummary, FailureReason, StrategyOutcome};
use crate::scope::{AttemptScope, SearchScope};
use crate::strategy::{Recovery, RecoveryOutcome};
use crate::termination::{StepCountTermination, Termination};

/// Runs a fixed number of independent attempts of one hill-climbing variant.
///
/// Every attempt starts from its own copy of the initial board. Successes
/// and failures are tallied in the returned [`StrategyOutcome`].
#[derive(Debug)]
pub struct HillClimbingSearch {
    recovery: Box<dyn Recovery>,
    termination: StepCountTermination,
    attempt_limit: u64,
}

impl HillClimbingSearch {
    pub fn new(recovery: Box<dyn Recovery>, max_steps: u64, attempt_limit: u64) -> Self {
        Self {
            recovery,
            termination: StepCountTermination::new(max_steps),
            attempt_limit,
        }
    }

    /// Creates the search for a resolved strategy plan.
    pub fn from_plan(plan: &StrategyPlan) -> Self {
        Self {
            recovery: RecoveryBuilder::build(plan),
            termination: RecoveryBuilder::termination(plan),
            attempt_limit: plan.attempt_limit,
        }
    }

    pub fn attempt_limit(&self) -> u64 {
        self.attempt_limit
    }

    /// Runs every attempt against a copy of `initial`.
    ///
    /// # Errors
    ///
    /// Only board invariant violations surface as errors; local optima and
    /// exhausted step budgets are recorded as failures.
    pub fn run(&mut self, initial: &Board, scope: &mut SearchScope) -> Result<StrategyOutcome> {
        let strategy = self.recovery.strategy_type();
        let mut outcome = StrategyOutcome::new(strategy);
        scope.start_search();

        info!(
            event = "strategy_start",
            strategy = %strategy,
            name = strategy.display_name(),
            board_size = initial.size(),
            attempts = self.attempt_limit,
            max_steps = self.termination.limit(),
        );

        for attempt in 0..self.attempt_limit {
            let summary = self.run_attempt(initial.clone(), attempt, scope, &mut outcome)?;
            outcome.attempts.push(summary);
        }

        outcome.stats = scope.finish_search();

        info!(
            event = "strategy_end",
            strategy = %strategy,
            successes = outcome.success_steps().len(),
            failures = outcome.failure_steps().len(),
            steps = outcome.stats.step_count,
            duration_ms = outcome.stats.elapsed().as_millis() as u64,
        );

        Ok(outcome)
    }

    fn run_attempt(
        &mut self,
        board: Board,
        attempt: u64,
        scope: &mut SearchScope,
        outcome: &mut StrategyOutcome,
    ) -> Result<AttemptSummary> {
        let strategy = self.recovery.strategy_type();
        let mut attempt_scope = AttemptScope::new(scope, board, attempt);
        self.recovery.attempt_started();

        info!(
            event = "attempt_start",
            strategy = %strategy,
            attempt,
            target = attempt_scope.target(),
            heuristic = attempt_scope.board().heuristic(),
        );
        debug!(event = "board", attempt, board = %attempt_scope.board());

        let solved = loop {
            if self.termination.is_terminated(&attempt_scope) {
                outcome.record(
                    attempt,
                    AttemptOutcome::Failed {
                        steps: attempt_scope.step_count(),
                        reason: FailureReason::StepLimit,
                    },
                );
                break false;
            }

            let target = attempt_scope.target();
            let board = attempt_scope.board();
            let scan = scan_neighbors(board, target, board.heuristic())?;
            attempt_scope.stats_mut().record_scan(scan.evaluated);

            if let Some(heuristic_board) = &scan.heuristic_board {
                trace!(
                    event = "heuristic_board",
                    attempt,
                    target,
                    board = %heuristic_board,
                );
            }

            match scan.outcome {
                ScanOutcome::Solved => {
                    outcome.record(
                        attempt,
                        AttemptOutcome::Solved {
                            steps: attempt_scope.step_count(),
                        },
                    );
                    break true;
                }
                ScanOutcome::Improved(candidate) => {
                    let search_continues =
                        move_to_lower_heuristic(attempt_scope.board_mut(), &candidate)?;
                    attempt_scope.stats_mut().record_move();
                    self.recovery.step_improved();
                    let step = attempt_scope.increment_step_count();

                    debug!(
                        event = "step",
                        attempt,
                        step,
                        queen = candidate.queen,
                        destination = %candidate.destination,
                        heuristic = candidate.heuristic,
                    );

                    if !search_continues {
                        outcome.record(attempt, AttemptOutcome::Solved { steps: step });
                        break true;
                    }
                }
                ScanOutcome::LocalOptimum => {
                    attempt_scope.stats_mut().record_local_optimum();
                    outcome.record(
                        attempt,
                        AttemptOutcome::Failed {
                            steps: attempt_scope.step_count(),
                            reason: FailureReason::LocalOptimum,
                        },
                    );

                    let recovery = self.recovery.recover(&mut attempt_scope)?;
                    let step = attempt_scope.increment_step_count();
                    debug!(
                        event = "local_optimum",
                        attempt,
                        step,
                        target,
                        heuristic = attempt_scope.board().heuristic(),
                        recovery = %recovery,
                    );

                    if recovery.is_stop() {
                        break false;
                    }
                    if let RecoveryOutcome::Restarted { .. } = recovery {
                        debug!(event = "board", attempt, board = %attempt_scope.board());
                    }
                }
            }
        };

        let steps = attempt_scope.step_count();
        let final_board = attempt_scope.into_board();

        info!(
            event = "attempt_end",
            strategy = %strategy,
            attempt,
            solved,
            steps,
            heuristic = final_board.heuristic(),
        );

        Ok(AttemptSummary {
            attempt,
            steps,
            solved,
            final_board,
        })
    }
}
