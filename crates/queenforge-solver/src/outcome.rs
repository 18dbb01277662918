//! Attempt outcomes.
//!
//! Reaching a local optimum or the step cap is an expected result of local
//! search, so failures are values to be tallied rather than errors.

use queenforge_config::StrategyType;
use queenforge_core::Board;

use crate::stats::SearchStats;

/// Why an attempt (or attempt segment) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No relocation of the target queen improved the heuristic.
    LocalOptimum,
    /// The step cap was reached before a solution was found.
    StepLimit,
}

/// A single tallied result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Solved { steps: u64 },
    Failed { steps: u64, reason: FailureReason },
}

impl AttemptOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, AttemptOutcome::Solved { .. })
    }

    pub fn steps(&self) -> u64 {
        match self {
            AttemptOutcome::Solved { steps } | AttemptOutcome::Failed { steps, .. } => *steps,
        }
    }
}

/// An outcome tagged with the attempt that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRecord {
    pub attempt: u64,
    pub outcome: AttemptOutcome,
}

/// How one attempt ended.
#[derive(Debug, Clone)]
pub struct AttemptSummary {
    pub attempt: u64,
    pub steps: u64,
    pub solved: bool,
    pub final_board: Board,
}

/// Everything a strategy produced over all of its attempts.
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub strategy_type: StrategyType,
    /// Every success and failure in the order they were recorded.
    pub records: Vec<OutcomeRecord>,
    /// One entry per attempt.
    pub attempts: Vec<AttemptSummary>,
    pub stats: SearchStats,
}

impl StrategyOutcome {
    pub fn new(strategy_type: StrategyType) -> Self {
        Self {
            strategy_type,
            records: Vec::new(),
            attempts: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn record(&mut self, attempt: u64, outcome: AttemptOutcome) {
        self.records.push(OutcomeRecord { attempt, outcome });
    }

    /// Returns the step counts of every success.
    pub fn success_steps(&self) -> Vec<u64> {
        self.records
            .iter()
            .filter(|r| r.outcome.is_solved())
            .map(|r| r.outcome.steps())
            .collect()
    }

    /// Returns the step counts of every failure.
    pub fn failure_steps(&self) -> Vec<u64> {
        self.records
            .iter()
            .filter(|r| !r.outcome.is_solved())
            .map(|r| r.outcome.steps())
            .collect()
    }

    /// Returns the final board of the first solved attempt.
    pub fn first_solution(&self) -> Option<&Board> {
        self.attempts
            .iter()
            .find(|a| a.solved)
            .map(|a| &a.final_board)
    }
}
