//! Recovery strategies for local optima.
//!
//! The four hill-climbing variants share one search loop and differ only in
//! what they do when no relocation of the target queen improves the board.

mod hill_climbing;
mod random_restart;
mod restart_sideways;
mod sideways;

use std::fmt::{self, Debug};

use queenforge_config::StrategyType;
use queenforge_core::Result;

use crate::scope::AttemptScope;

pub use hill_climbing::HillClimbingRecovery;
pub use random_restart::RandomRestartRecovery;
pub use restart_sideways::RestartSidewaysRecovery;
pub use sideways::SidewaysRecovery;

/// What a recovery did with the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// The attempt is over.
    Stop,
    /// A different target queen was chosen on the same board.
    Retargeted { previous: usize, target: usize },
    /// The board was regenerated.
    Restarted { target: usize, heuristic: u64 },
}

impl RecoveryOutcome {
    pub fn is_stop(&self) -> bool {
        matches!(self, RecoveryOutcome::Stop)
    }
}

impl fmt::Display for RecoveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryOutcome::Stop => f.write_str("stop"),
            RecoveryOutcome::Retargeted { previous, target } => {
                write!(f, "sideways: target {previous} -> {target}")
            }
            RecoveryOutcome::Restarted { target, heuristic } => {
                write!(f, "restart: target {target}, heuristic {heuristic}")
            }
        }
    }
}

/// Trait for reacting to a local optimum.
pub trait Recovery: Send + Debug {
    /// Returns the variant this recovery implements.
    fn strategy_type(&self) -> StrategyType;

    /// Called when the search reaches a local optimum.
    fn recover(&mut self, attempt_scope: &mut AttemptScope<'_>) -> Result<RecoveryOutcome>;

    /// Called when an attempt starts.
    fn attempt_started(&mut self) {}

    /// Called after an improving move was committed.
    fn step_improved(&mut self) {}
}

fn retarget(attempt_scope: &mut AttemptScope<'_>) -> RecoveryOutcome {
    let previous = attempt_scope.retarget();
    RecoveryOutcome::Retargeted {
        previous,
        target: attempt_scope.target(),
    }
}

fn restart(attempt_scope: &mut AttemptScope<'_>) -> Result<RecoveryOutcome> {
    attempt_scope.restart()?;
    Ok(RecoveryOutcome::Restarted {
        target: attempt_scope.target(),
        heuristic: attempt_scope.board().heuristic(),
    })
}

#[cfg(test)]
mod tests;
