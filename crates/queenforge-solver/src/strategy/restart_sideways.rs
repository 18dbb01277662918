//! Random restart combined with sideways moves.

use queenforge_config::StrategyType;
use queenforge_core::Result;

use super::{restart, retarget, Recovery, RecoveryOutcome};
use crate::scope::AttemptScope;

/// Moves sideways first, restarts once sideways moves stop paying off.
///
/// Up to `sideways_limit` consecutive local optima are answered with a new
/// target on the same board. The next one regenerates the board. Any
/// improving move resets the count.
///
/// # Example
///
/// ```
/// use queenforge_solver::RestartSidewaysRecovery;
///
/// let recovery = RestartSidewaysRecovery::new(3);
/// assert_eq!(recovery.sideways_limit(), 3);
/// assert_eq!(recovery.sideways_taken(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RestartSidewaysRecovery {
    sideways_limit: u32,
    sideways_taken: u32,
}

impl RestartSidewaysRecovery {
    pub fn new(sideways_limit: u32) -> Self {
        Self {
            sideways_limit,
            sideways_taken: 0,
        }
    }

    pub fn sideways_limit(&self) -> u32 {
        self.sideways_limit
    }

    /// Consecutive sideways moves since the last improvement or restart.
    pub fn sideways_taken(&self) -> u32 {
        self.sideways_taken
    }
}

impl Recovery for RestartSidewaysRecovery {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::RandomRestartSideways
    }

    fn recover(&mut self, attempt_scope: &mut AttemptScope<'_>) -> Result<RecoveryOutcome> {
        if self.sideways_taken < self.sideways_limit && attempt_scope.board().size() > 1 {
            self.sideways_taken += 1;
            return Ok(retarget(attempt_scope));
        }
        self.sideways_taken = 0;
        restart(attempt_scope)
    }

    fn attempt_started(&mut self) {
        self.sideways_taken = 0;
    }

    fn step_improved(&mut self) {
        self.sideways_taken = 0;
    }
}
