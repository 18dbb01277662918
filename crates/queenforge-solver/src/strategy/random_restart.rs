//! Hill climbing with random restarts.

use queenforge_config::StrategyType;
use queenforge_core::Result;

use super::{restart, Recovery, RecoveryOutcome};
use crate::scope::AttemptScope;

/// Throws the board away and continues from a fresh random one.
///
/// The step budget of the attempt is not reset by a restart.
#[derive(Debug, Clone, Default)]
pub struct RandomRestartRecovery;

impl RandomRestartRecovery {
    pub fn new() -> Self {
        Self
    }
}

impl Recovery for RandomRestartRecovery {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::RandomRestart
    }

    fn recover(&mut self, attempt_scope: &mut AttemptScope<'_>) -> Result<RecoveryOutcome> {
        restart(attempt_scope)
    }
}
