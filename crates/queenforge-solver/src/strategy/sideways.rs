//! Hill climbing with sideways moves.

use queenforge_config::StrategyType;
use queenforge_core::Result;

use super::{retarget, Recovery, RecoveryOutcome};
use crate::scope::AttemptScope;

/// Keeps the board and switches to a different target queen.
#[derive(Debug, Clone, Default)]
pub struct SidewaysRecovery;

impl SidewaysRecovery {
    pub fn new() -> Self {
        Self
    }
}

impl Recovery for SidewaysRecovery {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::SidewaysMove
    }

    fn recover(&mut self, attempt_scope: &mut AttemptScope<'_>) -> Result<RecoveryOutcome> {
        Ok(retarget(attempt_scope))
    }
}
