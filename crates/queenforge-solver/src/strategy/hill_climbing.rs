//! Plain hill climbing.

use queenforge_config::StrategyType;
use queenforge_core::Result;

use super::{Recovery, RecoveryOutcome};
use crate::scope::AttemptScope;

/// Plain hill climbing: a local optimum ends the attempt.
///
/// # Example
///
/// ```
/// use queenforge_config::StrategyType;
/// use queenforge_solver::{HillClimbingRecovery, Recovery};
///
/// let recovery = HillClimbingRecovery::new();
/// assert_eq!(recovery.strategy_type(), StrategyType::HillClimbing);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbingRecovery;

impl HillClimbingRecovery {
    pub fn new() -> Self {
        Self
    }
}

impl Recovery for HillClimbingRecovery {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::HillClimbing
    }

    fn recover(&mut self, _attempt_scope: &mut AttemptScope<'_>) -> Result<RecoveryOutcome> {
        Ok(RecoveryOutcome::Stop)
    }
}
