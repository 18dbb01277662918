//! Builder module for constructing search components from configuration
//!
//! This module provides the wiring between configuration types and
//! the search implementation.

use queenforge_config::{StrategyPlan, StrategyType};

use crate::strategy::{
    HillClimbingRecovery, RandomRestartRecovery, Recovery, RestartSidewaysRecovery,
    SidewaysRecovery,
};
use crate::termination::StepCountTermination;

/// Builder for constructing recoveries from configuration.
pub struct RecoveryBuilder;

impl RecoveryBuilder {
    /// Builds the recovery for a resolved strategy plan.
    pub fn build(plan: &StrategyPlan) -> Box<dyn Recovery> {
        match plan.strategy_type {
            StrategyType::HillClimbing => Box::new(HillClimbingRecovery::new()),
            StrategyType::SidewaysMove => Box::new(SidewaysRecovery::new()),
            StrategyType::RandomRestart => Box::new(RandomRestartRecovery::new()),
            StrategyType::RandomRestartSideways => {
                Box::new(RestartSidewaysRecovery::new(plan.sideways_limit))
            }
        }
    }

    /// Builds the per-attempt step cap of a plan.
    pub fn termination(plan: &StrategyPlan) -> StepCountTermination {
        StepCountTermination::new(plan.max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenforge_config::{SearchConfig, StrategyConfig};

    #[test]
    fn test_builder_selects_variant() {
        let search = SearchConfig::default();
        for strategy_type in StrategyType::ALL {
            let plan = StrategyConfig::new(strategy_type).resolve(&search);
            let recovery = RecoveryBuilder::build(&plan);
            assert_eq!(recovery.strategy_type(), strategy_type);
        }
    }

    #[test]
    fn test_builder_termination_uses_max_steps() {
        let plan = StrategyConfig::new(StrategyType::SidewaysMove)
            .with_max_steps(17)
            .resolve(&SearchConfig::default());
        assert_eq!(RecoveryBuilder::termination(&plan).limit(), 17);
    }
}
