//! Step count termination.

use super::Termination;
use crate::scope::AttemptScope;

/// Terminates an attempt after a step count.
///
/// # Example
///
/// ```
/// use queenforge_solver::termination::StepCountTermination;
///
/// // Stop every attempt after 100 steps
/// let term = StepCountTermination::new(100);
/// assert_eq!(term.limit(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, attempt_scope: &AttemptScope<'_>) -> bool {
        attempt_scope.step_count() >= self.limit
    }
}
