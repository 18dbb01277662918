//! Termination conditions for attempts.

mod step_count;

use std::fmt::Debug;

use crate::scope::AttemptScope;

pub use step_count::StepCountTermination;

/// Trait for determining when an attempt must stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if the attempt should terminate.
    fn is_terminated(&self, attempt_scope: &AttemptScope<'_>) -> bool;
}
