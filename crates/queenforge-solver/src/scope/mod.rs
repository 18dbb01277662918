//! Scope hierarchy for search execution.
//!
//! - [`SearchScope`]: one strategy run, owns the RNG and statistics
//! - [`AttemptScope`]: one attempt, owns the working board and target queen

mod attempt;
mod search;

pub use attempt::AttemptScope;
pub use search::{SearchRng, SearchScope};
