//! Run controller for QueenForge.
//!
//! This crate runs the configured hill-climbing variants against one shared
//! initial board, tallies successes and failures per strategy, and renders
//! the results.
//!
//! # Overview
//!
//! - [`RunController`] builds the initial board and runs every strategy on
//!   its own clone, optionally on a rayon pool
//! - [`StrategyResult`] aggregates one strategy's attempts
//! - [`TextReport`] and [`CsvExporter`] render a [`RunSummary`]
//!
//! # Example
//!
//! ```
//! use queenforge_benchmark::{CsvExporter, RunController};
//! use queenforge_config::QueensConfig;
//!
//! let config = QueensConfig::new()
//!     .with_board_size(5)
//!     .with_random_seed(42)
//!     .with_max_steps(50);
//!
//! let summary = RunController::new(config).unwrap().run().unwrap();
//! let csv = CsvExporter::to_string(&summary.results);
//! assert_eq!(csv.lines().count(), 5);
//! ```

mod report;
mod result;
mod runner;

pub use report::{CsvExporter, TextReport};
pub use result::{RunSummary, StrategyResult};
pub use runner::{RunController, RunError};
