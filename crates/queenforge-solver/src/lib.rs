//! QueenForge Solver Engine
//!
//! This crate provides the hill-climbing search over a [`Board`]:
//! - Neighbor scanning for the best relocation of the target queen
//! - The move applier that commits an improving candidate
//! - Four recovery strategies for local optima
//! - Termination conditions, scopes and statistics
//! - Configuration wiring (builder module)
//!
//! # Example
//!
//! ```
//! use queenforge_config::{StrategyConfig, StrategyType, SearchConfig};
//! use queenforge_core::Board;
//! use queenforge_solver::{HillClimbingSearch, SearchScope};
//!
//! let plan = StrategyConfig::new(StrategyType::RandomRestart).resolve(&SearchConfig::default());
//! let mut search = HillClimbingSearch::from_plan(&plan);
//! let mut scope = SearchScope::with_seed(42);
//!
//! let board = Board::from_columns(&[0, 0, 0, 0]).unwrap();
//! let outcome = search.run(&board, &mut scope).unwrap();
//!
//! assert_eq!(outcome.attempts.len(), 10);
//! ```
//!
//! [`Board`]: queenforge_core::Board

pub mod builder;
pub mod moves;
pub mod neighbor;
pub mod outcome;
pub mod scope;
pub mod search;
pub mod stats;
pub mod strategy;
pub mod termination;

pub use builder::RecoveryBuilder;
pub use moves::move_to_lower_heuristic;
pub use neighbor::{scan_neighbors, CandidateMove, HeuristicBoard, NeighborScan, ScanOutcome};
pub use outcome::{AttemptOutcome, AttemptSummary, FailureReason, OutcomeRecord, StrategyOutcome};
pub use scope::{AttemptScope, SearchRng, SearchScope};
pub use search::HillClimbingSearch;
pub use stats::SearchStats;
pub use strategy::{
    HillClimbingRecovery, RandomRestartRecovery, Recovery, RecoveryOutcome,
    RestartSidewaysRecovery, SidewaysRecovery,
};
pub use termination::{StepCountTermination, Termination};
