//! Run controller.

use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use queenforge_config::{ConfigError, QueensConfig, StrategyPlan};
use queenforge_core::{Board, QueensError};
use queenforge_solver::{HillClimbingSearch, SearchRng, SearchScope};

use crate::result::{RunSummary, StrategyResult};

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Queens(#[from] QueensError),
}

/// Runs every configured strategy against the same initial board.
///
/// The controller builds one board from the configured size and seed, then
/// hands each strategy its own clone together with its own random stream.
/// Strategy `i` always draws from stream `i + 1` of the run seed, so the
/// parallel and sequential modes produce identical results.
///
/// # Example
///
/// ```
/// use queenforge_benchmark::RunController;
/// use queenforge_config::QueensConfig;
///
/// let config = QueensConfig::new().with_board_size(4).with_random_seed(7);
/// let summary = RunController::new(config).unwrap().run().unwrap();
///
/// assert_eq!(summary.seed, 7);
/// assert_eq!(summary.results.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RunController {
    config: QueensConfig,
}

impl RunController {
    /// Creates a controller for a validated configuration.
    pub fn new(config: QueensConfig) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QueensConfig {
        &self.config
    }

    /// Runs every strategy and tallies the results.
    pub fn run(&self) -> Result<RunSummary, RunError> {
        let seed = self
            .config
            .random_seed
            .unwrap_or_else(|| rand::rng().random());
        let board_size = self.config.board_size;
        let mut board_rng = SearchRng::seed_from_u64(seed);
        let initial_board = Board::random(board_size, &mut board_rng)?;
        let plans = self.config.strategy_plans();

        info!(
            event = "run_start",
            board_size,
            seed,
            strategies = plans.len(),
            parallel = self.config.parallel,
            heuristic = initial_board.heuristic(),
        );

        let results = if self.config.parallel {
            plans
                .par_iter()
                .enumerate()
                .map(|(index, plan)| run_strategy(plan, index, seed, &initial_board))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            plans
                .iter()
                .enumerate()
                .map(|(index, plan)| run_strategy(plan, index, seed, &initial_board))
                .collect::<Result<Vec<_>, _>>()?
        };

        let summary = RunSummary {
            board_size,
            seed,
            initial_board,
            results,
        };

        info!(
            event = "run_end",
            board_size,
            seed,
            solved = summary.any_solved(),
        );

        Ok(summary)
    }
}

fn run_strategy(
    plan: &StrategyPlan,
    index: usize,
    seed: u64,
    initial_board: &Board,
) -> Result<StrategyResult, RunError> {
    let mut rng = SearchRng::seed_from_u64(seed);
    rng.set_stream(index as u64 + 1);
    let mut scope = SearchScope::with_rng(rng);

    let board = initial_board.clone();
    let mut search = HillClimbingSearch::from_plan(plan);
    let outcome = search.run(&board, &mut scope)?;
    Ok(StrategyResult::from_outcome(outcome))
}
