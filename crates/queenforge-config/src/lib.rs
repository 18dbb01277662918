//! Configuration system for QueenForge.
//!
//! Load search configuration from TOML or YAML files to control the board
//! size, step and attempt budgets, and which hill-climbing variants run,
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use queenforge_config::{QueensConfig, StrategyType};
//!
//! let config = QueensConfig::from_toml_str(r#"
//!     board_size = 6
//!     random_seed = 42
//!
//!     [search]
//!     max_steps = 50
//!     attempt_limit = 20
//!
//!     [[strategies]]
//!     type = "hill_climbing"
//!
//!     [[strategies]]
//!     type = "random_restart"
//!     attempt_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 6);
//! let plans = config.strategy_plans();
//! assert_eq!(plans.len(), 2);
//! assert_eq!(plans[0].strategy_type, StrategyType::HillClimbing);
//! assert_eq!(plans[0].attempt_limit, 1);
//! assert_eq!(plans[1].attempt_limit, 5);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use queenforge_config::QueensConfig;
//!
//! let config = QueensConfig::load("queens.toml").unwrap_or_default();
//! assert_eq!(config.strategy_plans().len(), 4);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of queens.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default step cap per attempt.
pub const DEFAULT_MAX_STEPS: u64 = 100;

/// Default number of attempts for the recovering variants.
pub const DEFAULT_ATTEMPT_LIMIT: u64 = 10;

/// Default number of consecutive sideways re-targets before a restart.
pub const DEFAULT_SIDEWAYS_LIMIT: u32 = 3;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level search configuration.
///
/// Immutable once handed to the run controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QueensConfig {
    /// Number of queens (and rows, and columns).
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Run strategies on a thread pool instead of one after another.
    #[serde(default)]
    pub parallel: bool,

    /// Budgets shared by every strategy unless overridden.
    #[serde(default)]
    pub search: SearchConfig,

    /// Strategies to run. Empty means all four, in canonical order.
    #[serde(default)]
    pub strategies: Vec<StrategyConfig>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            random_seed: None,
            parallel: false,
            search: SearchConfig::default(),
            strategies: Vec::new(),
        }
    }
}

impl QueensConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the number of queens.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the default attempt limit.
    pub fn with_attempt_limit(mut self, attempt_limit: u64) -> Self {
        self.search.attempt_limit = attempt_limit;
        self
    }

    /// Sets the default step cap.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.search.max_steps = max_steps;
        self
    }

    /// Enables or disables running strategies in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Adds a strategy configuration.
    pub fn with_strategy(mut self, strategy: StrategyConfig) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Checks values that would make the search meaningless.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenforge_config::QueensConfig;
    ///
    /// assert!(QueensConfig::new().validate().is_ok());
    /// assert!(QueensConfig::new().with_board_size(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Invalid(
                "board_size must be greater than 0".to_string(),
            ));
        }
        for plan in self.strategy_plans() {
            if plan.strategy_type == StrategyType::RandomRestartSideways
                && plan.sideways_limit == 0
            {
                return Err(ConfigError::Invalid(format!(
                    "sideways_limit for {} must be greater than 0",
                    plan.strategy_type
                )));
            }
        }
        Ok(())
    }

    /// Resolves every configured strategy against the shared search budgets.
    pub fn strategy_plans(&self) -> Vec<StrategyPlan> {
        if self.strategies.is_empty() {
            return StrategyType::ALL
                .iter()
                .map(|&strategy_type| StrategyConfig::new(strategy_type).resolve(&self.search))
                .collect();
        }
        self.strategies
            .iter()
            .map(|strategy| strategy.resolve(&self.search))
            .collect()
    }
}

/// Budgets shared by all strategies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum steps per attempt.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,

    /// Number of independent attempts for the recovering variants.
    #[serde(default = "default_attempt_limit")]
    pub attempt_limit: u64,

    /// Consecutive sideways re-targets before the combined variant restarts.
    #[serde(default = "default_sideways_limit")]
    pub sideways_limit: u32,
}

fn default_max_steps() -> u64 {
    DEFAULT_MAX_STEPS
}

fn default_attempt_limit() -> u64 {
    DEFAULT_ATTEMPT_LIMIT
}

fn default_sideways_limit() -> u32 {
    DEFAULT_SIDEWAYS_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            sideways_limit: DEFAULT_SIDEWAYS_LIMIT,
        }
    }
}

/// Per-strategy configuration with optional overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StrategyConfig {
    /// Which hill-climbing variant to run.
    #[serde(rename = "type")]
    pub strategy_type: StrategyType,

    /// Overrides the attempt limit for this strategy.
    #[serde(default)]
    pub attempt_limit: Option<u64>,

    /// Overrides the step cap for this strategy.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Overrides the sideways limit for this strategy.
    #[serde(default)]
    pub sideways_limit: Option<u32>,
}

impl StrategyConfig {
    pub fn new(strategy_type: StrategyType) -> Self {
        Self {
            strategy_type,
            attempt_limit: None,
            max_steps: None,
            sideways_limit: None,
        }
    }

    pub fn with_attempt_limit(mut self, attempt_limit: u64) -> Self {
        self.attempt_limit = Some(attempt_limit);
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_sideways_limit(mut self, sideways_limit: u32) -> Self {
        self.sideways_limit = Some(sideways_limit);
        self
    }

    /// Fills unset fields from the shared budgets.
    ///
    /// Plain hill climbing defaults to a single attempt; the other variants
    /// default to the shared attempt limit.
    pub fn resolve(&self, search: &SearchConfig) -> StrategyPlan {
        let default_attempts = match self.strategy_type {
            StrategyType::HillClimbing => 1,
            _ => search.attempt_limit,
        };
        StrategyPlan {
            strategy_type: self.strategy_type,
            max_steps: self.max_steps.unwrap_or(search.max_steps),
            attempt_limit: self.attempt_limit.unwrap_or(default_attempts),
            sideways_limit: self.sideways_limit.unwrap_or(search.sideways_limit),
        }
    }
}

/// A strategy with every budget resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyPlan {
    pub strategy_type: StrategyType,
    pub max_steps: u64,
    pub attempt_limit: u64,
    pub sideways_limit: u32,
}

/// The four hill-climbing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Stop at the first local optimum.
    #[serde(alias = "hc")]
    HillClimbing,

    /// Pick a different target queen at a local optimum.
    #[serde(alias = "hcwsm")]
    SidewaysMove,

    /// Start over from a new random board at a local optimum.
    #[serde(alias = "hcwrr")]
    RandomRestart,

    /// Move sideways first, restart once sideways moves are exhausted.
    #[serde(alias = "hcwrrwsm")]
    RandomRestartSideways,
}

impl StrategyType {
    /// All variants in canonical order.
    pub const ALL: [StrategyType; 4] = [
        StrategyType::HillClimbing,
        StrategyType::SidewaysMove,
        StrategyType::RandomRestart,
        StrategyType::RandomRestartSideways,
    ];

    /// Short identifier used in reports and on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            StrategyType::HillClimbing => "hc",
            StrategyType::SidewaysMove => "hcwsm",
            StrategyType::RandomRestart => "hcwrr",
            StrategyType::RandomRestartSideways => "hcwrrwsm",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyType::HillClimbing => "Hill Climbing",
            StrategyType::SidewaysMove => "Hill Climbing with Sideways Moves",
            StrategyType::RandomRestart => "Hill Climbing with Random Restart",
            StrategyType::RandomRestartSideways => {
                "Hill Climbing with Random Restart and Sideways Moves"
            }
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for StrategyType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hc" | "hill_climbing" => Ok(StrategyType::HillClimbing),
            "hcwsm" | "sideways_move" => Ok(StrategyType::SidewaysMove),
            "hcwrr" | "random_restart" => Ok(StrategyType::RandomRestart),
            "hcwrrwsm" | "random_restart_sideways" => Ok(StrategyType::RandomRestartSideways),
            other => Err(ConfigError::Invalid(format!("unknown strategy: {other}"))),
        }
    }
}
