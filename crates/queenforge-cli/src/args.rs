//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use queenforge_config::QueensConfig;
use queenforge_core::board_size;

use crate::error::CliError;

/// Solve N-Queens with four hill-climbing variants and compare them.
#[derive(Debug, Parser)]
#[command(name = "queenforge", version, about)]
pub struct Cli {
    /// Board size and attempt limit, given together as `<N> <ATTEMPT_LIMIT>`.
    /// Without them the board size is asked for interactively.
    #[arg(value_name = "N ATTEMPT_LIMIT", allow_negative_numbers = true)]
    pub positional: Vec<String>,

    /// Configuration file (TOML, or YAML for .yaml/.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Step cap for every attempt
    #[arg(long, value_name = "STEPS")]
    pub max_steps: Option<u64>,

    /// Run the strategies on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Print results as CSV, or write them to FILE
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub csv: Option<Option<PathBuf>>,

    /// More output (-v steps, -vv heuristic boards)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print the final report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// How the board size is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ask for N on the terminal.
    Interactive,
    /// Everything came from the command line.
    Batch { board_size: usize, attempt_limit: u64 },
}

impl Cli {
    /// Interprets the positional arguments.
    ///
    /// # Errors
    ///
    /// Fails for any positional count other than 0 or 2, for non-numeric
    /// values, and for N ≤ 0.
    pub fn mode(&self) -> Result<Mode, CliError> {
        match self.positional.as_slice() {
            [] => Ok(Mode::Interactive),
            [n, attempts] => {
                let n = parse_number::<i64>("N", n)?;
                let attempt_limit = parse_number::<u64>("ATTEMPT_LIMIT", attempts)?;
                Ok(Mode::Batch {
                    board_size: board_size(n)?,
                    attempt_limit,
                })
            }
            other => Err(CliError::MalformedArguments(other.len())),
        }
    }

    /// Returns true if the board size has to be asked for.
    ///
    /// A configuration file supplies its own board size, so no prompt is
    /// shown when one is given.
    pub fn needs_prompt(&self, mode: Mode) -> bool {
        mode == Mode::Interactive && self.config.is_none()
    }

    /// Loads the configuration file, if any, and overlays the command line.
    pub fn build_config(
        &self,
        board_size: Option<usize>,
        attempt_limit: Option<u64>,
    ) -> Result<QueensConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => QueensConfig::load(path)?,
            None => QueensConfig::new(),
        };

        if let Some(board_size) = board_size {
            config = config.with_board_size(board_size);
        }
        if let Some(attempt_limit) = attempt_limit {
            config = config.with_attempt_limit(attempt_limit);
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config = config.with_max_steps(max_steps);
        }
        if self.parallel {
            config = config.with_parallel(true);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(argument: &'static str, value: &str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenforge_core::QueensError;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("queenforge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_positionals_is_interactive() {
        let cli = parse(&[]);
        assert_eq!(cli.mode().unwrap(), Mode::Interactive);
        assert!(cli.needs_prompt(Mode::Interactive));
    }

    #[test]
    fn test_config_file_skips_prompt() {
        let cli = parse(&["--config", "queens.toml"]);
        assert!(!cli.needs_prompt(cli.mode().unwrap()));
    }

    #[test]
    fn test_two_positionals_is_batch() {
        let cli = parse(&["8", "25"]);
        assert_eq!(
            cli.mode().unwrap(),
            Mode::Batch {
                board_size: 8,
                attempt_limit: 25
            }
        );
    }

    #[test]
    fn test_wrong_positional_count_is_malformed() {
        for args in [&["8"][..], &["8", "2", "3"][..]] {
            let err = parse(args).mode().unwrap_err();
            assert!(matches!(err, CliError::MalformedArguments(n) if n == args.len()));
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_non_positive_size_is_invalid() {
        for n in ["0", "-4"] {
            let err = parse(&[n, "10"]).mode().unwrap_err();
            assert!(matches!(err, CliError::Queens(QueensError::InvalidSize(_))));
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = parse(&["eight", "10"]).mode().unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber { argument: "N", .. }));
    }

    #[test]
    fn test_flags_overlay_defaults() {
        let cli = parse(&["--seed", "9", "--max-steps", "40", "--parallel", "6", "3"]);
        let config = cli.build_config(Some(6), Some(3)).unwrap();

        assert_eq!(config.board_size, 6);
        assert_eq!(config.random_seed, Some(9));
        assert_eq!(config.search.max_steps, 40);
        assert_eq!(config.search.attempt_limit, 3);
        assert!(config.parallel);
    }

    #[test]
    fn test_csv_flag_with_and_without_path() {
        assert_eq!(parse(&["--csv"]).csv, Some(None));
        assert_eq!(
            parse(&["--csv", "out.csv"]).csv,
            Some(Some(PathBuf::from("out.csv")))
        );
        assert_eq!(parse(&[]).csv, None);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
        assert!(Cli::try_parse_from(["queenforge", "-v", "--quiet"]).is_err());
    }

    #[test]
    fn test_config_file_is_overlaid() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
board_size = 12
random_seed = 5

[search]
max_steps = 70
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = parse(&["--config", &path, "--max-steps", "30"]);
        let config = cli.build_config(None, None).unwrap();

        assert_eq!(config.board_size, 12);
        assert_eq!(config.random_seed, Some(5));
        assert_eq!(config.search.max_steps, 30);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["--config", "/nonexistent/queens.toml"]);
        assert!(matches!(
            cli.build_config(None, None),
            Err(CliError::Config(_))
        ));
    }
}
