//! CLI error types.

use std::io;

use thiserror::Error;

use queenforge_benchmark::RunError;
use queenforge_config::ConfigError;
use queenforge_core::QueensError;

/// Exit code for usage errors.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for everything else.
pub const EXIT_FAILURE: u8 = 1;

/// Errors reported by the `queenforge` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Queens(#[from] QueensError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("expected either no arguments or <N> <ATTEMPT_LIMIT>, got {0} argument(s)")]
    MalformedArguments(usize),

    #[error("{argument} must be an integer, got '{value}'")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MalformedArguments(_)
            | CliError::InvalidNumber { .. }
            | CliError::Queens(QueensError::InvalidSize(_)) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::MalformedArguments(1).exit_code(), EXIT_USAGE);
        assert_eq!(
            CliError::Queens(QueensError::InvalidSize(-3)).exit_code(),
            EXIT_USAGE
        );
        assert_eq!(
            CliError::Config(ConfigError::Invalid("x".to_string())).exit_code(),
            EXIT_FAILURE
        );
    }

    #[test]
    fn test_malformed_message() {
        let message = CliError::MalformedArguments(3).to_string();
        assert!(message.contains("<N> <ATTEMPT_LIMIT>"));
        assert!(message.contains("got 3"));
    }
}
