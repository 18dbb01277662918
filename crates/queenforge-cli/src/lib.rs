//! Command-line front end for QueenForge.
//!
//! `queenforge` with no arguments asks for the board size; `queenforge <N>
//! <ATTEMPT_LIMIT>` runs non-interactively. Any other positional count is
//! rejected.

mod args;
mod error;
mod prompt;

use std::io::{self, Write};

use queenforge_benchmark::{CsvExporter, RunController, TextReport};
use queenforge_console::Verbosity;

pub use args::{Cli, Mode};
pub use error::{CliError, EXIT_FAILURE, EXIT_USAGE};
pub use prompt::prompt_board_size;

/// Runs the whole program for parsed arguments.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = cli.mode()?;
    // CSV on stdout must not be interleaved with progress output.
    let quiet = cli.quiet || matches!(cli.csv, Some(None));
    queenforge_console::init(Verbosity::from_flags(cli.verbose, quiet));

    let (board_size, attempt_limit) = match mode {
        Mode::Batch {
            board_size,
            attempt_limit,
        } => (Some(board_size), Some(attempt_limit)),
        Mode::Interactive if cli.needs_prompt(mode) => (Some(prompt_board_size()?), None),
        Mode::Interactive => (None, None),
    };

    let config = cli.build_config(board_size, attempt_limit)?;
    let summary = RunController::new(config)?.run()?;

    let mut stdout = io::stdout().lock();
    match &cli.csv {
        Some(None) => CsvExporter::write(&summary.results, &mut stdout)?,
        Some(Some(path)) => {
            CsvExporter::to_file(&summary.results, path)?;
            TextReport::new(&summary).write(&mut stdout)?;
        }
        None => TextReport::new(&summary).write(&mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}
