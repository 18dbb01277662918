use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use queenforge_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match queenforge_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
