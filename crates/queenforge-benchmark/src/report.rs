//! Report generation for run results.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::{RunSummary, StrategyResult};

/// CSV exporter for run results.
///
/// One row per strategy.
///
/// # Example
///
/// ```
/// use queenforge_benchmark::CsvExporter;
///
/// let csv = CsvExporter::to_string(&[]);
/// assert!(csv.starts_with("strategy,attempts,solved_attempts"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    const HEADER: &'static str = "strategy,attempts,solved_attempts,success_rate,successes,\
        mean_success_steps,failures,mean_failure_steps,local_optima,retargets,restarts,\
        moves_applied,candidates_evaluated,solve_time_ms";

    /// Exports strategy results to a CSV string.
    pub fn to_string(results: &[StrategyResult]) -> String {
        CsvTable(results).to_string()
    }

    /// Exports strategy results to a CSV file.
    pub fn to_file(results: &[StrategyResult], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes strategy results as CSV to a writer.
    pub fn write<W: Write>(results: &[StrategyResult], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

struct CsvTable<'a>(&'a [StrategyResult]);

impl fmt::Display for CsvTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", CsvExporter::HEADER)?;
        for result in self.0 {
            writeln!(
                f,
                "{},{},{},{:.4},{},{},{},{},{},{},{},{},{},{}",
                result.strategy_type,
                result.attempts,
                result.solved_attempts,
                result.success_rate(),
                result.success_count(),
                OptionalMean(result.mean_success_steps(), ""),
                result.failure_count(),
                OptionalMean(result.mean_failure_steps(), ""),
                result.local_optima,
                result.retargets,
                result.restarts,
                result.moves_applied,
                result.candidates_evaluated,
                result.solve_time.as_millis(),
            )?;
        }
        Ok(())
    }
}

/// Human-readable summary of a whole run.
///
/// # Example
///
/// ```
/// use queenforge_benchmark::{RunController, TextReport};
/// use queenforge_config::QueensConfig;
///
/// let config = QueensConfig::new().with_board_size(4).with_random_seed(3);
/// let summary = RunController::new(config).unwrap().run().unwrap();
///
/// let report = TextReport::new(&summary).to_string();
/// assert!(report.contains("Initial board"));
/// assert!(report.contains("== hcwrrwsm:"));
/// ```
pub struct TextReport<'a> {
    summary: &'a RunSummary,
    show_solutions: bool,
}

impl<'a> TextReport<'a> {
    pub fn new(summary: &'a RunSummary) -> Self {
        Self {
            summary,
            show_solutions: true,
        }
    }

    /// Includes or omits the first solution board of every strategy.
    pub fn with_solutions(mut self, show_solutions: bool) -> Self {
        self.show_solutions = show_solutions;
        self
    }

    /// Writes the report to a writer.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    fn write_strategy(&self, f: &mut fmt::Formatter<'_>, result: &StrategyResult) -> fmt::Result {
        writeln!(
            f,
            "== {}: {} ==",
            result.strategy_type,
            result.strategy_type.display_name()
        )?;
        writeln!(
            f,
            "Attempts: {} (solved {}, success rate {:.2}%)",
            result.attempts,
            result.solved_attempts,
            result.success_rate() * 100.0
        )?;
        writeln!(
            f,
            "Successes: {} (mean steps {})",
            result.success_count(),
            OptionalMean(result.mean_success_steps(), "n/a")
        )?;
        writeln!(
            f,
            "Failures: {} (mean steps {})",
            result.failure_count(),
            OptionalMean(result.mean_failure_steps(), "n/a")
        )?;
        writeln!(
            f,
            "Local optima: {} | Sideways moves: {} | Restarts: {}",
            result.local_optima, result.retargets, result.restarts
        )?;
        writeln!(
            f,
            "Moves: {} | Candidates evaluated: {} | Time: {:.2} ms",
            result.moves_applied,
            result.candidates_evaluated,
            result.solve_time.as_secs_f64() * 1000.0
        )?;

        if self.show_solutions {
            if let Some(solution) = &result.solution {
                writeln!(f, "Solution:")?;
                write!(f, "{solution}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(
            f,
            "QueenForge run: N = {}, seed = {}",
            summary.board_size, summary.seed
        )?;
        writeln!(f)?;
        writeln!(f, "Initial board:")?;
        write!(f, "{}", summary.initial_board)?;

        for result in &summary.results {
            self.write_strategy(f, result)?;
        }
        Ok(())
    }
}

struct OptionalMean(Option<f64>, &'static str);

impl fmt::Display for OptionalMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(mean) => write!(f, "{mean:.2}"),
            None => f.write_str(self.1),
        }
    }
}
