//! Colorful console output for search progress.
//!
//! Provides a custom `tracing` layer that formats QueenForge events with
//! colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (run, strategy and attempt start/end)
//! - **DEBUG**: Every step, local optimum and board snapshot
//! - **TRACE**: Heuristic board of every neighbor scan

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How much search detail reaches the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Warnings only, no banner.
    Quiet,
    /// Lifecycle events.
    #[default]
    Normal,
    /// Every step.
    Debug,
    /// Every step plus heuristic boards.
    Trace,
}

impl Verbosity {
    /// Maps `-v` occurrences and `--quiet` to a verbosity.
    ///
    /// ```
    /// use queenforge_console::Verbosity;
    ///
    /// assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
    /// assert_eq!(Verbosity::from_flags(2, false), Verbosity::Trace);
    /// assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
    /// ```
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// Filter directives used when `RUST_LOG` is not set.
    pub fn directives(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "warn,queenforge_solver=info,queenforge_benchmark=info",
            Verbosity::Debug => "warn,queenforge_solver=debug,queenforge_benchmark=debug",
            Verbosity::Trace => "warn,queenforge_solver=trace,queenforge_benchmark=trace",
        }
    }
}

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the QueenForge banner (unless quiet) and sets up tracing.
/// `RUST_LOG` overrides the verbosity-derived filter.
pub fn init(verbosity: Verbosity) {
    INIT.get_or_init(|| {
        if verbosity > Verbosity::Quiet {
            print_banner();
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(QueensConsoleLayer)
            .try_init();
    });
}

// Marks the start of a run for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since run start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ___                        _____
 / _ \ _   _  ___  ___ _ __ |  ___|__  _ __ __ _  ___
| | | | | | |/ _ \/ _ \ '_ \| |_ / _ \| '__/ _` |/ _ \
| |_| | |_| |  __/  __/ | | |  _| (_) | | | (_| |  __/
 \__\_\\__,_|\___|\___|_| |_|_|  \___/|_|  \__, |\___|
                                           |___/
"#;

    let version_line = format!("                 v{} - N-Queens Hill Climbing\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct QueensConsoleLayer;

impl<S: Subscriber> Layer<S> for QueensConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("queenforge_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    name: Option<String>,
    destination: Option<String>,
    board: Option<String>,
    recovery: Option<String>,
    board_size: Option<u64>,
    seed: Option<u64>,
    strategies: Option<u64>,
    attempts: Option<u64>,
    max_steps: Option<u64>,
    attempt: Option<u64>,
    target: Option<u64>,
    heuristic: Option<u64>,
    step: Option<u64>,
    steps: Option<u64>,
    queen: Option<u64>,
    successes: Option<u64>,
    failures: Option<u64>,
    duration_ms: Option<u64>,
    solved: Option<bool>,
    parallel: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "strategy" => self.strategy = Some(value),
            "name" => self.name = Some(value),
            "destination" => self.destination = Some(value),
            "board" => self.board = Some(value),
            "recovery" => self.recovery = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "board_size" => self.board_size = Some(value),
            "seed" => self.seed = Some(value),
            "strategies" => self.strategies = Some(value),
            "attempts" => self.attempts = Some(value),
            "max_steps" => self.max_steps = Some(value),
            "attempt" => self.attempt = Some(value),
            "target" => self.target = Some(value),
            "heuristic" => self.heuristic = Some(value),
            "step" => self.step = Some(value),
            "steps" => self.steps = Some(value),
            "queen" => self.queen = Some(value),
            "successes" => self.successes = Some(value),
            "failures" => self.failures = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "solved" => self.solved = Some(value),
            "parallel" => self.parallel = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "run_start" => format_run_start(v),
        "run_end" => format_run_end(v),
        "strategy_start" => format_strategy_start(v),
        "strategy_end" => format_strategy_end(v),
        "attempt_start" => format_attempt_start(v),
        "attempt_end" => format_attempt_end(v),
        "step" => format_step(v),
        "local_optimum" => format_local_optimum(v),
        "board" | "heuristic_board" => format_board(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

fn format_heuristic(heuristic: u64) -> String {
    if heuristic == 0 {
        heuristic.bright_green().bold().to_string()
    } else {
        heuristic.bright_red().to_string()
    }
}

fn format_run_start(v: &EventVisitor) -> String {
    mark_run_start();
    let mode = if v.parallel.unwrap_or(false) {
        "parallel"
    } else {
        "sequential"
    };

    format!(
        "{} {} Running │ N = {} │ {} strategies │ {} │ seed {} │ heuristic {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.board_size.unwrap_or(0)).bright_yellow(),
        v.strategies.unwrap_or(0).bright_yellow(),
        mode,
        v.seed.unwrap_or(0).bright_magenta(),
        format_heuristic(v.heuristic.unwrap_or(0)),
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let status = if v.solved.unwrap_or(false) {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "UNSOLVED".bright_red().bold().to_string()
    };

    format!(
        "{} {} Run complete │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status
    )
}

fn format_strategy_start(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("?");
    let name = v.name.as_deref().unwrap_or("");

    format!(
        "{} {} {} {} │ {} attempts │ {} steps max",
        format_elapsed(),
        "▶".bright_blue(),
        strategy.white().bold(),
        name.bright_black(),
        format_count(v.attempts.unwrap_or(0)),
        format_count(v.max_steps.unwrap_or(0)),
    )
}

fn format_strategy_end(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("?");

    format!(
        "{} {} {} ended │ {} │ {} successes │ {} failures │ {} steps",
        format_elapsed(),
        "◀".bright_blue(),
        strategy.white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_count(v.successes.unwrap_or(0)).bright_green(),
        format_count(v.failures.unwrap_or(0)).bright_red(),
        format_count(v.steps.unwrap_or(0)).white(),
    )
}

fn format_attempt_start(v: &EventVisitor) -> String {
    format!(
        "{}   {} Attempt {:>4} │ target queen {} │ heuristic {}",
        format_elapsed(),
        "·".bright_black(),
        v.attempt.unwrap_or(0),
        v.target.unwrap_or(0),
        format_heuristic(v.heuristic.unwrap_or(0)),
    )
}

fn format_attempt_end(v: &EventVisitor) -> String {
    let icon = if v.solved.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{}   {} Attempt {:>4} │ {} steps │ heuristic {}",
        format_elapsed(),
        icon,
        v.attempt.unwrap_or(0),
        format_count(v.steps.unwrap_or(0)),
        format_heuristic(v.heuristic.unwrap_or(0)),
    )
}

fn format_step(v: &EventVisitor) -> String {
    format!(
        "{}     Step {:>6} │ queen {} → {} │ heuristic {}",
        format_elapsed(),
        v.step.unwrap_or(0).bright_black(),
        v.queen.unwrap_or(0),
        v.destination.as_deref().unwrap_or("?"),
        format_heuristic(v.heuristic.unwrap_or(0)),
    )
}

fn format_local_optimum(v: &EventVisitor) -> String {
    format!(
        "{}     Step {:>6} │ {} at queen {} │ {}",
        format_elapsed(),
        v.step.unwrap_or(0).bright_black(),
        "local optimum".yellow(),
        v.target.unwrap_or(0),
        v.recovery.as_deref().unwrap_or("?"),
    )
}

fn format_board(v: &EventVisitor, level: Level) -> String {
    let Some(board) = v.board.as_deref() else {
        return String::new();
    };
    let title = if level == Level::TRACE {
        format!("heuristic board for queen {}", v.target.unwrap_or(0))
    } else {
        "board".to_string()
    };

    let mut output = format!("{}     {}", format_elapsed(), title.bright_black());
    for line in board.lines().filter(|line| !line.is_empty()) {
        output.push_str("\n             ");
        output.push_str(line);
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
