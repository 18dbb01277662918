//! Search statistics.
//!
//! Counters for one strategy run, shared by all of its attempts.

use std::time::{Duration, Instant};

/// Strategy-level statistics.
///
/// # Example
///
/// ```
/// use queenforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_scan(12);
/// stats.record_step();
/// stats.record_move();
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.candidates_evaluated, 12);
/// assert_eq!(stats.moves_applied, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    finish_time: Option<Instant>,
    /// Total steps taken across all attempts.
    pub step_count: u64,
    /// Neighbor scans performed.
    pub scans: u64,
    /// Candidate cells evaluated across all scans.
    pub candidates_evaluated: u64,
    /// Improving moves committed to a board.
    pub moves_applied: u64,
    /// Local optima reached.
    pub local_optima: u64,
    /// Target queens re-selected on the same board.
    pub retargets: u64,
    /// Boards regenerated from scratch.
    pub restarts: u64,
}

impl SearchStats {
    /// Marks the start of the strategy run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finish_time = None;
    }

    /// Marks the end of the strategy run.
    pub fn finish(&mut self) {
        self.finish_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the run started, frozen once finished.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.finish_time) {
            (Some(start), Some(finish)) => finish.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Records a neighbor scan and how many cells it evaluated.
    pub fn record_scan(&mut self, evaluated: u64) {
        self.scans += 1;
        self.candidates_evaluated += evaluated;
    }

    /// Records a step completion.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Records a committed move.
    pub fn record_move(&mut self) {
        self.moves_applied += 1;
    }

    /// Records a local optimum.
    pub fn record_local_optimum(&mut self) {
        self.local_optima += 1;
    }

    /// Records a target re-selection.
    pub fn record_retarget(&mut self) {
        self.retargets += 1;
    }

    /// Records a board restart.
    pub fn record_restart(&mut self) {
        self.restarts += 1;
    }

    /// Returns the candidate evaluation rate.
    pub fn candidates_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.candidates_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = SearchStats::default();
        stats.record_scan(5);
        stats.record_scan(7);
        stats.record_local_optimum();
        stats.record_retarget();
        stats.record_restart();

        assert_eq!(stats.scans, 2);
        assert_eq!(stats.candidates_evaluated, 12);
        assert_eq!(stats.local_optima, 1);
        assert_eq!(stats.retargets, 1);
        assert_eq!(stats.restarts, 1);
    }

    #[test]
    fn test_elapsed_before_start() {
        let stats = SearchStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.candidates_per_second(), 0.0);
    }

    #[test]
    fn test_elapsed_frozen_after_finish() {
        let mut stats = SearchStats::default();
        stats.start();
        stats.finish();
        let first = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), first);
    }
}
