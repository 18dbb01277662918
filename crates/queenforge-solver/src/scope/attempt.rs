//! Attempt-level scope.

use rand::Rng;

use queenforge_core::{Board, Result};

use super::{SearchRng, SearchScope};
use crate::stats::SearchStats;

/// Scope for a single attempt of a strategy.
///
/// Owns the working board and the target queen. The step count covers the
/// whole attempt and survives restarts.
pub struct AttemptScope<'a> {
    /// Reference to the parent search scope.
    search_scope: &'a mut SearchScope,
    board: Board,
    target: usize,
    /// Index of this attempt (0-based).
    attempt: u64,
    step_count: u64,
}

impl<'a> AttemptScope<'a> {
    /// Creates an attempt on `board` with a uniformly random target queen.
    pub fn new(search_scope: &'a mut SearchScope, board: Board, attempt: u64) -> Self {
        let target = search_scope.rng().random_range(0..board.size());
        Self {
            search_scope,
            board,
            target,
            attempt,
            step_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consumes the scope and returns the working board.
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Increments the attempt step count.
    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.search_scope.stats_mut().record_step();
        self.step_count
    }

    pub fn rng(&mut self) -> &mut SearchRng {
        self.search_scope.rng()
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        self.search_scope.stats_mut()
    }

    /// Picks a new target queen, different from the current one whenever
    /// the board has more than one queen. Returns the previous target.
    pub fn retarget(&mut self) -> usize {
        let previous = self.target;
        let size = self.board.size();
        self.target = pick_other(self.search_scope.rng(), size, previous);
        self.search_scope.stats_mut().record_retarget();
        previous
    }

    /// Replaces the board with a freshly generated one of the same size and
    /// picks a uniformly random target.
    pub fn restart(&mut self) -> Result<()> {
        let size = self.board.size();
        let rng = self.search_scope.rng();
        self.board = Board::random(size, rng)?;
        self.target = rng.random_range(0..size);
        self.search_scope.stats_mut().record_restart();
        Ok(())
    }
}

/// Uniformly picks an index in `[0, size)` other than `previous`.
fn pick_other<R: Rng + ?Sized>(rng: &mut R, size: usize, previous: usize) -> usize {
    if size <= 1 {
        return previous;
    }
    let pick = rng.random_range(0..size - 1);
    if pick >= previous {
        pick + 1
    } else {
        pick
    }
}
