//! Strategy-level scope.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::stats::SearchStats;

/// Random number generator used by the search.
///
/// ChaCha8 output is stable across platforms and releases, so a seed
/// always reproduces the same run.
pub type SearchRng = ChaCha8Rng;

/// Scope for one strategy run.
#[derive(Debug, Clone)]
pub struct SearchScope {
    rng: SearchRng,
    stats: SearchStats,
}

impl SearchScope {
    /// Creates a scope seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SearchRng::from_os_rng())
    }

    /// Creates a reproducible scope.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SearchRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: SearchRng) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn rng(&mut self) -> &mut SearchRng {
        &mut self.rng
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Clears the statistics and starts the clock.
    pub fn start_search(&mut self) {
        self.stats = SearchStats::default();
        self.stats.start();
    }

    /// Stops the clock and hands the statistics over.
    pub fn finish_search(&mut self) -> SearchStats {
        self.stats.finish();
        std::mem::take(&mut self.stats)
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
