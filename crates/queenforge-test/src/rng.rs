//! Deterministic random sources.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns a reproducible generator of the same type the search uses.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenforge_core::Board;

    #[test]
    fn test_same_seed_same_board() {
        let a = Board::random(8, &mut seeded_rng(17)).unwrap();
        let b = Board::random(8, &mut seeded_rng(17)).unwrap();
        assert_eq!(a, b);
    }
}
