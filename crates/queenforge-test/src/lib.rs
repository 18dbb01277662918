//! Shared test fixtures for QueenForge crates.
//!
//! This crate provides boards and random sources for testing. It only
//! depends on `queenforge-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`boards`] - Known boards with hand-checked heuristic values
//! - [`rng`] - Deterministic random number generators
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! queenforge-test = { workspace = true }
//! ```
//!
//! ```
//! use queenforge_test::{all_same_column_board, solved_four_queens};
//!
//! assert_eq!(solved_four_queens().heuristic(), 0);
//! assert_eq!(all_same_column_board(4).heuristic(), 12);
//! ```

pub mod boards;
pub mod rng;

pub use boards::{all_same_column_board, local_optimum_board, solved_four_queens};
pub use rng::seeded_rng;
