//! QueenForge Core - board state and conflict heuristic
//!
//! This crate provides the fundamental types for the N-Queens local search:
//! - [`Position`] and [`Cell`] for describing queens on the grid
//! - [`Board`], which keeps the position list, the grid and the cached
//!   heuristic consistent with each other
//! - [`heuristic::conflict_count`], the pure row/column conflict evaluator
//! - Error types shared by every QueenForge crate

pub mod board;
pub mod error;
pub mod heuristic;
pub mod position;

pub use board::{Board, Cell};
pub use error::{board_size, QueensError, Result};
pub use heuristic::conflict_count;
pub use position::Position;
