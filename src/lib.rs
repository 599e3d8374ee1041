//! hexboard library.
//!
//! Lays out a hexagonal resource board: terrain, number tokens and ports over
//! a fixed template, balanced by simulated annealing against fairness
//! scores. Exposes the board model, scoring, search, generation and output
//! modules for the binary and for integration tests.

pub mod batch;
pub mod board;
pub mod config;
pub mod eval;
pub mod export;
pub mod generator;
pub mod search;

pub use board::Board;
pub use config::BoardConfig;
pub use generator::{generate, try_generate, BoardGenerator, GenerateError};
