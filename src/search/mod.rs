//! Local search.
//!
//! Improves a placement by swapping values under a scoring function, using
//! simulated annealing with a fixed iteration budget.

pub mod annealing;

pub use annealing::{anneal, anneal_all, AnnealResult, AnnealingSchedule};
