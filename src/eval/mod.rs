//! Placement evaluation.
//!
//! Pure scoring functions for terrain and number assignments (lower is
//! fairer), plus a report that applies them to a finished board.

pub mod numbers;
pub mod report;
pub mod terrain;

pub use numbers::{number_score_breakdown, pip_totals, score_numbers, NumberScore};
pub use report::{evaluate_board, BoardReport, TerrainShare};
pub use terrain::score_terrain;
