//! Fairness report for a finished board.

use serde::Serialize;

use super::numbers::{high_token_counts, number_score_breakdown, pip_totals, NumberScore};
use super::terrain::score_terrain;
use crate::board::{AdjacencyIndex, Board, Terrain, PRODUCING_TERRAINS};

/// Pip total and high-token count for one producing terrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerrainShare {
    pub terrain: Terrain,
    pub pips: u32,
    pub high_tokens: u32,
}

/// Scores and per-terrain statistics for one board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    pub terrain_score: f64,
    pub number_score: NumberScore,
    pub shares: Vec<TerrainShare>,
}

impl BoardReport {
    /// Combined terrain and number penalty.
    pub fn total(&self) -> f64 {
        self.terrain_score + self.number_score.total()
    }
}

/// Evaluates a board with the same scoring functions generation optimizes.
pub fn evaluate_board(board: &Board) -> BoardReport {
    let adjacency = AdjacencyIndex::new(board.template().coordinates);
    let terrain = board.terrain();
    let numbers = board.numbers();

    let pips = pip_totals(&numbers, &terrain);
    let high = high_token_counts(&numbers, &terrain);
    let shares = PRODUCING_TERRAINS
        .iter()
        .map(|&t| TerrainShare {
            terrain: t,
            pips: pips[t as usize],
            high_tokens: high[t as usize],
        })
        .collect();

    BoardReport {
        terrain_score: score_terrain(&terrain, &adjacency),
        number_score: number_score_breakdown(&numbers, &terrain, &adjacency),
        shares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SMALL_TEMPLATE;

    #[test]
    fn report_covers_producing_terrains() {
        let terrain = SMALL_TEMPLATE.terrain_pool();
        let mut tokens = SMALL_TEMPLATE.numbers.iter().copied();
        let numbers: Vec<_> = terrain
            .iter()
            .map(|t| if t.is_desert() { None } else { tokens.next() })
            .collect();
        let board = Board::assemble(
            &SMALL_TEMPLATE,
            &terrain,
            &numbers,
            &SMALL_TEMPLATE.port_types(),
        );

        let report = evaluate_board(&board);
        assert_eq!(report.shares.len(), 5);
        let pip_sum: u32 = report.shares.iter().map(|s| s.pips).sum();
        let expected: u32 = SMALL_TEMPLATE.numbers.iter().map(|n| n.pips()).sum();
        assert_eq!(pip_sum, expected);
        // Unshuffled terrain clusters every type together.
        assert!(report.terrain_score > 0.0);
        assert_eq!(
            report.total(),
            report.terrain_score + report.number_score.total()
        );
    }
}
