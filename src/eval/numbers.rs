//! Number-token placement scoring.
//!
//! The score is the sum of four penalty terms, all computed over a fixed
//! terrain assignment:
//!
//! - high-probability tokens (6 and 8) next to each other,
//! - identical tokens next to each other,
//! - more than `HIGH_TOKENS_PER_TERRAIN` high tokens on one terrain,
//! - uneven pip totals across the producing terrains.
//!
//! The adjacency terms walk every cell's neighbor list, so each adjacent pair
//! contributes from both ends, matching the terrain score.

use crate::board::{AdjacencyIndex, NumberToken, Terrain, PRODUCING_TERRAINS, TERRAIN_COUNT};

/// Penalty per directed neighbor relation between two high tokens.
pub const HIGH_ADJACENT_PENALTY: f64 = 100.0;
/// Penalty per directed neighbor relation between identical tokens.
pub const DUPLICATE_ADJACENT_PENALTY: f64 = 30.0;
/// High tokens a single terrain may hold without penalty.
pub const HIGH_TOKENS_PER_TERRAIN: u32 = 2;
/// Penalty per high token beyond the per-terrain cap.
pub const HIGH_CAP_PENALTY: f64 = 50.0;
/// Multiplier applied to the variance of per-terrain pip totals.
pub const PIP_VARIANCE_WEIGHT: f64 = 2.0;

/// The individual terms of a number score.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct NumberScore {
    pub high_adjacency: f64,
    pub duplicate_adjacency: f64,
    pub high_cap: f64,
    pub pip_variance: f64,
}

impl NumberScore {
    pub fn total(&self) -> f64 {
        self.high_adjacency + self.duplicate_adjacency + self.high_cap + self.pip_variance
    }
}

/// Scores a number assignment against its terrain; lower is better.
pub fn score_numbers(
    numbers: &[Option<NumberToken>],
    terrain: &[Terrain],
    adjacency: &AdjacencyIndex,
) -> f64 {
    number_score_breakdown(numbers, terrain, adjacency).total()
}

/// Computes each term of the number score separately.
pub fn number_score_breakdown(
    numbers: &[Option<NumberToken>],
    terrain: &[Terrain],
    adjacency: &AdjacencyIndex,
) -> NumberScore {
    debug_assert_eq!(numbers.len(), terrain.len());

    let mut score = NumberScore::default();

    for (i, num) in numbers.iter().enumerate() {
        let Some(num) = *num else { continue };
        for &j in adjacency.neighbors(i) {
            let Some(other) = numbers[j] else { continue };
            if num.is_high_probability() && other.is_high_probability() {
                score.high_adjacency += HIGH_ADJACENT_PENALTY;
            }
            if num == other {
                score.duplicate_adjacency += DUPLICATE_ADJACENT_PENALTY;
            }
        }
    }

    let high = high_token_counts(numbers, terrain);
    for t in PRODUCING_TERRAINS {
        let count = high[t as usize];
        if count > HIGH_TOKENS_PER_TERRAIN {
            score.high_cap += (count - HIGH_TOKENS_PER_TERRAIN) as f64 * HIGH_CAP_PENALTY;
        }
    }

    score.pip_variance = pip_variance(&pip_totals(numbers, terrain)) * PIP_VARIANCE_WEIGHT;
    score
}

/// Sums the pip weight of the tokens on each terrain, indexed by
/// `Terrain as usize`.
pub fn pip_totals(numbers: &[Option<NumberToken>], terrain: &[Terrain]) -> [u32; TERRAIN_COUNT] {
    let mut totals = [0u32; TERRAIN_COUNT];
    for (num, &t) in numbers.iter().zip(terrain) {
        if let Some(num) = num {
            totals[t as usize] += num.pips();
        }
    }
    totals
}

/// Counts high-probability tokens on each terrain, indexed by
/// `Terrain as usize`.
pub fn high_token_counts(
    numbers: &[Option<NumberToken>],
    terrain: &[Terrain],
) -> [u32; TERRAIN_COUNT] {
    let mut counts = [0u32; TERRAIN_COUNT];
    for (num, &t) in numbers.iter().zip(terrain) {
        if matches!(num, Some(n) if n.is_high_probability()) {
            counts[t as usize] += 1;
        }
    }
    counts
}

/// Population variance of the producing terrains' pip totals.
pub fn pip_variance(totals: &[u32; TERRAIN_COUNT]) -> f64 {
    let n = PRODUCING_TERRAINS.len() as f64;
    let mean = PRODUCING_TERRAINS
        .iter()
        .map(|&t| totals[t as usize] as f64)
        .sum::<f64>()
        / n;
    PRODUCING_TERRAINS
        .iter()
        .map(|&t| {
            let d = totals[t as usize] as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
