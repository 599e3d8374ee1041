//! Terrain placement scoring.

use crate::board::{AdjacencyIndex, Terrain};

/// Penalty for one cell seeing a neighbor of its own terrain.
pub const SAME_TERRAIN_PENALTY: f64 = 10.0;

/// Scores a terrain assignment; lower is better.
///
/// Every cell adds `SAME_TERRAIN_PENALTY` for each neighbor sharing its
/// terrain, so an adjacent matching pair is counted once from each end.
/// Zero means no two neighbors share a terrain.
pub fn score_terrain(terrain: &[Terrain], adjacency: &AdjacencyIndex) -> f64 {
    let mut matches = 0u32;
    for (i, &t) in terrain.iter().enumerate() {
        for &j in adjacency.neighbors(i) {
            if terrain[j] == t {
                matches += 1;
            }
        }
    }
    matches as f64 * SAME_TERRAIN_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Axial, SMALL_TEMPLATE};

    #[test]
    fn uniform_board_scores_every_directed_edge() {
        let adj = AdjacencyIndex::new(SMALL_TEMPLATE.coordinates);
        let terrain = vec![Terrain::Wood; 19];
        // 42 undirected edges, each counted from both ends.
        assert_eq!(score_terrain(&terrain, &adj), 84.0 * SAME_TERRAIN_PENALTY);
    }

    #[test]
    fn single_matching_pair_counts_twice() {
        let coords = [Axial::new(0, 0), Axial::new(1, 0), Axial::new(5, 5)];
        let adj = AdjacencyIndex::new(&coords);
        let terrain = [Terrain::Ore, Terrain::Ore, Terrain::Ore];
        assert_eq!(score_terrain(&terrain, &adj), 2.0 * SAME_TERRAIN_PENALTY);
    }

    #[test]
    fn no_shared_neighbors_scores_zero() {
        let coords = [Axial::new(0, 0), Axial::new(1, 0), Axial::new(0, 1)];
        let adj = AdjacencyIndex::new(&coords);
        let terrain = [Terrain::Wood, Terrain::Brick, Terrain::Sheep];
        assert_eq!(score_terrain(&terrain, &adj), 0.0);
    }
}
