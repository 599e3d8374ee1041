//! Neighbor lookup over a template's land cells.
//!
//! Built once per generation call from the coordinate list. Neighbors are
//! stored by template index in a flat offset table, so `neighbors(i)` is a
//! slice borrow with no hashing. Cells off the board simply do not appear.

use std::collections::HashMap;

use super::hex::Axial;

/// Cell-index adjacency for one coordinate list.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    lookup: HashMap<Axial, usize>,
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl AdjacencyIndex {
    /// Builds the index in O(n) over the cell count.
    pub fn new(coordinates: &[Axial]) -> Self {
        let lookup: HashMap<Axial, usize> = coordinates
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        let mut offsets = Vec::with_capacity(coordinates.len() + 1);
        let mut targets = Vec::with_capacity(coordinates.len() * 6);
        offsets.push(0);
        for coord in coordinates {
            for n in coord.neighbors() {
                if let Some(&idx) = lookup.get(&n) {
                    targets.push(idx);
                }
            }
            offsets.push(targets.len());
        }

        AdjacencyIndex {
            lookup,
            offsets,
            targets,
        }
    }

    /// Number of cells indexed.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Template indices of the on-board neighbors of cell `index`.
    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.targets[self.offsets[index]..self.offsets[index + 1]]
    }

    /// Returns the template index of a coordinate, if it is a land cell.
    pub fn index_of(&self, coord: Axial) -> Option<usize> {
        self.lookup.get(&coord).copied()
    }

    /// Returns true if the two cells share an edge.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Iterates every unordered adjacent pair once, as `(low, high)`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).flat_map(move |i| {
            self.neighbors(i)
                .iter()
                .copied()
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::template::{LARGE_TEMPLATE, SMALL_TEMPLATE};

    fn small() -> AdjacencyIndex {
        AdjacencyIndex::new(SMALL_TEMPLATE.coordinates)
    }

    #[test]
    fn center_cell_has_six_neighbors() {
        let adj = small();
        let center = SMALL_TEMPLATE.center_index();
        assert_eq!(adj.neighbors(center).len(), 6);
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        let adj = small();
        // Top-left (0,0): neighbors (1,0), (-1,1), (0,1).
        let top_left = adj.index_of(Axial::new(0, 0)).unwrap();
        let mut n: Vec<usize> = adj.neighbors(top_left).to_vec();
        n.sort();
        assert_eq!(n, vec![1, 3, 4]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for template in [&SMALL_TEMPLATE, &LARGE_TEMPLATE] {
            let adj = AdjacencyIndex::new(template.coordinates);
            for i in 0..adj.len() {
                for &j in adj.neighbors(i) {
                    assert!(
                        adj.are_adjacent(j, i),
                        "{} -> {} has no reverse edge",
                        i,
                        j
                    );
                    assert!(template.coordinates[i].is_adjacent(template.coordinates[j]));
                }
            }
        }
    }

    #[test]
    fn pair_counts() {
        // A radius-2 hexagon of 19 cells has 42 internal edges.
        assert_eq!(small().pairs().count(), 42);
        let large = AdjacencyIndex::new(LARGE_TEMPLATE.coordinates);
        let directed: usize = (0..large.len()).map(|i| large.neighbors(i).len()).sum();
        assert_eq!(large.pairs().count() * 2, directed);
    }

    #[test]
    fn off_board_coordinates_are_absent() {
        let adj = small();
        assert_eq!(adj.index_of(Axial::new(5, 5)), None);
        assert_eq!(adj.index_of(Axial::new(0, -1)), None);
        assert_eq!(adj.len(), 19);
    }

    #[test]
    fn empty_coordinate_list() {
        let adj = AdjacencyIndex::new(&[]);
        assert!(adj.is_empty());
        assert_eq!(adj.pairs().count(), 0);
    }
}
