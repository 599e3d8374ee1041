//! Board templates for the two player-count modes.
//!
//! A template fixes the land-cell coordinates, how many cells of each
//! terrain exist, the number tokens to distribute, and the port slots around
//! the coast. All data is compile-time `static`; generation only permutes the
//! values a template provides.
//!
//! Land cells are listed row by row from the top. The small board has rows of
//! 3-4-5-4-3 cells, the large board 3-4-5-6-5-4-3.

use std::collections::HashSet;

use super::hex::{Axial, Facing};
use super::terrain::{NumberToken, PortType, Terrain, TERRAIN_COUNT};
use crate::config::PlayerCount;

/// Errors found when checking a template's internal consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("terrain counts sum to {counted} but the template has {cells} cells")]
    TerrainCountMismatch { counted: usize, cells: usize },

    #[error("template has {tokens} number tokens but {expected} non-desert cells")]
    TokenCountMismatch { tokens: usize, expected: usize },

    #[error("coordinate ({q},{r}) appears more than once")]
    DuplicateCoordinate { q: i32, r: i32 },

    #[error("port slot {index} at ({q},{r}) sits on a land cell")]
    PortOnLand { index: usize, q: i32, r: i32 },

    #[error("port slot {index} has facing {facing}, expected 0-5")]
    InvalidFacing { index: usize, facing: u8 },
}

/// A fixed harbor position and the port type printed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSlot {
    pub coord: Axial,
    pub facing: Facing,
    pub port: PortType,
}

/// The immutable skeleton of one board mode.
#[derive(Debug)]
pub struct BoardTemplate {
    pub player_count: PlayerCount,
    pub coordinates: &'static [Axial],
    pub terrain_counts: &'static [(Terrain, usize)],
    pub numbers: &'static [NumberToken],
    pub ports: &'static [PortSlot],
}

/// Shorthand constructors used only in table construction.
const fn c(q: i32, r: i32) -> Axial {
    Axial::new(q, r)
}
const fn slot(q: i32, r: i32, facing: u8, port: PortType) -> PortSlot {
    PortSlot {
        coord: Axial::new(q, r),
        facing: Facing::new(facing),
        port,
    }
}

use NumberToken::*;

#[rustfmt::skip]
static SMALL_COORDINATES: [Axial; 19] = [
    c(0, 0), c(1, 0), c(2, 0),
    c(-1, 1), c(0, 1), c(1, 1), c(2, 1),
    c(-2, 2), c(-1, 2), c(0, 2), c(1, 2), c(2, 2),
    c(-2, 3), c(-1, 3), c(0, 3), c(1, 3),
    c(-2, 4), c(-1, 4), c(0, 4),
];

static SMALL_TERRAIN: [(Terrain, usize); TERRAIN_COUNT] = [
    (Terrain::Wood, 4),
    (Terrain::Brick, 3),
    (Terrain::Wheat, 4),
    (Terrain::Sheep, 4),
    (Terrain::Ore, 3),
    (Terrain::Desert, 1),
];

#[rustfmt::skip]
static SMALL_NUMBERS: [NumberToken; 18] = [
    Two, Three, Three, Four, Four, Five, Five, Six, Six,
    Eight, Eight, Nine, Nine, Ten, Ten, Eleven, Eleven, Twelve,
];

// Six frame pieces: two ports on pieces 1, 2 and 6, one on pieces 3, 4 and 5.
static SMALL_PORTS: [PortSlot; 9] = [
    slot(0, -1, 0, PortType::Any),
    slot(2, -1, 0, PortType::Wheat),
    slot(3, -1, 1, PortType::Any),
    slot(3, 1, 1, PortType::Brick),
    slot(2, 3, 2, PortType::Wood),
    slot(-1, 5, 3, PortType::Ore),
    slot(-3, 4, 4, PortType::Any),
    slot(-3, 2, 5, PortType::Any),
    slot(-1, 0, 5, PortType::Sheep),
];

#[rustfmt::skip]
static LARGE_COORDINATES: [Axial; 30] = [
    c(0, 0), c(1, 0), c(2, 0),
    c(-1, 1), c(0, 1), c(1, 1), c(2, 1),
    c(-2, 2), c(-1, 2), c(0, 2), c(1, 2), c(2, 2),
    c(-3, 3), c(-2, 3), c(-1, 3), c(0, 3), c(1, 3), c(2, 3),
    c(-3, 4), c(-2, 4), c(-1, 4), c(0, 4), c(1, 4),
    c(-3, 5), c(-2, 5), c(-1, 5), c(0, 5),
    c(-3, 6), c(-2, 6), c(-1, 6),
];

static LARGE_TERRAIN: [(Terrain, usize); TERRAIN_COUNT] = [
    (Terrain::Wood, 6),
    (Terrain::Brick, 5),
    (Terrain::Wheat, 6),
    (Terrain::Sheep, 6),
    (Terrain::Ore, 5),
    (Terrain::Desert, 2),
];

#[rustfmt::skip]
static LARGE_NUMBERS: [NumberToken; 28] = [
    Two, Two, Three, Three, Three, Four, Four, Four, Five, Five, Five,
    Six, Six, Six, Eight, Eight, Eight, Nine, Nine, Nine,
    Ten, Ten, Ten, Eleven, Eleven, Eleven, Twelve, Twelve,
];

// The six long frame pieces plus extensions A (3:1) and B (sheep).
static LARGE_PORTS: [PortSlot; 11] = [
    slot(0, -1, 0, PortType::Any),
    slot(2, -1, 0, PortType::Wheat),
    slot(3, -1, 1, PortType::Any),
    slot(3, 1, 1, PortType::Brick),
    slot(1, 5, 2, PortType::Wood),
    slot(-2, 7, 3, PortType::Ore),
    slot(-4, 4, 4, PortType::Any),
    slot(-3, 2, 5, PortType::Any),
    slot(-1, 0, 5, PortType::Sheep),
    slot(3, 2, 1, PortType::Any),
    slot(3, 3, 1, PortType::Sheep),
];

/// The 3-4 player board.
pub static SMALL_TEMPLATE: BoardTemplate = BoardTemplate {
    player_count: PlayerCount::Small,
    coordinates: &SMALL_COORDINATES,
    terrain_counts: &SMALL_TERRAIN,
    numbers: &SMALL_NUMBERS,
    ports: &SMALL_PORTS,
};

/// The 5-6 player board.
pub static LARGE_TEMPLATE: BoardTemplate = BoardTemplate {
    player_count: PlayerCount::Large,
    coordinates: &LARGE_COORDINATES,
    terrain_counts: &LARGE_TERRAIN,
    numbers: &LARGE_NUMBERS,
    ports: &LARGE_PORTS,
};

impl BoardTemplate {
    /// Returns the template for a player-count mode.
    pub fn for_player_count(player_count: PlayerCount) -> &'static BoardTemplate {
        match player_count {
            PlayerCount::Small => &SMALL_TEMPLATE,
            PlayerCount::Large => &LARGE_TEMPLATE,
        }
    }

    /// Number of land cells.
    pub fn cell_count(&self) -> usize {
        self.coordinates.len()
    }

    /// The index whose cell receives the desert under fixed-center placement.
    pub fn center_index(&self) -> usize {
        self.coordinates.len() / 2
    }

    /// Number of desert cells.
    pub fn desert_count(&self) -> usize {
        self.count_of(Terrain::Desert)
    }

    /// How many cells of the given terrain the template holds.
    pub fn count_of(&self, terrain: Terrain) -> usize {
        self.terrain_counts
            .iter()
            .filter(|(t, _)| *t == terrain)
            .map(|(_, n)| *n)
            .sum()
    }

    /// Flattens the terrain table into one value per cell, in table order.
    pub fn terrain_pool(&self) -> Vec<Terrain> {
        let mut pool = Vec::with_capacity(self.cell_count());
        for &(terrain, count) in self.terrain_counts {
            pool.extend(std::iter::repeat(terrain).take(count));
        }
        pool
    }

    /// The port types in slot order.
    pub fn port_types(&self) -> Vec<PortType> {
        self.ports.iter().map(|s| s.port).collect()
    }

    /// Checks that the pools exactly fill the template.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let cells = self.cell_count();
        let counted: usize = self.terrain_counts.iter().map(|(_, n)| n).sum();
        if counted != cells {
            return Err(TemplateError::TerrainCountMismatch { counted, cells });
        }

        let expected = cells - self.desert_count();
        if self.numbers.len() != expected {
            return Err(TemplateError::TokenCountMismatch {
                tokens: self.numbers.len(),
                expected,
            });
        }

        let mut seen = HashSet::with_capacity(cells);
        for &coord in self.coordinates {
            if !seen.insert(coord) {
                return Err(TemplateError::DuplicateCoordinate {
                    q: coord.q,
                    r: coord.r,
                });
            }
        }

        for (index, s) in self.ports.iter().enumerate() {
            if seen.contains(&s.coord) {
                return Err(TemplateError::PortOnLand {
                    index,
                    q: s.coord.q,
                    r: s.coord.r,
                });
            }
            if !s.facing.is_valid() {
                return Err(TemplateError::InvalidFacing {
                    index,
                    facing: s.facing.index(),
                });
            }
        }

        Ok(())
    }
}
