//! Board representation.
//!
//! Contains hex coordinates, terrain/number/port values, the static board
//! templates, the neighbor index, and the finished board record.

pub mod adjacency;
pub mod hex;
pub mod layout;
pub mod template;
pub mod terrain;

pub use adjacency::AdjacencyIndex;
pub use hex::{Axial, Facing, InvalidFacing, AXIAL_DIRECTIONS};
pub use layout::{Board, Port, Tile};
pub use template::{BoardTemplate, PortSlot, TemplateError, LARGE_TEMPLATE, SMALL_TEMPLATE};
pub use terrain::{
    InvalidToken, NumberToken, PortType, Terrain, ALL_TERRAINS, ALL_TOKENS, MAX_PIPS,
    PRODUCING_TERRAINS, TERRAIN_COUNT,
};
