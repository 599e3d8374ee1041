//! The finished board handed to a renderer.
//!
//! A `Board` is plain data: one record per land cell in template order and
//! one record per port slot. It carries no behavior beyond read-only queries.

use serde::{Deserialize, Serialize};

use super::hex::{Axial, Facing};
use super::template::BoardTemplate;
use super::terrain::{NumberToken, PortType, Terrain};
use crate::config::PlayerCount;

/// One land cell. `id` is the cell's index in the template coordinate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: usize,
    pub q: i32,
    pub r: i32,
    pub terrain: Terrain,
    pub number: Option<NumberToken>,
}

impl Tile {
    pub fn coord(&self) -> Axial {
        Axial::new(self.q, self.r)
    }
}

/// One harbor bound to a fixed coastal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: usize,
    pub q: i32,
    pub r: i32,
    pub facing: Facing,
    #[serde(rename = "type")]
    pub port_type: PortType,
    /// Marker orientation in degrees, `facing * 60`.
    pub rotation: u16,
}

impl Port {
    pub fn coord(&self) -> Axial {
        Axial::new(self.q, self.r)
    }
}

/// A complete layout: terrain, numbers and ports over one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub player_count: PlayerCount,
    pub tiles: Vec<Tile>,
    pub ports: Vec<Port>,
}

impl Board {
    /// Merges positionally aligned assignments into per-cell records.
    ///
    /// Panics if an assignment does not have one entry per template cell or
    /// one port type per slot; that only happens with a malformed template.
    pub fn assemble(
        template: &BoardTemplate,
        terrain: &[Terrain],
        numbers: &[Option<NumberToken>],
        port_types: &[PortType],
    ) -> Board {
        assert_eq!(terrain.len(), template.cell_count(), "terrain assignment size");
        assert_eq!(numbers.len(), template.cell_count(), "number assignment size");
        assert_eq!(port_types.len(), template.ports.len(), "port assignment size");

        let tiles = template
            .coordinates
            .iter()
            .enumerate()
            .map(|(id, coord)| Tile {
                id,
                q: coord.q,
                r: coord.r,
                terrain: terrain[id],
                number: numbers[id],
            })
            .collect();

        let ports = template
            .ports
            .iter()
            .zip(port_types)
            .enumerate()
            .map(|(id, (slot, &port_type))| Port {
                id,
                q: slot.coord.q,
                r: slot.coord.r,
                facing: slot.facing,
                port_type,
                rotation: slot.facing.degrees(),
            })
            .collect();

        Board {
            player_count: template.player_count,
            tiles,
            ports,
        }
    }

    /// The template this board was laid out on.
    pub fn template(&self) -> &'static BoardTemplate {
        BoardTemplate::for_player_count(self.player_count)
    }

    /// Terrain per cell, in template order.
    pub fn terrain(&self) -> Vec<Terrain> {
        self.tiles.iter().map(|t| t.terrain).collect()
    }

    /// Number token per cell, in template order.
    pub fn numbers(&self) -> Vec<Option<NumberToken>> {
        self.tiles.iter().map(|t| t.number).collect()
    }

    /// Port type per slot, in slot order.
    pub fn port_types(&self) -> Vec<PortType> {
        self.ports.iter().map(|p| p.port_type).collect()
    }

    /// Returns the tile at a coordinate, if any.
    pub fn tile_at(&self, coord: Axial) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.coord() == coord)
    }

    /// Iterates over desert tiles.
    pub fn deserts(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.terrain.is_desert())
    }
}
