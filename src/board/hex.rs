//! Axial hex coordinates.
//!
//! Cells are addressed by `(q, r)` pairs. Two cells are adjacent when their
//! difference is one of the six unit directions in `AXIAL_DIRECTIONS`.

use serde::{Deserialize, Serialize};

/// The six unit offsets of an axial hex grid, in facing order.
pub const AXIAL_DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// An axial coordinate identifying one hex cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const fn new(q: i32, r: i32) -> Self {
        Axial { q, r }
    }

    /// Returns the cell one step away in the given direction (0..6).
    pub const fn neighbor(self, direction: usize) -> Axial {
        let (dq, dr) = AXIAL_DIRECTIONS[direction];
        Axial::new(self.q + dq, self.r + dr)
    }

    /// Returns all six surrounding cells, whether or not they are on a board.
    pub fn neighbors(self) -> [Axial; 6] {
        let mut out = [self; 6];
        for (dir, cell) in out.iter_mut().enumerate() {
            *cell = self.neighbor(dir);
        }
        out
    }

    /// Returns true if `other` is exactly one unit step away.
    pub fn is_adjacent(self, other: Axial) -> bool {
        let delta = (other.q - self.q, other.r - self.r);
        AXIAL_DIRECTIONS.contains(&delta)
    }
}

/// Error returned when a side number outside 0..6 is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a hex side (expected 0-5)")]
pub struct InvalidFacing(pub u8);

/// The side of a hex a port faces, 0..6, clockwise in 60 degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Facing(u8);

impl Facing {
    pub const COUNT: u8 = 6;

    /// Creates a facing. Values outside 0..6 are caught by template validation.
    pub const fn new(side: u8) -> Self {
        Facing(side)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 < Self::COUNT
    }

    /// Rotation in degrees used to orient the port marker.
    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 60
    }
}

impl From<Facing> for u8 {
    fn from(facing: Facing) -> u8 {
        facing.0
    }
}

impl TryFrom<u8> for Facing {
    type Error = InvalidFacing;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        let facing = Facing(side);
        if facing.is_valid() {
            Ok(facing)
        } else {
            Err(InvalidFacing(side))
        }
    }
}
