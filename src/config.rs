//! Generation options.
//!
//! A `BoardConfig` selects the board size and the placement policy for each
//! kind of value. Every field is an enum; the string forms accepted by
//! `FromStr` are the ones the command line uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a configuration value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid player count '{0}' (expected small, large, 3-4 or 5-6)")]
    InvalidPlayerCount(String),

    #[error("invalid desert placement '{0}' (expected center or random)")]
    InvalidDesertPlacement(String),

    #[error("invalid placement policy '{0}' (expected balanced or random)")]
    InvalidPlacement(String),

    #[error("invalid port placement '{0}' (expected fixed or random)")]
    InvalidPortPlacement(String),
}

/// Which board template to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerCount {
    /// 3-4 players: 19 land cells, 9 ports.
    Small,
    /// 5-6 players: 30 land cells, 11 ports.
    Large,
}

impl PlayerCount {
    pub const fn id(self) -> &'static str {
        match self {
            PlayerCount::Small => "small",
            PlayerCount::Large => "large",
        }
    }
}

impl FromStr for PlayerCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" | "3-4" => Ok(PlayerCount::Small),
            "large" | "5-6" => Ok(PlayerCount::Large),
            other => Err(ConfigError::InvalidPlayerCount(other.to_string())),
        }
    }
}

/// Where the desert goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesertPlacement {
    /// A desert always occupies the template's center index.
    #[serde(rename = "center", alias = "fixed-center")]
    FixedCenter,
    Random,
}

impl DesertPlacement {
    pub const fn id(self) -> &'static str {
        match self {
            DesertPlacement::FixedCenter => "center",
            DesertPlacement::Random => "random",
        }
    }
}

impl FromStr for DesertPlacement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" | "fixed-center" => Ok(DesertPlacement::FixedCenter),
            "random" => Ok(DesertPlacement::Random),
            other => Err(ConfigError::InvalidDesertPlacement(other.to_string())),
        }
    }
}

/// Placement policy for terrain or number tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Shuffle, then improve with simulated annealing.
    Balanced,
    /// Shuffle only.
    Random,
}

impl Placement {
    pub const fn id(self) -> &'static str {
        match self {
            Placement::Balanced => "balanced",
            Placement::Random => "random",
        }
    }
}

impl FromStr for Placement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Placement::Balanced),
            "random" => Ok(Placement::Random),
            other => Err(ConfigError::InvalidPlacement(other.to_string())),
        }
    }
}

/// Whether port types keep their printed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortPlacement {
    Fixed,
    Random,
}

impl PortPlacement {
    pub const fn id(self) -> &'static str {
        match self {
            PortPlacement::Fixed => "fixed",
            PortPlacement::Random => "random",
        }
    }
}

impl FromStr for PortPlacement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(PortPlacement::Fixed),
            "random" => Ok(PortPlacement::Random),
            other => Err(ConfigError::InvalidPortPlacement(other.to_string())),
        }
    }
}

macro_rules! display_via_id {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        })*
    };
}

display_via_id!(PlayerCount, DesertPlacement, Placement, PortPlacement);

/// Options for one board generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub player_count: PlayerCount,
    pub desert: DesertPlacement,
    pub terrain: Placement,
    pub numbers: Placement,
    pub ports: PortPlacement,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            player_count: PlayerCount::Small,
            desert: DesertPlacement::FixedCenter,
            terrain: Placement::Balanced,
            numbers: Placement::Balanced,
            ports: PortPlacement::Fixed,
        }
    }
}

impl BoardConfig {
    /// Returns true when a desert must sit at the template center.
    pub fn centers_desert(&self) -> bool {
        self.desert == DesertPlacement::FixedCenter
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "players={} desert={} terrain={} numbers={} ports={}",
            self.player_count, self.desert, self.terrain, self.numbers, self.ports
        )
    }
}
