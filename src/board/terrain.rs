//! Terrain, number-token, and port-type values.
//!
//! Terrain variants are `#[repr(u8)]` so they can index fixed-size
//! per-terrain arrays (`[T; TERRAIN_COUNT]`) without hashing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of terrain variants, desert included.
pub const TERRAIN_COUNT: usize = 6;

/// The terrain of one land cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Terrain {
    Wood = 0,
    Brick = 1,
    Wheat = 2,
    Sheep = 3,
    Ore = 4,
    Desert = 5,
}

/// All terrain variants in index order.
pub const ALL_TERRAINS: [Terrain; TERRAIN_COUNT] = [
    Terrain::Wood,
    Terrain::Brick,
    Terrain::Wheat,
    Terrain::Sheep,
    Terrain::Ore,
    Terrain::Desert,
];

/// Terrains that carry a number token.
pub const PRODUCING_TERRAINS: [Terrain; 5] = [
    Terrain::Wood,
    Terrain::Brick,
    Terrain::Wheat,
    Terrain::Sheep,
    Terrain::Ore,
];

impl Terrain {
    /// Returns the lowercase identifier used in JSON and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Terrain::Wood => "wood",
            Terrain::Brick => "brick",
            Terrain::Wheat => "wheat",
            Terrain::Sheep => "sheep",
            Terrain::Ore => "ore",
            Terrain::Desert => "desert",
        }
    }

    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Wood => "Wood",
            Terrain::Brick => "Brick",
            Terrain::Wheat => "Wheat",
            Terrain::Sheep => "Sheep",
            Terrain::Ore => "Ore",
            Terrain::Desert => "Desert",
        }
    }

    /// Returns true for the terrain that never holds a number token.
    pub const fn is_desert(self) -> bool {
        matches!(self, Terrain::Desert)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a number outside the token set is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a number token (expected 2-6 or 8-12)")]
pub struct InvalidToken(pub u8);

/// A number token placed on a producing cell. Seven has no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum NumberToken {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
}

/// All token values in ascending order.
pub const ALL_TOKENS: [NumberToken; 10] = [
    NumberToken::Two,
    NumberToken::Three,
    NumberToken::Four,
    NumberToken::Five,
    NumberToken::Six,
    NumberToken::Eight,
    NumberToken::Nine,
    NumberToken::Ten,
    NumberToken::Eleven,
    NumberToken::Twelve,
];

/// The largest pip weight any token carries.
pub const MAX_PIPS: u32 = 5;

impl NumberToken {
    /// Returns the dice total this token stands for.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the pip weight: the number of two-dice combinations that roll
    /// this total.
    pub const fn pips(self) -> u32 {
        match self {
            NumberToken::Two | NumberToken::Twelve => 1,
            NumberToken::Three | NumberToken::Eleven => 2,
            NumberToken::Four | NumberToken::Ten => 3,
            NumberToken::Five | NumberToken::Nine => 4,
            NumberToken::Six | NumberToken::Eight => 5,
        }
    }

    /// Returns true for the tokens tied for the maximum pip weight (6 and 8).
    pub const fn is_high_probability(self) -> bool {
        self.pips() == MAX_PIPS
    }

    /// Converts a dice total into a token.
    pub fn from_value(value: u8) -> Option<NumberToken> {
        ALL_TOKENS.iter().copied().find(|t| t.value() == value)
    }
}

impl From<NumberToken> for u8 {
    fn from(token: NumberToken) -> u8 {
        token.value()
    }
}

impl TryFrom<u8> for NumberToken {
    type Error = InvalidToken;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NumberToken::from_value(value).ok_or(InvalidToken(value))
    }
}

impl fmt::Display for NumberToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The trade offered by a harbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// 3:1 trade of any resource.
    Any,
    Wood,
    Brick,
    Wheat,
    Sheep,
    Ore,
}

impl PortType {
    /// Returns the number of cards given up per card received.
    pub const fn trade_ratio(self) -> u8 {
        match self {
            PortType::Any => 3,
            _ => 2,
        }
    }

    /// Returns the terrain whose resource this port trades, if specific.
    pub const fn terrain(self) -> Option<Terrain> {
        match self {
            PortType::Any => None,
            PortType::Wood => Some(Terrain::Wood),
            PortType::Brick => Some(Terrain::Brick),
            PortType::Wheat => Some(Terrain::Wheat),
            PortType::Sheep => Some(Terrain::Sheep),
            PortType::Ore => Some(Terrain::Ore),
        }
    }

    /// Returns a label such as "Wood 2:1" or "Any 3:1".
    pub fn label(self) -> String {
        let name = match self.terrain() {
            Some(t) => t.name(),
            None => "Any",
        };
        format!("{} {}:1", name, self.trade_ratio())
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.terrain() {
            Some(t) => f.write_str(t.id()),
            None => f.write_str("any"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_index_matches_table() {
        for (i, t) in ALL_TERRAINS.iter().enumerate() {
            assert_eq!(*t as usize, i);
        }
        assert!(!PRODUCING_TERRAINS.contains(&Terrain::Desert));
    }

    #[test]
    fn pips_are_symmetric_around_seven() {
        for t in ALL_TOKENS {
            let mirror = NumberToken::from_value(14 - t.value()).unwrap();
            assert_eq!(t.pips(), mirror.pips(), "{} vs {}", t, mirror);
        }
    }

    #[test]
    fn only_six_and_eight_are_high_probability() {
        let high: Vec<u8> = ALL_TOKENS
            .iter()
            .filter(|t| t.is_high_probability())
            .map(|t| t.value())
            .collect();
        assert_eq!(high, vec![6, 8]);
    }

    #[test]
    fn seven_is_not_a_token() {
        assert_eq!(NumberToken::from_value(7), None);
        assert_eq!(NumberToken::try_from(13u8), Err(InvalidToken(13)));
        assert_eq!(NumberToken::try_from(9u8), Ok(NumberToken::Nine));
    }

    #[test]
    fn token_serializes_as_integer() {
        let json = serde_json::to_string(&NumberToken::Eleven).unwrap();
        assert_eq!(json, "11");
        let back: NumberToken = serde_json::from_str("4").unwrap();
        assert_eq!(back, NumberToken::Four);
        assert!(serde_json::from_str::<NumberToken>("7").is_err());
    }

    #[test]
    fn port_labels() {
        assert_eq!(PortType::Any.label(), "Any 3:1");
        assert_eq!(PortType::Ore.label(), "Ore 2:1");
        assert_eq!(PortType::Sheep.to_string(), "sheep");
        assert_eq!(
            serde_json::to_string(&PortType::Any).unwrap(),
            "\"any\""
        );
    }
}
