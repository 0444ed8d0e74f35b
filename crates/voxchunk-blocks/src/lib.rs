//! Block type catalog.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contents of one grid cell.
///
/// The terrain generator only places `Empty` and `Stone`; the remaining
/// variants are reserved for surface rules and fluids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Empty,
    Stone,
    Grass,
    Dirt,
    Sand,
    Water,
    Lava,
}

impl BlockType {
    pub const ALL: [BlockType; 7] = [
        BlockType::Empty,
        BlockType::Stone,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Sand,
        BlockType::Water,
        BlockType::Lava,
    ];

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, BlockType::Empty)
    }

    /// Stable lowercase key used in logs and config files.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Empty => "empty",
            BlockType::Stone => "stone",
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Sand => "sand",
            BlockType::Water => "water",
            BlockType::Lava => "lava",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type `{0}`")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}
