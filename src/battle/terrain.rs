//! Board terrain kinds
//!
//! Terrain is descriptive only: it has no effect on movement or spotting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Terrain assigned to a hex by the umpire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    #[default]
    Plain,
    Hill,
    Forest,
    River,
    Town,
}

impl TerrainKind {
    pub fn all() -> [TerrainKind; 5] {
        [
            TerrainKind::Plain,
            TerrainKind::Hill,
            TerrainKind::Forest,
            TerrainKind::River,
            TerrainKind::Town,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::Plain => "plain",
            TerrainKind::Hill => "hill",
            TerrainKind::Forest => "forest",
            TerrainKind::River => "river",
            TerrainKind::Town => "town",
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TerrainKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        TerrainKind::all()
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| format!("unknown terrain '{}'", s))
    }
}
