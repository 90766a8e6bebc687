//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for units on the board
///
/// Ids are operator-supplied strings ("1st Blue Infantry"), so this is a
/// thin wrapper rather than a generated key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    /// The opposing side
    pub fn opponent(&self) -> Self {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blue => f.pad("Blue"),
            Side::Red => f.pad("Red"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(Side::Blue),
            "red" => Ok(Side::Red),
            other => Err(format!("unknown side '{}' (expected Blue or Red)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Blue.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::Blue);
    }

    #[test]
    fn test_side_from_str_case_insensitive() {
        assert_eq!("blue".parse::<Side>(), Ok(Side::Blue));
        assert_eq!("RED".parse::<Side>(), Ok(Side::Red));
        assert!("green".parse::<Side>().is_err());
    }

    #[test]
    fn test_unit_id_serializes_as_plain_string() {
        let id = UnitId::new("1st Blue Infantry");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1st Blue Infantry\"");
    }
}
