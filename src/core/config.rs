//! Engine configuration with documented constants
//!
//! Values can be overridden from a TOML file; any key left out falls back
//! to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battle::constants::{
    DEFAULT_HEX_SIZE, DEFAULT_MORALE, DEFAULT_SPOTTING_RANGE, DEFAULT_STRENGTH,
};
use crate::core::error::{Result, UmpireError};

/// Configuration for the umpire engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hex distance at which a friendly unit spots an enemy
    pub spotting_range: u32,

    /// Radius of a rendered hex in pixels
    ///
    /// Only used by pixel/hex conversions for the rendering layer.
    pub hex_size: f32,

    /// Strength given to units placed on the board or imported without one
    pub default_strength: u32,

    /// Morale given to units placed on the board or imported without one
    pub default_morale: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spotting_range: DEFAULT_SPOTTING_RANGE,
            hex_size: DEFAULT_HEX_SIZE,
            default_strength: DEFAULT_STRENGTH,
            default_morale: DEFAULT_MORALE,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)
            .map_err(|e| UmpireError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate().map_err(UmpireError::Config)?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.hex_size.is_finite() || self.hex_size <= 0.0 {
            return Err(format!(
                "hex_size ({}) must be a positive number",
                self.hex_size
            ));
        }

        Ok(())
    }
}
