//! Umpire engine constants - all tunable defaults in one place
//!
//! Each of these can be overridden through `EngineConfig`.

// Vision (hexes)
pub const DEFAULT_SPOTTING_RANGE: u32 = 3;

// Rendering scale (pixels from hex centre to corner)
pub const DEFAULT_HEX_SIZE: f32 = 30.0;

// Fresh units placed by the umpire
pub const DEFAULT_STRENGTH: u32 = 500;
pub const DEFAULT_MORALE: i32 = 3;

// Labels: one column letter, 'A'..='Z'
pub const BOARD_COLUMNS: i32 = 26;
