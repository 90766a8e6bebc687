//! Umpire engine - hex board, orders, spotting and turn resolution
//!
//! The engine owns all game state. A presentation layer feeds it force
//! lists, terrain and order text, and reads back unit state and the log.

pub mod board;
pub mod constants;
pub mod execution;
pub mod hex;
pub mod log;
pub mod orders;
pub mod terrain;
pub mod units;
pub mod visibility;

// Re-exports for convenient access
pub use board::Board;
pub use constants::*;
pub use execution::{resolve_turn, TurnPhase, TurnResult, Umpire};
pub use hex::{
    cube_to_label, cube_to_pixel, distance, hex_round, label_to_cube, pixel_to_cube,
    pixel_to_label, CubeCoord, HexLabel,
};
pub use log::{TurnLog, TurnLogEntry};
pub use orders::{interpret, resolve_order, OrderIntent};
pub use terrain::TerrainKind;
pub use units::{parse_force_list, Cohesion, Roster, Unit, UnitRecord};
pub use visibility::{is_visible, run_spotting_checks, visible_units, ViewMode};
