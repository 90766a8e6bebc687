//! Kriegsspiel - umpire engine for a two-sided hex wargame

pub mod battle;
pub mod core;
