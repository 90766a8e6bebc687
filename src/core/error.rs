use thiserror::Error;

use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum UmpireError {
    #[error("Invalid hex label: {0:?}")]
    InvalidLabel(String),

    #[error("Invalid cube coordinate: ({q}, {r}, {s})")]
    InvalidCube { q: i32, r: i32, s: i32 },

    #[error("Import error: {0}")]
    Import(String),

    #[error("Duplicate unit id: {0}")]
    DuplicateUnit(UnitId),

    #[error("Unit not found: {0}")]
    UnknownUnit(UnitId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UmpireError>;
