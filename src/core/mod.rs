pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{Result, UmpireError};
pub use types::{Side, UnitId};
