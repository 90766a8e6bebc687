//! Append-only turn log
//!
//! Entries are stored oldest-first. Showing the newest entry on top is a
//! display concern; `newest_first` is provided for that.

use std::fmt;

/// A narrated event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnLogEntry {
    /// 1-based, one past the log length at the time of the append
    pub turn_number: u32,
    pub message: String,
}

impl fmt::Display for TurnLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {}: {}", self.turn_number, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TurnLog {
    entries: Vec<TurnLogEntry>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: impl Into<String>) -> &TurnLogEntry {
        let entry = TurnLogEntry {
            turn_number: self.entries.len() as u32 + 1,
            message: message.into(),
        };
        tracing::info!(turn = entry.turn_number, "{}", entry.message);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// All entries, oldest first
    pub fn all(&self) -> &[TurnLogEntry] {
        &self.entries
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &TurnLogEntry> {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&TurnLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
