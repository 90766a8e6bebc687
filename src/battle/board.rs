//! Umpire board: terrain assignments keyed by hex label
//!
//! The board is unbounded. Any valid label can carry terrain and a label
//! with no entry reads back as plain.

use ahash::AHashMap;
use crate::battle::hex::HexLabel;
use crate::battle::terrain::TerrainKind;

#[derive(Debug, Clone, Default)]
pub struct Board {
    terrain: AHashMap<HexLabel, TerrainKind>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign terrain to a hex, replacing any previous assignment
    pub fn set_terrain(&mut self, label: HexLabel, kind: TerrainKind) {
        self.terrain.insert(label, kind);
    }

    /// Terrain at a hex (plain when unassigned)
    pub fn get_terrain(&self, label: &HexLabel) -> TerrainKind {
        self.terrain.get(label).copied().unwrap_or_default()
    }

    /// Explicit assignments in label order
    pub fn assigned(&self) -> Vec<(HexLabel, TerrainKind)> {
        let mut cells: Vec<_> = self.terrain.iter().map(|(l, k)| (*l, *k)).collect();
        cells.sort_by_key(|(label, _)| *label);
        cells
    }

    pub fn len(&self) -> usize {
        self.terrain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> HexLabel {
        HexLabel::parse(s).unwrap()
    }

    #[test]
    fn test_unset_hex_is_plain() {
        let board = Board::new();
        assert_eq!(board.get_terrain(&label("Q77")), TerrainKind::Plain);
        assert!(board.is_empty());
    }

    #[test]
    fn test_set_terrain_upserts() {
        let mut board = Board::new();
        board.set_terrain(label("B2"), TerrainKind::Forest);
        board.set_terrain(label("B2"), TerrainKind::Hill);
        assert_eq!(board.get_terrain(&label("B2")), TerrainKind::Hill);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_set_terrain_idempotent() {
        let mut board = Board::new();
        board.set_terrain(label("C3"), TerrainKind::Town);
        board.set_terrain(label("C3"), TerrainKind::Town);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get_terrain(&label("C3")), TerrainKind::Town);
    }

    #[test]
    fn test_explicit_plain_is_stored() {
        let mut board = Board::new();
        board.set_terrain(label("A1"), TerrainKind::Plain);
        assert_eq!(board.len(), 1);
        assert_eq!(board.get_terrain(&label("A1")), TerrainKind::Plain);
    }

    #[test]
    fn test_assigned_sorted_by_label() {
        let mut board = Board::new();
        board.set_terrain(label("C1"), TerrainKind::River);
        board.set_terrain(label("A2"), TerrainKind::Hill);
        board.set_terrain(label("A10"), TerrainKind::Forest);

        let labels: Vec<String> = board.assigned().iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, vec!["A2", "A10", "C1"]);
    }
}
