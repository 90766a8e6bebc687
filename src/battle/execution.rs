//! Turn resolution
//!
//! A turn runs in two strictly ordered phases:
//! 1. Movement: every unit's pending order is applied.
//! 2. Spotting: visibility is recomputed on the post-move positions, so a
//!    unit that moves into range is spotted the turn it arrives.
//!
//! `resolve_turn` is the pure core. `Umpire` owns the session state (roster,
//! board, log) and routes every mutation through checked operations.

use crate::battle::board::Board;
use crate::battle::hex::HexLabel;
use crate::battle::log::TurnLog;
use crate::battle::orders::resolve_order;
use crate::battle::terrain::TerrainKind;
use crate::battle::units::{parse_force_list, Cohesion, Roster, Unit};
use crate::battle::visibility::{run_spotting_checks, visible_units, ViewMode};
use crate::core::config::EngineConfig;
use crate::core::error::{Result, UmpireError};
use crate::core::types::{Side, UnitId};

pub const MSG_RESOLVING: &str = "Resolving player orders...";
pub const MSG_MOVED: &str = "Units moved according to orders.";
pub const MSG_SPOTTED: &str =
    "Spotting checks completed. Enemy units have been revealed based on proximity.";
pub const MSG_COMPLETE: &str =
    "Turn resolution complete. Check the map for updated positions.";
pub const MSG_ORDERS_RECEIVED: &str = "Orders received. Awaiting turn resolution.";

/// Where the umpire is in the turn cycle
///
/// Resolution is one synchronous call, so the phase is only observable in
/// the `resolve_turn` tracing span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    AwaitingOrders,
    Resolving,
}

/// Outcome of one turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    /// The full roster after movement and spotting
    pub units: Vec<Unit>,
    /// Narrative lines in the order they happened
    pub log_entries: Vec<String>,
}

/// Resolve one turn over a snapshot of the roster
///
/// Never fails: orders without a usable destination are dropped and every
/// unit is returned.
pub fn resolve_turn(units: &[Unit], friendly_side: Side, spotting_range: u32) -> TurnResult {
    let mut log_entries = vec![MSG_RESOLVING.to_string()];

    // ===== PHASE 1: MOVEMENT =====
    let moved: Vec<Unit> = units.iter().map(resolve_order).collect();
    log_entries.push(MSG_MOVED.to_string());

    // ===== PHASE 2: SPOTTING =====
    let units = run_spotting_checks(&moved, friendly_side, spotting_range);
    log_entries.push(MSG_SPOTTED.to_string());

    log_entries.push(MSG_COMPLETE.to_string());

    TurnResult { units, log_entries }
}

/// The umpire's game session
#[derive(Debug, Clone, Default)]
pub struct Umpire {
    config: EngineConfig,
    roster: Roster,
    board: Board,
    log: TurnLog,
}

impl Umpire {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn units(&self) -> &[Unit] {
        self.roster.units()
    }

    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.roster.get(id)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    /// Units a viewer is allowed to see
    pub fn view(&self, mode: ViewMode) -> Vec<&Unit> {
        visible_units(self.roster.units(), mode)
    }

    /// Replace the roster with a JSON force list
    ///
    /// On any error the current roster is left as it was.
    pub fn import_units(&mut self, json: &str) -> Result<usize> {
        let units = parse_force_list(json, &self.config).inspect_err(|e| {
            tracing::warn!(error = %e, "Force list rejected");
        })?;
        let count = units.len();

        self.roster = Roster::from_units(units)?;
        tracing::info!(count, "Force list imported");
        self.log.append(format!("Force list loaded: {} units.", count));
        Ok(count)
    }

    /// Roster as pretty-printed JSON
    pub fn export_units(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.roster.units())?)
    }

    /// Place a fresh unit at a hex
    pub fn place_unit(&mut self, label: &str, side: Side) -> Result<UnitId> {
        let position = HexLabel::parse(label)?;
        let id = self.roster.next_placeholder_id();

        let mut unit = Unit::new(id.clone(), side, position);
        unit.strength = self.config.default_strength;
        unit.morale = self.config.default_morale;
        unit.cohesion = Cohesion::Steady;

        self.roster.insert(unit)?;
        tracing::info!(unit = %id, %side, at = %position, "Unit placed");
        Ok(id)
    }

    /// Assign terrain to a hex
    pub fn assign_terrain(&mut self, label: &str, kind: TerrainKind) -> Result<()> {
        let label = HexLabel::parse(label)?;
        self.board.set_terrain(label, kind);
        tracing::debug!(%label, terrain = %kind, "Terrain assigned");
        Ok(())
    }

    /// Give the same order text to every unit of a side
    ///
    /// Returns how many units received it.
    pub fn submit_orders(&mut self, side: Side, text: &str) -> usize {
        let mut count = 0;
        for unit in self.roster.iter_side_mut(side) {
            unit.orders = Some(text.to_string());
            count += 1;
        }
        tracing::info!(%side, count, "Orders submitted");
        self.log.append(MSG_ORDERS_RECEIVED);
        count
    }

    /// Give an order to a single unit
    pub fn assign_order(&mut self, id: &UnitId, text: &str) -> Result<()> {
        let unit = self
            .roster
            .get_mut(id)
            .ok_or_else(|| UmpireError::UnknownUnit(id.clone()))?;
        unit.orders = Some(text.to_string());
        self.log.append(MSG_ORDERS_RECEIVED);
        Ok(())
    }

    /// Resolve a turn and commit the result
    pub fn resolve_turn(&mut self, friendly_side: Side) -> TurnResult {
        let span = tracing::info_span!(
            "resolve_turn",
            friendly = %friendly_side,
            phase = ?TurnPhase::Resolving
        );
        let _guard = span.enter();

        let result = resolve_turn(self.roster.units(), friendly_side, self.config.spotting_range);

        let spotted = result.units.iter().filter(|u| u.spotted).count();
        tracing::info!(units = result.units.len(), spotted, "Turn resolved");

        self.roster.commit_resolved(&result.units);
        for line in &result.log_entries {
            self.log.append(line.as_str());
        }
        span.record("phase", tracing::field::debug(TurnPhase::AwaitingOrders));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> HexLabel {
        HexLabel::parse(s).unwrap()
    }

    fn scenario() -> Vec<Unit> {
        vec![
            Unit::new("B1", Side::Blue, label("A1")).with_orders("advance to C5"),
            Unit::new("R1", Side::Red, label("D5")),
        ]
    }

    #[test]
    fn test_move_then_spot_same_turn() {
        let result = resolve_turn(&scenario(), Side::Blue, 3);
        assert_eq!(result.units[0].position, label("C5"));
        assert!(result.units[0].orders.is_none());
        assert!(result.units[1].spotted);
    }

    #[test]
    fn test_spotting_not_computed_on_pre_move_positions() {
        // Blue starts next to Red and withdraws out of range
        let units = vec![
            Unit::new("B1", Side::Blue, label("D4")).with_orders("withdraw to D12"),
            Unit::new("R1", Side::Red, label("D5")),
        ];
        let result = resolve_turn(&units, Side::Blue, 3);
        assert!(!result.units[1].spotted);
    }

    #[test]
    fn test_log_lines_in_phase_order() {
        let result = resolve_turn(&scenario(), Side::Blue, 3);
        assert_eq!(
            result.log_entries,
            vec![MSG_RESOLVING, MSG_MOVED, MSG_SPOTTED, MSG_COMPLETE]
        );
    }

    #[test]
    fn test_unparseable_orders_do_not_abort() {
        let units = vec![
            Unit::new("B1", Side::Blue, label("A1")).with_orders("hold position"),
            Unit::new("B2", Side::Blue, label("B1")).with_orders("go to C0"),
            Unit::new("B3", Side::Blue, label("C1")).with_orders("to E2"),
        ];
        let result = resolve_turn(&units, Side::Blue, 3);
        assert_eq!(result.units.len(), 3);
        assert_eq!(result.units[0].position, label("A1"));
        assert_eq!(result.units[1].position, label("B1"));
        assert_eq!(result.units[2].position, label("E2"));
        assert!(result.units.iter().all(|u| u.orders.is_none()));
    }

    #[test]
    fn test_umpire_resolve_commits_roster_and_log() {
        let mut umpire = Umpire::new(EngineConfig::default());
        umpire
            .import_units(
                r#"[{"id":"B1","side":"Blue","position":"A1","orders":"advance to C5"},
                    {"id":"R1","side":"Red","position":"D5"}]"#,
            )
            .unwrap();

        let result = umpire.resolve_turn(Side::Blue);

        assert_eq!(umpire.units(), result.units.as_slice());
        assert_eq!(umpire.unit(&UnitId::new("B1")).unwrap().position, label("C5"));
        assert!(umpire.unit(&UnitId::new("R1")).unwrap().spotted);
        // Import line plus the four narrative lines
        assert_eq!(umpire.log().len(), 5);
        assert_eq!(umpire.log().latest().unwrap().message, MSG_COMPLETE);
        assert_eq!(umpire.log().latest().unwrap().turn_number, 5);
    }

    #[test]
    fn test_failed_import_keeps_roster() {
        let mut umpire = Umpire::new(EngineConfig::default());
        umpire
            .import_units(r#"[{"id":"B1","side":"Blue","position":"A1"}]"#)
            .unwrap();
        let log_len = umpire.log().len();

        let result = umpire.import_units(r#"{"id":"X"}"#);
        assert!(matches!(result, Err(UmpireError::Import(_))));
        assert_eq!(umpire.units().len(), 1);
        assert_eq!(umpire.units()[0].id, UnitId::new("B1"));
        assert_eq!(umpire.log().len(), log_len);
    }

    #[test]
    fn test_place_unit_uses_config_defaults() {
        let mut umpire = Umpire::new(EngineConfig::default());
        let id = umpire.place_unit("B3", Side::Red).unwrap();
        assert_eq!(id, UnitId::new("New Unit 1"));

        let unit = umpire.unit(&id).unwrap();
        assert_eq!(unit.strength, 500);
        assert_eq!(unit.morale, 3);
        assert_eq!(unit.position, label("B3"));
        assert!(unit.orders.is_none());
    }

    #[test]
    fn test_place_unit_rejects_bad_label() {
        let mut umpire = Umpire::new(EngineConfig::default());
        let result = umpire.place_unit("b3", Side::Red);
        assert!(matches!(result, Err(UmpireError::InvalidLabel(_))));
        assert!(umpire.units().is_empty());
    }

    #[test]
    fn test_assign_terrain() {
        let mut umpire = Umpire::new(EngineConfig::default());
        umpire.assign_terrain("B2", TerrainKind::Forest).unwrap();
        assert_eq!(umpire.board().get_terrain(&label("B2")), TerrainKind::Forest);
        assert!(umpire.assign_terrain("2B", TerrainKind::Hill).is_err());
    }

    #[test]
    fn test_submit_orders_broadcasts_to_side() {
        let mut umpire = Umpire::new(EngineConfig::default());
        umpire.place_unit("A1", Side::Blue).unwrap();
        umpire.place_unit("A2", Side::Blue).unwrap();
        umpire.place_unit("F6", Side::Red).unwrap();

        let count = umpire.submit_orders(Side::Blue, "advance to C3");
        assert_eq!(count, 2);
        assert!(umpire.units().iter().filter(|u| u.side == Side::Blue).all(|u| u.has_orders()));
        assert!(!umpire.units()[2].has_orders());
        assert_eq!(umpire.log().latest().unwrap().message, MSG_ORDERS_RECEIVED);
    }

    #[test]
    fn test_assign_order_unknown_unit() {
        let mut umpire = Umpire::new(EngineConfig::default());
        let result = umpire.assign_order(&UnitId::new("ghost"), "to A1");
        assert!(matches!(result, Err(UmpireError::UnknownUnit(_))));
    }

    #[test]
    fn test_configured_spotting_range() {
        let config = EngineConfig {
            spotting_range: 1,
            ..EngineConfig::default()
        };
        let mut umpire = Umpire::new(config);
        umpire.place_unit("A1", Side::Blue).unwrap();
        let red = umpire.place_unit("A3", Side::Red).unwrap();

        umpire.resolve_turn(Side::Blue);
        assert!(!umpire.unit(&red).unwrap().spotted);
    }

    #[test]
    fn test_export_includes_spotted() {
        let mut umpire = Umpire::new(EngineConfig::default());
        umpire.place_unit("A1", Side::Blue).unwrap();
        let json = umpire.export_units().unwrap();
        assert!(json.contains("\"spotted\": false"));
        assert!(json.contains("\"position\": \"A1\""));
    }
}
