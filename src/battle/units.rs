//! Units and the roster that owns them
//!
//! Strength, morale and cohesion are carried for the umpire's benefit only;
//! nothing in the engine computes against them.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::battle::hex::HexLabel;
use crate::core::config::EngineConfig;
use crate::core::error::{Result, UmpireError};
use crate::core::types::{Side, UnitId};

/// Cohesion label shown on a unit card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cohesion {
    #[default]
    Steady,
    Shaken,
    Broken,
}

/// A unit on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub id: UnitId,
    pub side: Side,
    pub position: HexLabel,
    pub strength: u32,
    pub morale: i32,
    pub cohesion: Cohesion,
    /// Free-text order waiting for the next turn resolution
    pub orders: Option<String>,
    /// Seen by the friendly side this turn (recomputed every turn)
    pub spotted: bool,
}

impl Unit {
    pub fn new(id: impl Into<UnitId>, side: Side, position: HexLabel) -> Self {
        Self {
            id: id.into(),
            side,
            position,
            strength: 0,
            morale: 0,
            cohesion: Cohesion::Steady,
            orders: None,
            spotted: false,
        }
    }

    pub fn with_orders(mut self, orders: impl Into<String>) -> Self {
        self.orders = Some(orders.into());
        self
    }

    pub fn has_orders(&self) -> bool {
        self.orders.is_some()
    }
}

/// One entry of an imported force list
///
/// Unknown keys are ignored, including `spotted`, which is derived state.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitRecord {
    pub id: UnitId,
    pub side: Side,
    pub position: HexLabel,
    pub strength: Option<u32>,
    pub morale: Option<i32>,
    pub cohesion: Option<Cohesion>,
    pub orders: Option<String>,
}

impl UnitRecord {
    pub fn into_unit(self, config: &EngineConfig) -> Unit {
        Unit {
            id: self.id,
            side: self.side,
            position: self.position,
            strength: self.strength.unwrap_or(config.default_strength),
            morale: self.morale.unwrap_or(config.default_morale),
            cohesion: self.cohesion.unwrap_or_default(),
            orders: self.orders,
            spotted: false,
        }
    }
}

/// Parse a JSON force list into units
///
/// The root must be an array. Every entry must carry a valid id, side and
/// label, and ids must be unique.
pub fn parse_force_list(json: &str, config: &EngineConfig) -> Result<Vec<Unit>> {
    let records: Vec<UnitRecord> = serde_json::from_str(json).map_err(|e| {
        UmpireError::Import(format!("force list must be a JSON array of units: {}", e))
    })?;

    let units: Vec<Unit> = records.into_iter().map(|r| r.into_unit(config)).collect();
    check_unique_ids(&units)
        .map_err(|id| UmpireError::Import(format!("duplicate unit id '{}'", id)))?;
    Ok(units)
}

fn check_unique_ids(units: &[Unit]) -> std::result::Result<(), UnitId> {
    let mut seen = AHashSet::with_capacity(units.len());
    for unit in units {
        if !seen.insert(&unit.id) {
            return Err(unit.id.clone());
        }
    }
    Ok(())
}

/// The active roster, in placement order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    units: Vec<Unit>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster, rejecting duplicate ids
    pub fn from_units(units: Vec<Unit>) -> Result<Self> {
        check_unique_ids(&units).map_err(UmpireError::DuplicateUnit)?;
        Ok(Self { units })
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn get(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| &u.id == id)
    }

    pub fn get_mut(&mut self, id: &UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| &u.id == id)
    }

    /// Overwrite every unit with its resolved counterpart
    ///
    /// `resolved` must be a turn result over this roster: same units in the
    /// same order.
    pub(crate) fn commit_resolved(&mut self, resolved: &[Unit]) {
        debug_assert_eq!(self.units.len(), resolved.len());
        for (unit, next) in self.units.iter_mut().zip(resolved) {
            debug_assert_eq!(unit.id, next.id);
            unit.clone_from(next);
        }
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.get(id).is_some()
    }

    /// Add a unit, rejecting a duplicate id
    pub fn insert(&mut self, unit: Unit) -> Result<()> {
        if self.contains(&unit.id) {
            return Err(UmpireError::DuplicateUnit(unit.id));
        }
        self.units.push(unit);
        Ok(())
    }

    pub fn iter_side(&self, side: Side) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.side == side)
    }

    pub fn iter_side_mut(&mut self, side: Side) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut().filter(move |u| u.side == side)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// First free id of the form `New Unit N`, counting from roster size + 1
    pub fn next_placeholder_id(&self) -> UnitId {
        let mut n = self.units.len() + 1;
        loop {
            let id = UnitId::new(format!("New Unit {}", n));
            if !self.contains(&id) {
                return id;
            }
            n += 1;
        }
    }
}
