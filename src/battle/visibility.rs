//! Spotting (fog of war)
//!
//! Visibility is recomputed from scratch every turn for one friendly side.
//! An enemy is spotted when any friendly unit stands within range of it.

use crate::battle::units::Unit;
use crate::core::types::Side;

/// Who is looking at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Sees every unit
    Umpire,
    /// Sees own units plus spotted enemies
    Player(Side),
}

/// Recompute `spotted` for every unit
///
/// Friendly units always end unspotted. Once an enemy is spotted it is not
/// checked against further observers.
pub fn run_spotting_checks(units: &[Unit], friendly_side: Side, range: u32) -> Vec<Unit> {
    let mut updated: Vec<Unit> = units
        .iter()
        .cloned()
        .map(|mut u| {
            u.spotted = false;
            u
        })
        .collect();

    let observers: Vec<_> = updated
        .iter()
        .filter(|u| u.side == friendly_side)
        .map(|u| (u.id.clone(), u.position))
        .collect();

    for (observer, position) in &observers {
        for enemy in updated.iter_mut().filter(|u| u.side != friendly_side) {
            if enemy.spotted {
                continue;
            }
            let distance = position.distance(&enemy.position);
            if distance <= range {
                enemy.spotted = true;
                tracing::debug!(observer = %observer, enemy = %enemy.id, distance, "Enemy spotted");
            }
        }
    }

    updated
}

/// Can a viewer see this unit?
pub fn is_visible(unit: &Unit, mode: ViewMode) -> bool {
    match mode {
        ViewMode::Umpire => true,
        ViewMode::Player(side) => unit.side == side || unit.spotted,
    }
}

/// Filter units down to what a viewer may see
pub fn visible_units(units: &[Unit], mode: ViewMode) -> Vec<&Unit> {
    units.iter().filter(|u| is_visible(u, mode)).collect()
}
