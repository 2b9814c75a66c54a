//! Read-only combatant snapshots for decision making.

use serde::{Deserialize, Serialize};

use crate::core::{CombatantId, Stat};

use super::manager::MageManager;

/// Snapshot of a combatant as seen by a decision source.
///
/// Built fresh for every query and detached from live state: modifying a
/// view never affects the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MageView {
    /// Roster id, used to target this mage.
    pub id: CombatantId,
    pub name: String,
    pub element: String,
    /// Current health.
    pub health: i32,
    pub max_health: i32,
    /// Modified attack.
    pub attack: i32,
    /// Modified defense.
    pub defense: i32,
    /// Modified speed.
    pub speed: i32,
    pub spells: Vec<String>,
}

impl MageView {
    /// Capture the current state of `mage`.
    #[must_use]
    pub fn capture(id: CombatantId, mage: &MageManager) -> Self {
        Self {
            id,
            name: mage.name().to_string(),
            element: mage.element().name.clone(),
            health: mage.cur_hp(),
            max_health: mage.max_hp(),
            attack: mage.get_stat(Stat::Attack),
            defense: mage.get_stat(Stat::Defense),
            speed: mage.get_stat(Stat::Speed),
            spells: mage.spells().to_vec(),
        }
    }

    /// Whether the snapshot shows the mage still standing.
    #[must_use]
    pub fn is_conscious(&self) -> bool {
        self.health > 0
    }
}
