//! Battle roster: every combatant in one battle, addressed by id.

use super::manager::MageManager;
use super::view::MageView;
use crate::core::CombatantId;

/// All combatants of one battle.
///
/// Ids are handed out in insertion order and never reused, so a
/// `CombatantId` stays valid for the whole battle.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    mages: Vec<MageManager>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a combatant and return its id.
    pub fn add(&mut self, mage: MageManager) -> CombatantId {
        let id = CombatantId::new(self.mages.len() as u32);
        self.mages.push(mage);
        id
    }

    /// Get a combatant by id.
    #[must_use]
    pub fn get(&self, id: CombatantId) -> Option<&MageManager> {
        self.mages.get(id.index())
    }

    /// Get a mutable combatant by id.
    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut MageManager> {
        self.mages.get_mut(id.index())
    }

    /// Check if an id belongs to this roster.
    #[must_use]
    pub fn contains(&self, id: CombatantId) -> bool {
        id.index() < self.mages.len()
    }

    /// Number of combatants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mages.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mages.is_empty()
    }

    /// Iterate `(id, mage)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &MageManager)> {
        self.mages
            .iter()
            .enumerate()
            .map(|(i, mage)| (CombatantId::new(i as u32), mage))
    }

    /// Fresh snapshot of one combatant.
    #[must_use]
    pub fn view(&self, id: CombatantId) -> Option<MageView> {
        self.get(id).map(|mage| MageView::capture(id, mage))
    }

    /// Fresh snapshots of `ids`, in order. Unknown ids are skipped.
    #[must_use]
    pub fn views(&self, ids: &[CombatantId]) -> Vec<MageView> {
        ids.iter().filter_map(|&id| self.view(id)).collect()
    }

    /// Whether any of `ids` is still conscious.
    #[must_use]
    pub fn any_conscious(&self, ids: &[CombatantId]) -> bool {
        ids.iter()
            .filter_map(|&id| self.get(id))
            .any(MageManager::is_conscious)
    }
}
