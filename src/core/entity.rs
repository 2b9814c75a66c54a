//! Combatant identification.
//!
//! Every mage taking part in a battle is addressed by a `CombatantId`,
//! which is its index in the session's [`Roster`](crate::mage::Roster).
//!
//! ## Usage
//!
//! ```
//! use mage_battle::core::CombatantId;
//!
//! let first = CombatantId::new(0);
//! assert_eq!(first.index(), 0);
//! assert_eq!(format!("{}", CombatantId::new(3)), "Mage(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a combatant within one battle.
///
/// Ids are only meaningful for the roster that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// Create a combatant ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Roster slot for this combatant.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CombatantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mage({})", self.0)
    }
}
