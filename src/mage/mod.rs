//! Combatants: definitions, live state, snapshots and the battle roster.
//!
//! ## Key Types
//!
//! - `MageDefinition`: static unit data (stats, element, chosen spells)
//! - `MageManager`: live combatant with health, stat stages and caps applied
//! - `MageView`: read-only snapshot handed to decision sources
//! - `Roster`: every combatant in a battle, addressed by `CombatantId`

pub mod definition;
pub mod manager;
pub mod roster;
pub mod view;

pub use definition::MageDefinition;
pub use manager::MageManager;
pub use roster::Roster;
pub use view::MageView;
