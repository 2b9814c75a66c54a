//! Move decisions supplied by players or AI.

use serde::{Deserialize, Serialize};

use crate::core::CombatantId;
use crate::error::DecisionError;
use crate::mage::MageView;

/// What a decision aims its spell at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSelector {
    /// The acting mage itself.
    Caster,
    /// Every mage in the ally list of the move.
    AllAllies,
    /// Every mage in the enemy list of the move.
    AllEnemies,
    /// One mage from either list.
    Unit(CombatantId),
}

/// A spell choice and its target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub spell: String,
    pub target: TargetSelector,
}

impl Decision {
    pub fn new(spell: impl Into<String>, target: TargetSelector) -> Self {
        Self {
            spell: spell.into(),
            target,
        }
    }
}

/// Chooses a move for a mage.
///
/// Views are fresh snapshots, detached from the battle. Returning an error
/// makes the move "do nothing".
///
/// Closures with the same signature implement this trait:
///
/// ```
/// use mage_battle::magic::{Decision, DecisionSource, TargetSelector};
/// use mage_battle::mage::MageView;
/// use mage_battle::DecisionError;
///
/// let mut always_splash = |_: &[MageView], enemies: &[MageView]| {
///     enemies
///         .first()
///         .map(|e| Decision::new("Splash", TargetSelector::Unit(e.id)))
///         .ok_or(DecisionError::Declined)
/// };
/// assert_eq!(always_splash.decide(&[], &[]), Err(DecisionError::Declined));
/// ```
pub trait DecisionSource {
    fn decide(&mut self, allies: &[MageView], enemies: &[MageView]) -> Result<Decision, DecisionError>;
}

impl<F> DecisionSource for F
where
    F: FnMut(&[MageView], &[MageView]) -> Result<Decision, DecisionError>,
{
    fn decide(&mut self, allies: &[MageView], enemies: &[MageView]) -> Result<Decision, DecisionError> {
        self(allies, enemies)
    }
}
