//! Mage definitions - static unit data.
//!
//! `MageDefinition` is what a team file or a player's build describes:
//! name, element, raw stats and chosen spells. It is never mutated during a
//! battle; live state lives in [`MageManager`](super::MageManager).

use serde::{Deserialize, Serialize};

/// Static mage definition.
///
/// Stats are raw: the spell and stat caps are applied when a
/// [`MageManager`](super::MageManager) is built from the definition.
///
/// ## Example
///
/// ```
/// use mage_battle::mage::MageDefinition;
///
/// let frost = MageDefinition::new("Frost Warden", "Ice")
///     .with_stats(40, 20, 25, 15)
///     .with_spells(["Frostbite", "Glacial Wall"]);
///
/// assert_eq!(frost.stat_total(), 100);
/// assert_eq!(frost.spells.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MageDefinition {
    /// Display name.
    pub name: String,

    /// Element name, resolved against the content library.
    pub element: String,

    /// Maximum health.
    pub health: i32,

    /// Base attack.
    pub attack: i32,

    /// Base defense.
    pub defense: i32,

    /// Base speed.
    pub speed: i32,

    /// Spell names in preference order.
    #[serde(default)]
    pub spells: Vec<String>,
}

impl MageDefinition {
    /// Create a definition with zeroed stats and no spells.
    #[must_use]
    pub fn new(name: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: element.into(),
            health: 0,
            attack: 0,
            defense: 0,
            speed: 0,
            spells: Vec::new(),
        }
    }

    /// Set health, attack, defense and speed (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, health: i32, attack: i32, defense: i32, speed: i32) -> Self {
        self.health = health;
        self.attack = attack;
        self.defense = defense;
        self.speed = speed;
        self
    }

    /// Append known spells (builder pattern).
    #[must_use]
    pub fn with_spells<S: Into<String>>(mut self, spells: impl IntoIterator<Item = S>) -> Self {
        self.spells.extend(spells.into_iter().map(Into::into));
        self
    }

    /// Sum of the absolute raw stats, as counted against the stat budget.
    #[must_use]
    pub fn stat_total(&self) -> i64 {
        [self.health, self.attack, self.defense, self.speed]
            .into_iter()
            .map(|v| i64::from(v.unsigned_abs()))
            .sum()
    }
}
