//! Live combatant state.
//!
//! A `MageManager` wraps one [`MageDefinition`] for the length of a battle.
//! Construction applies the content caps (spell count, then stat budget) and
//! fills health. Afterwards, effects mutate the mage only through
//! `take_damage`, `restore_health`, `boost_stat` and `reduce_stat`.
//!
//! ## Fainting
//!
//! A mage with `cur_hp == 0` has fainted. Fainted mages ignore every
//! mutation and report it with a sentinel: `-1` from stat changes, `0`
//! from damage and healing.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::{apply_stage, BattleConfig, Stat, StatBlock};
use crate::elements::{Element, ElementRegistry};
use crate::error::ContentError;

use super::definition::MageDefinition;

/// Names longer than this are shortened for display.
const SHORT_NAME_LIMIT: usize = 20;

/// A mage taking part in a battle.
#[derive(Clone, Debug)]
pub struct MageManager {
    name: String,
    element: Arc<Element>,
    spells: SmallVec<[String; 4]>,
    max_hp: i32,
    cur_hp: i32,
    base_stats: StatBlock,
    stat_modifiers: StatBlock,
    modifier_minmax: i32,
}

impl MageManager {
    /// Build a combatant from its definition.
    ///
    /// An unknown element falls back to `config.default_element`. Fails only
    /// when the fallback is not loaded either.
    pub fn new(
        definition: &MageDefinition,
        elements: &ElementRegistry,
        config: &BattleConfig,
    ) -> Result<Self, ContentError> {
        let element = match elements.lookup(&definition.element) {
            Some(element) => element,
            None => {
                warn!(
                    mage = %definition.name,
                    element = %definition.element,
                    default = %config.default_element,
                    "invalid element choice, using default"
                );
                elements.lookup(&config.default_element).ok_or_else(|| {
                    ContentError::UnknownDefaultElement {
                        mage: definition.name.clone(),
                        element: definition.element.clone(),
                        default: config.default_element.clone(),
                    }
                })?
            }
        };

        let mut mage = Self {
            name: definition.name.clone(),
            element,
            spells: definition.spells.iter().cloned().collect(),
            max_hp: definition.health.saturating_abs(),
            cur_hp: 0,
            base_stats: StatBlock::new(
                definition.attack.saturating_abs(),
                definition.defense.saturating_abs(),
                definition.speed.saturating_abs(),
            ),
            stat_modifiers: StatBlock::default(),
            modifier_minmax: config.modifier_minmax,
        };

        mage.impose_spell_limit(config.spell_limit);
        mage.impose_stat_limit(config.stat_limit);
        mage.cur_hp = mage.max_hp;

        Ok(mage)
    }

    // === Content caps ===

    /// Keep only the first `limit` spells. Returns whether any were dropped.
    pub fn impose_spell_limit(&mut self, limit: usize) -> bool {
        if self.spells.len() <= limit {
            return false;
        }
        info!(mage = %self.short_name(), limit, "too many spells, reducing");
        self.spells.truncate(limit);
        true
    }

    /// Scale health and base stats down if their sum exceeds `limit`.
    ///
    /// Each value becomes `floor(limit * value / total)` independently, so the
    /// new total may fall short of `limit`. Returns whether scaling happened.
    pub fn impose_stat_limit(&mut self, limit: i32) -> bool {
        let total = i64::from(self.max_hp) + self.base_stats.total();
        if total <= i64::from(limit) {
            return false;
        }
        info!(mage = %self.name, total, limit, "stats are too high, reducing");

        // value <= total, so the result never exceeds limit.
        let scale = |value: i32| -> i32 {
            i32::try_from(i64::from(limit) * i64::from(value) / total).unwrap_or(limit)
        };
        self.max_hp = scale(self.max_hp);
        for stat in Stat::ALL {
            self.base_stats[stat] = scale(self.base_stats[stat]);
        }
        true
    }

    // === Identity ===

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name shortened to 17 characters plus `...` when longer than 20.
    #[must_use]
    pub fn short_name(&self) -> String {
        if self.name.chars().count() > SHORT_NAME_LIMIT {
            let head: String = self.name.chars().take(SHORT_NAME_LIMIT - 3).collect();
            format!("{head}...")
        } else {
            self.name.clone()
        }
    }

    /// The mage's element.
    #[must_use]
    pub fn element(&self) -> &Arc<Element> {
        &self.element
    }

    /// Known spells, in the order they were chosen.
    #[must_use]
    pub fn spells(&self) -> &[String] {
        &self.spells
    }

    /// Whether the mage has learned `spell`.
    #[must_use]
    pub fn knows_spell(&self, spell: &str) -> bool {
        self.spells.iter().any(|known| known == spell)
    }

    // === Stats ===

    /// Stat value without modifiers.
    #[must_use]
    pub fn get_base_stat(&self, stat: Stat) -> i32 {
        self.base_stats[stat]
    }

    /// Current modifier stage for `stat`.
    #[must_use]
    pub fn get_stat_modifier(&self, stat: Stat) -> i32 {
        self.stat_modifiers[stat]
    }

    /// Stat value with its modifier stage applied, rounded down.
    #[must_use]
    pub fn get_stat(&self, stat: Stat) -> i32 {
        apply_stage(self.base_stats[stat], self.stat_modifiers[stat])
    }

    /// Largest absolute modifier stage.
    #[must_use]
    pub fn modifier_minmax(&self) -> i32 {
        self.modifier_minmax
    }

    /// Raise a stat by up to `amount` stages.
    ///
    /// Returns the stages applied (`0` when already capped), or `-1` if fainted.
    pub fn boost_stat(&mut self, stat: Stat, amount: i32) -> i32 {
        if !self.is_conscious() {
            debug!(mage = %self.name, "has fainted and is not affected");
            return -1;
        }

        let delta = amount.max(0).min(self.modifier_minmax - self.stat_modifiers[stat]);
        if delta == 0 {
            info!(mage = %self.name, %stat, "stat can't go any higher");
        } else {
            self.stat_modifiers[stat] += delta;
            info!(mage = %self.name, %stat, delta, "stat rose");
        }
        delta
    }

    /// Lower a stat by up to `amount` stages.
    ///
    /// Returns the stages removed (`0` when already at the floor), or `-1` if fainted.
    pub fn reduce_stat(&mut self, stat: Stat, amount: i32) -> i32 {
        if !self.is_conscious() {
            debug!(mage = %self.name, "has fainted and is not affected");
            return -1;
        }

        let delta = amount.max(0).min(self.stat_modifiers[stat] + self.modifier_minmax);
        if delta == 0 {
            info!(mage = %self.name, %stat, "stat can't go any lower");
        } else {
            self.stat_modifiers[stat] -= delta;
            info!(mage = %self.name, %stat, delta, "stat fell");
        }
        delta
    }

    // === Health ===

    /// Maximum health after caps.
    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Current health.
    #[must_use]
    pub fn cur_hp(&self) -> i32 {
        self.cur_hp
    }

    /// Remaining health as a fraction of maximum.
    #[must_use]
    pub fn health_fraction(&self) -> f64 {
        f64::from(self.cur_hp) / f64::from(self.max_hp.max(1))
    }

    /// Whether the mage can still act.
    #[must_use]
    pub fn is_conscious(&self) -> bool {
        self.cur_hp > 0
    }

    /// Lose up to `amount` health. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        if !self.is_conscious() {
            debug!(mage = %self.name, "has fainted and cannot take more damage");
            return 0;
        }

        let delta = amount.max(0).min(self.cur_hp);
        self.cur_hp -= delta;
        info!(mage = %self.name, lost = delta, hp = self.cur_hp, "took damage");

        if self.cur_hp == 0 {
            info!(mage = %self.name, "fainted");
        }
        delta
    }

    /// Regain up to `amount` health. Returns the health actually restored.
    ///
    /// Fainted mages cannot be healed.
    pub fn restore_health(&mut self, amount: i32) -> i32 {
        if !self.is_conscious() {
            debug!(mage = %self.name, "has fainted and cannot have health restored");
            return 0;
        }

        let delta = amount.max(0).min(self.max_hp - self.cur_hp);
        self.cur_hp += delta;
        info!(mage = %self.name, regained = delta, hp = self.cur_hp, "restored health");
        delta
    }
}

impl std::fmt::Display for MageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>15} - {:7} | HP: {:>3} | ATK: {:>3} | DEF: {:>3} | SPD: {:>3}",
            self.name,
            self.element.name,
            self.cur_hp,
            self.get_stat(Stat::Attack),
            self.get_stat(Stat::Defense),
            self.get_stat(Stat::Speed),
        )
    }
}
