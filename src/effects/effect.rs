//! Effect definitions.
//!
//! An effect is one mechanical consequence of a spell: damage, healing or a
//! stat change. Effects are loaded once with their spell and never change.
//! Resolution lives in [`EffectResolver`](super::EffectResolver).

use std::sync::Arc;

use crate::core::Stat;
use crate::elements::Element;
use crate::mage::MageManager;

/// Accuracy used when content does not specify one.
pub const DEFAULT_ACCURACY: i32 = 100;

/// Damage dealt to a single target, with evasion and critical hits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackEffect {
    /// Element used for strong/weak damage scaling.
    pub element: Arc<Element>,
    /// Base power fed into the damage formula.
    pub power: i32,
    /// Hit chance in percent before the speed adjustment.
    pub accuracy: i32,
    /// Critical hit chance in percent.
    pub critical_hit_prob: i32,
}

impl AttackEffect {
    /// Damage this attack would deal from `caster` to `target`.
    ///
    /// A critical hit ignores the caster's attack drops and the target's
    /// defense boosts, then doubles the result.
    #[must_use]
    pub fn compute_damage(&self, caster: &MageManager, target: &MageManager, critical: bool) -> i32 {
        let (attack, defense) = if critical {
            (
                caster.get_stat(Stat::Attack).max(caster.get_base_stat(Stat::Attack)),
                target.get_stat(Stat::Defense).min(target.get_base_stat(Stat::Defense)),
            )
        } else {
            (caster.get_stat(Stat::Attack), target.get_stat(Stat::Defense))
        };

        let mut damage = 2 * i64::from(attack) * i64::from(self.power) / i64::from(defense.max(1));
        damage = damage / 25 + 2;

        if self.element.is_strong_against(target.element()) {
            damage *= 2;
        } else if self.element.is_weak_against(target.element()) {
            damage /= 2;
        }
        if critical {
            damage *= 2;
        }

        i32::try_from(damage).unwrap_or(i32::MAX)
    }
}

/// An attack whose caster takes a share of self-inflicted damage on hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReboundAttackEffect {
    pub attack: AttackEffect,
    /// Percent of the caster's self-damage taken as rebound.
    pub rebound: i32,
}

/// An attack that heals the caster by a share of the damage dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeechAttackEffect {
    pub attack: AttackEffect,
    /// Percent of sustained damage drained back to the caster.
    pub leech: i32,
}

/// Raise a stat of the target by `power` stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoostStatEffect {
    pub element: Arc<Element>,
    pub power: i32,
    pub stat: Stat,
}

/// Lower a stat of the target by `power` stages.
///
/// Carries an accuracy value but no evasion roll is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReduceStatEffect {
    pub element: Arc<Element>,
    pub power: i32,
    pub accuracy: i32,
    pub stat: Stat,
}

/// Restore `power` health to the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealingEffect {
    pub element: Arc<Element>,
    pub power: i32,
    pub accuracy: i32,
}

/// A spell effect.
///
/// Closed set of effect kinds; [`EffectResolver::apply`](super::EffectResolver::apply)
/// matches over it exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Attack(AttackEffect),
    ReboundAttack(ReboundAttackEffect),
    LeechAttack(LeechAttackEffect),
    BoostStat(BoostStatEffect),
    ReduceStat(ReduceStatEffect),
    Heal(HealingEffect),
}

/// Discriminator for [`Effect`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Attack,
    ReboundAttack,
    LeechAttack,
    BoostStat,
    ReduceStat,
    Heal,
}

impl EffectKind {
    /// Every kind, in content-file order.
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Attack,
        EffectKind::ReboundAttack,
        EffectKind::LeechAttack,
        EffectKind::BoostStat,
        EffectKind::ReduceStat,
        EffectKind::Heal,
    ];

    /// `type` tag used in content files.
    #[must_use]
    pub fn content_tag(self) -> &'static str {
        match self {
            EffectKind::Attack => "attack",
            EffectKind::ReboundAttack => "rebound_attack",
            EffectKind::LeechAttack => "leech_attack",
            EffectKind::BoostStat => "stat_boost",
            EffectKind::ReduceStat => "stat_reduce",
            EffectKind::Heal => "heal",
        }
    }

    /// Parse a content-file `type` tag.
    #[must_use]
    pub fn from_content_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.content_tag() == tag)
    }
}

impl Effect {
    /// Create a plain attack.
    pub fn attack(element: Arc<Element>, power: i32, accuracy: i32, critical_hit_prob: i32) -> Self {
        Self::Attack(AttackEffect {
            element,
            power,
            accuracy,
            critical_hit_prob,
        })
    }

    /// Create an attack with rebound damage to the caster.
    pub fn rebound_attack(
        element: Arc<Element>,
        power: i32,
        accuracy: i32,
        critical_hit_prob: i32,
        rebound: i32,
    ) -> Self {
        Self::ReboundAttack(ReboundAttackEffect {
            attack: AttackEffect {
                element,
                power,
                accuracy,
                critical_hit_prob,
            },
            rebound,
        })
    }

    /// Create an attack that drains health to the caster.
    pub fn leech_attack(
        element: Arc<Element>,
        power: i32,
        accuracy: i32,
        critical_hit_prob: i32,
        leech: i32,
    ) -> Self {
        Self::LeechAttack(LeechAttackEffect {
            attack: AttackEffect {
                element,
                power,
                accuracy,
                critical_hit_prob,
            },
            leech,
        })
    }

    /// Create a stat boost.
    pub fn boost(element: Arc<Element>, stat: Stat, power: i32) -> Self {
        Self::BoostStat(BoostStatEffect { element, power, stat })
    }

    /// Create a stat reduction.
    pub fn reduce(element: Arc<Element>, stat: Stat, power: i32, accuracy: i32) -> Self {
        Self::ReduceStat(ReduceStatEffect {
            element,
            power,
            accuracy,
            stat,
        })
    }

    /// Create a heal.
    pub fn heal(element: Arc<Element>, power: i32) -> Self {
        Self::Heal(HealingEffect {
            element,
            power,
            accuracy: DEFAULT_ACCURACY,
        })
    }

    /// Which kind of effect this is.
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Attack(_) => EffectKind::Attack,
            Effect::ReboundAttack(_) => EffectKind::ReboundAttack,
            Effect::LeechAttack(_) => EffectKind::LeechAttack,
            Effect::BoostStat(_) => EffectKind::BoostStat,
            Effect::ReduceStat(_) => EffectKind::ReduceStat,
            Effect::Heal(_) => EffectKind::Heal,
        }
    }

    /// Element the effect deals in.
    #[must_use]
    pub fn element(&self) -> &Arc<Element> {
        match self {
            Effect::Attack(e) => &e.element,
            Effect::ReboundAttack(e) => &e.attack.element,
            Effect::LeechAttack(e) => &e.attack.element,
            Effect::BoostStat(e) => &e.element,
            Effect::ReduceStat(e) => &e.element,
            Effect::Heal(e) => &e.element,
        }
    }

    /// Power value; its meaning depends on the kind.
    #[must_use]
    pub fn power(&self) -> i32 {
        match self {
            Effect::Attack(e) => e.power,
            Effect::ReboundAttack(e) => e.attack.power,
            Effect::LeechAttack(e) => e.attack.power,
            Effect::BoostStat(e) => e.power,
            Effect::ReduceStat(e) => e.power,
            Effect::Heal(e) => e.power,
        }
    }

    /// Accuracy in percent. Stat boosts always report 100.
    #[must_use]
    pub fn accuracy(&self) -> i32 {
        match self {
            Effect::Attack(e) => e.accuracy,
            Effect::ReboundAttack(e) => e.attack.accuracy,
            Effect::LeechAttack(e) => e.attack.accuracy,
            Effect::BoostStat(_) => DEFAULT_ACCURACY,
            Effect::ReduceStat(e) => e.accuracy,
            Effect::Heal(e) => e.accuracy,
        }
    }
}
