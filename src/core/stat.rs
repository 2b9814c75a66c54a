//! Modifiable combat stats and their stage multipliers.
//!
//! Three stats can be raised or lowered during a battle: attack, defense
//! and speed. Each carries a modifier stage in `[-modifier_minmax, +modifier_minmax]`
//! which scales the base value by `max(2, 2 + stage) / max(2, 2 - stage)`:
//!
//! | stage | -6   | -1  | 0 | +1  | +6 |
//! |-------|------|-----|---|-----|----|
//! | ratio | 2/8  | 2/3 | 1 | 3/2 | 4  |

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stat that spells can boost or reduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Attack,
    Defense,
    Speed,
}

impl Stat {
    /// All modifiable stats, in display order.
    pub const ALL: [Stat; 3] = [Stat::Attack, Stat::Defense, Stat::Speed];

    /// Content-file name of the stat.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stat name is not one of attack/defense/speed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown stat `{0}`")]
pub struct ParseStatError(pub String);

impl FromStr for Stat {
    type Err = ParseStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(Stat::Attack),
            "defense" => Ok(Stat::Defense),
            "speed" => Ok(Stat::Speed),
            other => Err(ParseStatError(other.to_string())),
        }
    }
}

/// Stage multiplier as an exact `(numerator, denominator)` pair.
#[must_use]
pub const fn stage_ratio(stage: i32) -> (i32, i32) {
    let numerator = if stage > 0 { stage.saturating_add(2) } else { 2 };
    let denominator = if stage < 0 { 2i32.saturating_sub(stage) } else { 2 };
    (numerator, denominator)
}

/// Scale a base stat by its modifier stage, rounding down.
///
/// Results beyond the `i32` range saturate.
#[must_use]
pub fn apply_stage(base: i32, stage: i32) -> i32 {
    let (numerator, denominator) = stage_ratio(stage);
    let scaled = i64::from(base) * i64::from(numerator) / i64::from(denominator);
    i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
}

/// Per-stat values, one slot for each [`Stat`].
///
/// Used both for base stats and for modifier stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBlock {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl StatBlock {
    /// Create a block from explicit values.
    #[must_use]
    pub const fn new(attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            attack,
            defense,
            speed,
        }
    }

    /// Sum of the three stats, widened so it cannot overflow.
    #[must_use]
    pub fn total(&self) -> i64 {
        i64::from(self.attack) + i64::from(self.defense) + i64::from(self.speed)
    }

    /// Iterate `(stat, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self[stat]))
    }
}

impl Index<Stat> for StatBlock {
    type Output = i32;

    fn index(&self, stat: Stat) -> &Self::Output {
        match stat {
            Stat::Attack => &self.attack,
            Stat::Defense => &self.defense,
            Stat::Speed => &self.speed,
        }
    }
}

impl IndexMut<Stat> for StatBlock {
    fn index_mut(&mut self, stat: Stat) -> &mut Self::Output {
        match stat {
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::Speed => &mut self.speed,
        }
    }
}
