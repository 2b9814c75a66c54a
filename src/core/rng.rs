//! Random number sources for battle resolution.
//!
//! Every random decision in a battle (evasion rolls, critical-hit rolls,
//! random target selection) goes through the [`RandomSource`] trait:
//!
//! - [`BattleRng`]: seeded ChaCha8 generator for real battles
//! - [`ScriptedRolls`]: replays a fixed queue of outcomes for tests
//!
//! ```
//! use mage_battle::core::{BattleRng, RandomSource};
//!
//! let mut a = BattleRng::new(7);
//! let mut b = BattleRng::new(7);
//! assert_eq!(a.roll_percent(), b.roll_percent());
//!
//! let roll = a.roll_percent();
//! assert!((0..=100).contains(&roll));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the randomness consumed by the engine.
pub trait RandomSource {
    /// Uniform integer in `0..=100`, inclusive on both ends.
    fn roll_percent(&mut self) -> i32;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Deterministic battle RNG.
///
/// Same seed, same sequence. Reseeding means building a new generator.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }
}

impl RandomSource for BattleRng {
    fn roll_percent(&mut self) -> i32 {
        self.inner.gen_range(0..=100)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

/// Replays predetermined rolls and picks, in order.
///
/// Exhausted queues yield `0`, which means "hit, no critical, first target".
///
/// ```
/// use mage_battle::core::{RandomSource, ScriptedRolls};
///
/// let mut rolls = ScriptedRolls::new().with_rolls([100, 5]).with_picks([2]);
/// assert_eq!(rolls.roll_percent(), 100);
/// assert_eq!(rolls.roll_percent(), 5);
/// assert_eq!(rolls.roll_percent(), 0);
/// assert_eq!(rolls.pick_index(3), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<i32>,
    picks: VecDeque<usize>,
}

impl ScriptedRolls {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue percent rolls (builder pattern).
    #[must_use]
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue index picks (builder pattern).
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Number of percent rolls not yet consumed.
    #[must_use]
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll_percent(&mut self) -> i32 {
        self.rolls.pop_front().unwrap_or(0)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        if len == 0 {
            0
        } else {
            pick % len
        }
    }
}
