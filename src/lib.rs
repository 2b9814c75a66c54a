//! # mage-battle
//!
//! A turn-based elemental spell combat engine.
//!
//! ## Design Principles
//!
//! 1. **Content Is Data**: Elements and spells are loaded from JSON into a
//!    `ContentLibrary`. Nothing about a particular spell is hardcoded.
//!
//! 2. **No Hidden State**: The library, the roster and the RNG are explicit
//!    values owned by a `BattleSession`. Two sessions never interfere.
//!
//! 3. **Results, Not Exceptions**: A move never panics and never returns an
//!    error. Every outcome is a `MoveResult` with a reason on failure.
//!
//! ## Architecture
//!
//! - **Closed Effect Set**: `Effect` is an enum with one record per kind,
//!   resolved by a single exhaustive match.
//!
//! - **Id-Based Combatants**: Mages live in a `Roster` and are addressed by
//!   `CombatantId`, so a caster can target itself without aliasing.
//!
//! - **Injectable Randomness**: Every roll goes through `RandomSource`.
//!   `BattleRng` is seeded ChaCha8; `ScriptedRolls` replays fixed outcomes.
//!
//! ## Modules
//!
//! - `core`: Ids, stats, RNG, configuration
//! - `error`: Error and failure-reason types
//! - `elements`: Elements and the element registry
//! - `effects`: Effect kinds, summaries and resolution
//! - `spells`: Spells and the spell catalog
//! - `content`: JSON content loading
//! - `mage`: Combatant definitions, live state and the roster
//! - `magic`: Decisions, commands and battle sessions

pub mod content;
pub mod core;
pub mod effects;
pub mod elements;
pub mod error;
pub mod mage;
pub mod magic;
pub mod spells;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleRng, CombatantId, RandomSource, ScriptedRolls, Stat, StatBlock,
};

pub use crate::error::{CastFailure, ContentError, DecisionError, ResolveError};

pub use crate::elements::{Element, ElementRegistry};

pub use crate::effects::{Effect, EffectKind, EffectResolver, EffectSummary};

pub use crate::spells::{CastKind, CastTarget, Spell, SpellCast, SpellCatalog};

pub use crate::content::{ContentLibrary, ContentLoader, LoadReport};

pub use crate::mage::{MageDefinition, MageManager, MageView, Roster};

pub use crate::magic::{
    BattleSession, CastRecord, Decision, DecisionSource, Magic, MoveResult, TargetSelector,
};
