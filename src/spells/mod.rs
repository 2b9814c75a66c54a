//! Spells and the spell catalog.
//!
//! A `Spell` pairs an element with an ordered list of effects and a
//! `CastKind`. Casting applies the effects through the
//! [`EffectResolver`](crate::effects::EffectResolver) and returns a
//! `SpellCast` summary. Castability is checked by the caller.

mod catalog;
mod spell;

pub use catalog::SpellCatalog;
pub use spell::{CastKind, CastTarget, Spell, SpellCast};
