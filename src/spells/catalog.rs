//! Spell catalog for name lookup.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::warn;

use super::spell::Spell;

/// Every loaded spell, keyed by name.
///
/// ## Example
///
/// ```
/// use mage_battle::elements::ElementRegistry;
/// use mage_battle::spells::{CastKind, Spell, SpellCatalog};
///
/// let mut elements = ElementRegistry::new();
/// let water = elements.register("Water", ["Fire"], [], []);
///
/// let mut catalog = SpellCatalog::new();
/// catalog.insert(Spell::new("Splash", water, CastKind::Single, []));
///
/// assert!(catalog.contains("Splash"));
/// assert!(catalog.lookup("Drought").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpellCatalog {
    spells: FxHashMap<String, Arc<Spell>>,
}

impl SpellCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a spell, replacing any earlier spell with the same name.
    pub fn insert(&mut self, spell: Spell) -> Arc<Spell> {
        let spell = Arc::new(spell);
        if self
            .spells
            .insert(spell.name.clone(), Arc::clone(&spell))
            .is_some()
        {
            warn!(spell = %spell.name, "spell registered twice, replacing");
        }
        spell
    }

    /// Get a spell by name without logging misses.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Spell>> {
        self.spells.get(name)
    }

    /// Resolve a spell by name, logging misses.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<Spell>> {
        let found = self.spells.get(name).cloned();
        if found.is_none() {
            warn!(spell = name, "not a real spell");
        }
        found
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.spells.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Iterate over all spells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Spell>> {
        self.spells.values()
    }

    /// Spell names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.spells.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
