//! Loaded game content shared by every battle.

use std::path::Path;
use std::sync::Arc;

use crate::elements::{Element, ElementRegistry};
use crate::error::ContentError;
use crate::spells::{Spell, SpellCatalog};

use super::loader::{ContentLoader, LoadReport};

/// Elements and spells available to a battle.
///
/// Built once, then shared read-only (usually behind an `Arc`) by every
/// session that uses it.
///
/// ```
/// use mage_battle::content::ContentLibrary;
///
/// let json = r#"{
///     "elements": [{ "name": "Fire", "strong": ["Ice"] }, { "name": "Ice" }],
///     "spells": [{
///         "name": "Ember",
///         "element": "Fire",
///         "type": "single",
///         "effects": [{ "type": "attack", "power": "40" }]
///     }]
/// }"#;
///
/// let (library, report) = ContentLibrary::from_json_str(json).unwrap();
/// assert!(report.skipped.is_empty());
/// assert_eq!(library.elements().len(), 2);
/// assert!(library.spell("Ember").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentLibrary {
    elements: ElementRegistry,
    spells: SpellCatalog,
}

impl ContentLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a library from prebuilt parts.
    #[must_use]
    pub fn from_parts(elements: ElementRegistry, spells: SpellCatalog) -> Self {
        Self { elements, spells }
    }

    /// Parse a JSON content document into a fresh library.
    pub fn from_json_str(json: &str) -> Result<(Self, LoadReport), ContentError> {
        let mut library = Self::new();
        let report = ContentLoader::new(&mut library).load_str(json)?;
        Ok((library, report))
    }

    /// Read and parse a JSON content file into a fresh library.
    pub fn from_path(path: impl AsRef<Path>) -> Result<(Self, LoadReport), ContentError> {
        let mut library = Self::new();
        let report = ContentLoader::new(&mut library).load_path(path)?;
        Ok((library, report))
    }

    #[must_use]
    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ElementRegistry {
        &mut self.elements
    }

    #[must_use]
    pub fn spells(&self) -> &SpellCatalog {
        &self.spells
    }

    pub fn spells_mut(&mut self) -> &mut SpellCatalog {
        &mut self.spells
    }

    /// Resolve an element by name, logging misses.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<Arc<Element>> {
        self.elements.lookup(name)
    }

    /// Resolve a spell by name, logging misses.
    #[must_use]
    pub fn spell(&self, name: &str) -> Option<Arc<Spell>> {
        self.spells.lookup(name)
    }
}
