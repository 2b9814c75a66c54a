//! Element registry for name lookup.
//!
//! Spells and mages refer to elements by name in content files; the
//! registry resolves those names to shared [`Element`] values.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::warn;

use super::element::Element;

/// Registry of elements, keyed by name.
///
/// ## Example
///
/// ```
/// use mage_battle::elements::ElementRegistry;
///
/// let mut registry = ElementRegistry::new();
/// registry.register("Fire", ["Ice"], ["Water"], []);
/// registry.register("Ice", ["Water"], ["Fire"], []);
///
/// let fire = registry.lookup("Fire").unwrap();
/// let ice = registry.lookup("Ice").unwrap();
/// assert!(fire.is_strong_against(&ice));
/// assert!(registry.lookup("Shadow").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    elements: FxHashMap<String, Arc<Element>>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and store an element. The element becomes compatible with itself.
    ///
    /// Re-registering a name replaces the previous element.
    pub fn register<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        strong: impl IntoIterator<Item = S>,
        weak: impl IntoIterator<Item = S>,
        compatible: impl IntoIterator<Item = S>,
    ) -> Arc<Element> {
        self.insert(Element::new(name, strong, weak, compatible))
    }

    /// Store an already-built element, returning the shared handle.
    pub fn insert(&mut self, element: Element) -> Arc<Element> {
        let element = Arc::new(element);
        if self
            .elements
            .insert(element.name.clone(), Arc::clone(&element))
            .is_some()
        {
            warn!(element = %element.name, "element registered twice, replacing");
        }
        element
    }

    /// Get an element by name without logging misses.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Element>> {
        self.elements.get(name)
    }

    /// Resolve an element by name. Misses are logged; callers decide the fallback.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<Element>> {
        let found = self.elements.get(name).cloned();
        if found.is_none() {
            warn!(element = name, "not a real element");
        }
        found
    }

    /// Check if an element name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    /// Get the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over all elements.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Element>> {
        self.elements.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ElementRegistry::new();
        registry.register("Fire", ["Ice"], ["Water"], []);

        let fire = registry.lookup("Fire").unwrap();
        assert_eq!(fire.name, "Fire");
        assert_eq!(fire.compatible, vec!["Fire".to_string()]);
        assert!(registry.lookup("Earth").is_none());
    }

    #[test]
    fn test_lookup_shares_instance() {
        let mut registry = ElementRegistry::new();
        let stored = registry.register("Ice", ["Water"], [], []);
        let found = registry.lookup("Ice").unwrap();
        assert!(Arc::ptr_eq(&stored, &found));
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = ElementRegistry::new();
        registry.register("Fire", ["Ice"], [], []);
        registry.register("Fire", ["Grass"], [], []);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Fire").unwrap().strong, vec!["Grass".to_string()]);
    }

    #[test]
    fn test_contains_and_iter() {
        let mut registry = ElementRegistry::new();
        assert!(registry.is_empty());
        registry.register("A", ["B"], [], []);
        registry.register("B", ["A"], [], []);

        assert!(registry.contains("A"));
        assert!(!registry.contains("C"));
        let mut names: Vec<_> = registry.iter().map(|e| e.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
    }
}
