//! Elemental types.
//!
//! An element names the other elements it is strong against, weak against
//! and compatible with. Relations are one-directional: Fire being strong
//! against Ice says nothing about what Ice does to Fire.

use serde::{Deserialize, Serialize};

/// An elemental type.
///
/// Immutable once registered; spells and mages share it through `Arc`.
///
/// ```
/// use mage_battle::elements::Element;
///
/// let fire = Element::new("Fire", ["Ice"], ["Water"], ["Lava"]);
/// let ice = Element::new("Ice", ["Grass"], [], []);
///
/// assert!(fire.is_strong_against(&ice));
/// assert!(fire.is_compatible_with(&fire));
/// assert!(!ice.is_compatible_with(&fire));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element name, unique within a registry.
    pub name: String,
    /// Elements this one deals double damage to.
    pub strong: Vec<String>,
    /// Elements this one deals half damage to.
    pub weak: Vec<String>,
    /// Elements whose casters may use spells of this element. Always contains `name`.
    pub compatible: Vec<String>,
}

impl Element {
    /// Create an element. The element is added to its own compatibility list.
    #[must_use]
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        strong: impl IntoIterator<Item = S>,
        weak: impl IntoIterator<Item = S>,
        compatible: impl IntoIterator<Item = S>,
    ) -> Self {
        let name = name.into();
        let mut compatible: Vec<String> = compatible.into_iter().map(Into::into).collect();
        if !compatible.contains(&name) {
            compatible.push(name.clone());
        }
        Self {
            name,
            strong: strong.into_iter().map(Into::into).collect(),
            weak: weak.into_iter().map(Into::into).collect(),
            compatible,
        }
    }

    /// Whether `other` casters may use spells of this element.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Element) -> bool {
        self.compatible.iter().any(|name| *name == other.name)
    }

    /// Whether this element deals extra damage to `other`.
    #[must_use]
    pub fn is_strong_against(&self, other: &Element) -> bool {
        self.strong.iter().any(|name| *name == other.name)
    }

    /// Whether this element deals reduced damage to `other`.
    ///
    /// This is about our damage output, not about what hurts us.
    #[must_use]
    pub fn is_weak_against(&self, other: &Element) -> bool {
        self.weak.iter().any(|name| *name == other.name)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
