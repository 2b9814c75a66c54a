//! JSON content loading.
//!
//! A content document has two top-level arrays, `elements` and `spells`.
//! Elements load first since spells refer to them by name. A missing or
//! non-array section aborts the load before anything is registered; any
//! other problem skips just the offending entry.
//!
//! ```json
//! {
//!   "elements": [
//!     { "name": "Fire", "strong": ["Ice"], "weak": ["Water"], "compatible": ["Lava"] }
//!   ],
//!   "spells": [
//!     {
//!       "name": "Fireball",
//!       "element": "Fire",
//!       "type": "single",
//!       "effects": [
//!         { "type": "attack", "power": "80", "accuracy": "95", "critical_hit_prob": "10" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::core::Stat;
use crate::effects::{Effect, EffectKind, HealingEffect, DEFAULT_ACCURACY};
use crate::elements::{Element, ElementRegistry};
use crate::error::ContentError;
use crate::spells::{CastKind, Spell};

use super::attributes::EffectAttributes;
use super::library::ContentLibrary;

/// Outcome of a content load that did not abort.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Elements registered.
    pub elements: usize,
    /// Spells registered.
    pub spells: usize,
    /// Entries that were skipped, with the reason.
    pub skipped: Vec<ContentError>,
}

impl LoadReport {
    /// Whether every entry loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, error: ContentError) {
        warn!(%error, "skipping content entry");
        self.skipped.push(error);
    }
}

/// Loads content documents into a [`ContentLibrary`].
///
/// Loading into a library that already has content adds to it; entries
/// with an existing name replace the old ones.
pub struct ContentLoader<'a> {
    library: &'a mut ContentLibrary,
    report: LoadReport,
}

impl<'a> ContentLoader<'a> {
    pub fn new(library: &'a mut ContentLibrary) -> Self {
        Self {
            library,
            report: LoadReport::default(),
        }
    }

    /// Read and load a JSON file.
    pub fn load_path(self, path: impl AsRef<Path>) -> Result<LoadReport, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&json)
    }

    /// Parse and load a JSON document.
    pub fn load_str(self, json: &str) -> Result<LoadReport, ContentError> {
        let root: Value = serde_json::from_str(json)?;
        self.load_value(&root)
    }

    /// Load an already parsed document.
    pub fn load_value(mut self, root: &Value) -> Result<LoadReport, ContentError> {
        let elements = section(root, "elements")?;
        let spells = section(root, "spells")?;

        for (index, entry) in elements.iter().enumerate() {
            match load_element(self.library.elements_mut(), index, entry) {
                Ok(()) => self.report.elements += 1,
                Err(error) => self.report.skip(error),
            }
        }

        for (index, entry) in spells.iter().enumerate() {
            match build_spell(self.library.elements(), index, entry) {
                Ok(spell) => {
                    self.library.spells_mut().insert(spell);
                    self.report.spells += 1;
                }
                Err(error) => self.report.skip(error),
            }
        }

        info!(
            elements = self.report.elements,
            spells = self.report.spells,
            skipped = self.report.skipped.len(),
            "content loaded"
        );
        Ok(self.report)
    }
}

fn section<'v>(root: &'v Value, name: &'static str) -> Result<&'v Vec<Value>, ContentError> {
    root.get(name)
        .and_then(Value::as_array)
        .ok_or(ContentError::MissingSection(name))
}

fn entry<'v>(
    value: &'v Value,
    kind: &'static str,
    index: usize,
) -> Result<(&'v Map<String, Value>, &'v str), ContentError> {
    let object = value
        .as_object()
        .ok_or(ContentError::MalformedEntry { kind, index })?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ContentError::MissingName { kind, index })?;
    Ok((object, name))
}

/// Element names listed under `key`. Non-string items are ignored.
fn name_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn load_element(
    registry: &mut ElementRegistry,
    index: usize,
    value: &Value,
) -> Result<(), ContentError> {
    let (object, name) = entry(value, "element", index)?;
    registry.insert(Element::new(
        name,
        name_list(object, "strong"),
        name_list(object, "weak"),
        name_list(object, "compatible"),
    ));
    Ok(())
}

fn build_spell(elements: &ElementRegistry, index: usize, value: &Value) -> Result<Spell, ContentError> {
    let (object, name) = entry(value, "spell", index)?;

    let element_name = object
        .get("element")
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::MissingElement {
            spell: name.to_string(),
        })?;
    let element = resolve_element(elements, name, element_name)?;

    let tag = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::MissingSpellType {
            spell: name.to_string(),
        })?;
    let kind = CastKind::from_content_tag(tag).ok_or_else(|| ContentError::UnknownSpellType {
        spell: name.to_string(),
        kind: tag.to_string(),
    })?;

    let effects = match object.get("effects") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| build_effect(elements, name, &element, i, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(ContentError::MalformedEntry {
                kind: "spell",
                index,
            })
        }
    };

    Ok(Spell::new(name, element, kind, effects))
}

fn resolve_element(
    elements: &ElementRegistry,
    spell: &str,
    element: &str,
) -> Result<Arc<Element>, ContentError> {
    elements
        .get(element)
        .cloned()
        .ok_or_else(|| ContentError::UnknownElement {
            spell: spell.to_string(),
            element: element.to_string(),
        })
}

fn build_effect(
    elements: &ElementRegistry,
    spell: &str,
    spell_element: &Arc<Element>,
    index: usize,
    value: &Value,
) -> Result<Effect, ContentError> {
    let object = value.as_object().ok_or(ContentError::MalformedEntry {
        kind: "effect",
        index,
    })?;
    let tag = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::MissingEffectType {
            spell: spell.to_string(),
        })?;
    let kind = EffectKind::from_content_tag(tag).ok_or_else(|| ContentError::UnknownEffectType {
        spell: spell.to_string(),
        effect: tag.to_string(),
    })?;

    let mut attrs = EffectAttributes::from_object(spell, kind.content_tag(), object)?;

    let element = match attrs.take_text("element")? {
        Some(name) => resolve_element(elements, spell, &name)?,
        None => Arc::clone(spell_element),
    };
    let power = attrs.require_int("power")?;

    let effect = match kind {
        EffectKind::Attack => {
            let (accuracy, critical) = attack_rolls(&mut attrs)?;
            Effect::attack(element, power, accuracy, critical)
        }
        EffectKind::ReboundAttack => {
            let (accuracy, critical) = attack_rolls(&mut attrs)?;
            let rebound = attrs.require_int("rebound")?;
            Effect::rebound_attack(element, power, accuracy, critical, rebound)
        }
        EffectKind::LeechAttack => {
            let (accuracy, critical) = attack_rolls(&mut attrs)?;
            let leech = attrs.require_int("leech")?;
            Effect::leech_attack(element, power, accuracy, critical, leech)
        }
        EffectKind::BoostStat => {
            let stat = stat_attribute(&mut attrs)?;
            Effect::boost(element, stat, power)
        }
        EffectKind::ReduceStat => {
            let accuracy = attrs.take_int("accuracy")?.unwrap_or(DEFAULT_ACCURACY);
            let stat = stat_attribute(&mut attrs)?;
            Effect::reduce(element, stat, power, accuracy)
        }
        EffectKind::Heal => {
            let accuracy = attrs.take_int("accuracy")?.unwrap_or(DEFAULT_ACCURACY);
            Effect::Heal(HealingEffect {
                element,
                power,
                accuracy,
            })
        }
    };

    attrs.finish()?;
    Ok(effect)
}

fn attack_rolls(attrs: &mut EffectAttributes<'_>) -> Result<(i32, i32), ContentError> {
    let accuracy = attrs.take_int("accuracy")?.unwrap_or(DEFAULT_ACCURACY);
    let critical = attrs.take_int("critical_hit_prob")?.unwrap_or(0);
    Ok((accuracy, critical))
}

fn stat_attribute(attrs: &mut EffectAttributes<'_>) -> Result<Stat, ContentError> {
    let raw = attrs.require_text("stat")?;
    raw.parse().map_err(|_| attrs.invalid("stat", &raw))
}
