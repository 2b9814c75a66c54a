//! Effect attributes read from content files.
//!
//! Content authors write numbers either as JSON numbers or as strings.
//! Well-formed integer strings are coerced to integers; anything else
//! stays text (the `stat` and `element` attributes are text).
//!
//! ## AttributeValue Types
//!
//! - `Int`: power, accuracy, critical_hit_prob, rebound, leech
//! - `Text`: stat names, element overrides

use std::fmt;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::error::ContentError;

/// Value of an effect attribute after coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Int(i64),
    Text(String),
}

impl AttributeValue {
    /// Coerce raw text, keeping it as text unless it is a whole integer.
    ///
    /// ```
    /// use mage_battle::content::AttributeValue;
    ///
    /// assert_eq!(AttributeValue::coerce("80"), AttributeValue::Int(80));
    /// assert_eq!(AttributeValue::coerce(" -3 "), AttributeValue::Int(-3));
    /// assert_eq!(AttributeValue::coerce("speed"), AttributeValue::Text("speed".into()));
    /// ```
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(v) => AttributeValue::Int(v),
            Err(_) => AttributeValue::Text(raw.to_string()),
        }
    }

    /// Convert a JSON scalar. Booleans, nulls, arrays and objects are rejected.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::coerce(s)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(v) => AttributeValue::Int(v),
                None => AttributeValue::Text(n.to_string()),
            }),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            AttributeValue::Text(_) => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Int(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// Attributes of one effect descriptor, consumed as the effect is built.
///
/// Every attribute must be taken exactly once; [`finish`](Self::finish)
/// rejects leftovers, so a misspelled attribute skips the spell instead of
/// being silently ignored.
#[derive(Clone, Debug)]
pub struct EffectAttributes<'a> {
    spell: &'a str,
    effect: &'static str,
    values: FxHashMap<String, AttributeValue>,
}

impl<'a> EffectAttributes<'a> {
    /// Collect every attribute of `object` except the `type` tag.
    pub fn from_object(
        spell: &'a str,
        effect: &'static str,
        object: &Map<String, Value>,
    ) -> Result<Self, ContentError> {
        let mut values = FxHashMap::default();
        for (key, raw) in object {
            if key == "type" {
                continue;
            }
            let value = AttributeValue::from_json(raw).ok_or_else(|| ContentError::InvalidAttribute {
                spell: spell.to_string(),
                attribute: key.clone(),
                value: raw.to_string(),
            })?;
            values.insert(key.clone(), value);
        }
        Ok(Self {
            spell,
            effect,
            values,
        })
    }

    /// Number of attributes not yet taken.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Take an optional integer attribute.
    pub fn take_int(&mut self, name: &'static str) -> Result<Option<i32>, ContentError> {
        let Some(value) = self.values.remove(name) else {
            return Ok(None);
        };
        value
            .as_int()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| self.invalid(name, &value))
    }

    /// Take a required integer attribute.
    pub fn require_int(&mut self, name: &'static str) -> Result<i32, ContentError> {
        self.take_int(name)?.ok_or_else(|| self.missing(name))
    }

    /// Take an optional text attribute. Integers are rendered back to text.
    pub fn take_text(&mut self, name: &'static str) -> Result<Option<String>, ContentError> {
        Ok(self.values.remove(name).map(|value| value.to_string()))
    }

    /// Take a required text attribute.
    pub fn require_text(&mut self, name: &'static str) -> Result<String, ContentError> {
        self.take_text(name)?.ok_or_else(|| self.missing(name))
    }

    /// Error for an attribute whose value cannot be used.
    pub fn invalid(&self, name: &str, value: &dyn fmt::Display) -> ContentError {
        ContentError::InvalidAttribute {
            spell: self.spell.to_string(),
            attribute: name.to_string(),
            value: value.to_string(),
        }
    }

    fn missing(&self, name: &'static str) -> ContentError {
        ContentError::MissingAttribute {
            spell: self.spell.to_string(),
            effect: self.effect,
            attribute: name,
        }
    }

    /// Reject any attribute the effect did not take.
    pub fn finish(self) -> Result<(), ContentError> {
        match self.values.keys().min() {
            Some(extra) => Err(ContentError::UnexpectedAttribute {
                spell: self.spell.to_string(),
                effect: self.effect,
                attribute: extra.clone(),
            }),
            None => Ok(()),
        }
    }
}
