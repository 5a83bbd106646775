//! Opaque option values and their narrowing at field boundaries.
//!
//! Remote sources hand back option values in a handful of shapes: a bare
//! identifier, a free-text string, or a small record carrying an `id` and a
//! name column. [`OptionValue`] is the closed union of those shapes, and
//! [`ValueShape`] is the per-field narrowing step that turns a selected value
//! into the key a dependent lookup is issued with.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Structured value carried by records such as institutions, courses and units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    #[serde(alias = "course_name", alias = "unit_name", alias = "institution_name")]
    pub name: String,
}

impl EntityRef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Underlying value of a selectable option.
///
/// Serialized untagged so that `5`, `"TAE40116"`, `{"id": 5, "name": ".."}` and
/// `{"id": 5, "course_name": ".."}` all decode without a discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
    Entity(EntityRef),
}

impl OptionValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn entity(id: i64, name: impl Into<String>) -> Self {
        Self::Entity(EntityRef::new(id, name))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Entity(_) => "entity",
        }
    }

    /// Form truthiness: empty text and zero are falsy, records always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
            Self::Entity(_) => true,
        }
    }

    /// Numeric identifier, when the value carries one.
    pub fn numeric_id(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Entity(entity) => Some(entity.id),
            Self::Text(_) => None,
        }
    }

    /// Label derived from the value alone, for values missing from a catalogue.
    pub fn fallback_label(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Entity(entity) => entity.name.clone(),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<EntityRef> for OptionValue {
    fn from(value: EntityRef) -> Self {
        Self::Entity(value)
    }
}

/// Shape a parent value must have before a dependent field may load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueShape {
    /// A record carrying a numeric `id` (institution, course).
    #[default]
    EntityId,
    /// A bare number or a record carrying a numeric `id`.
    AnyNumber,
    /// Non-blank free text.
    NonEmptyText,
    /// Any truthy value.
    Any,
}

impl ValueShape {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EntityId => "a record with a numeric id",
            Self::AnyNumber => "a numeric id",
            Self::NonEmptyText => "non-empty text",
            Self::Any => "a non-empty value",
        }
    }

    /// Narrow a value into the key passed to a cascading fetch.
    pub fn narrow(&self, value: &OptionValue) -> Result<String> {
        let key = match (self, value) {
            (Self::EntityId, OptionValue::Entity(entity)) => Some(entity.id.to_string()),
            (Self::AnyNumber, v) => v.numeric_id().map(|id| id.to_string()),
            (Self::NonEmptyText, OptionValue::Text(s)) if !s.trim().is_empty() => {
                Some(s.trim().to_string())
            }
            (Self::Any, v) if v.is_truthy() => Some(match v {
                OptionValue::Number(n) => n.to_string(),
                OptionValue::Text(s) => s.clone(),
                OptionValue::Entity(entity) => entity.id.to_string(),
            }),
            _ => None,
        };

        key.ok_or(ModelError::ShapeMismatch {
            expected: *self,
            found: value.kind(),
        })
    }
}
