//! Selectable options and option-list helpers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::value::OptionValue;

/// Prefix of ids synthesized for free-text options.
pub const TYPED_ID_PREFIX: &str = "new:";

/// One selectable choice in a dropdown or searchable select.
///
/// `id` is unique within one option list. `is_new` is set only for options
/// synthesized from free-text input that is not present in the backing source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub value: OptionValue,
    pub label: String,
    #[serde(default)]
    pub is_new: bool,
}

impl SelectOption {
    /// Create an option backed by an existing source value.
    pub fn new(
        id: impl Into<String>,
        value: impl Into<OptionValue>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            label: label.into(),
            is_new: false,
        }
    }

    /// Create an option from an `{id, name}` record, labelled by its name.
    pub fn entity(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.to_string(),
            label: name.clone(),
            value: OptionValue::entity(id, name),
            is_new: false,
        }
    }

    /// Create an option from text the user typed that matched nothing.
    pub fn typed(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: format!("{TYPED_ID_PREFIX}{label}"),
            value: OptionValue::Text(label.clone()),
            label,
            is_new: true,
        }
    }

    /// Rebuild an option from a stored value when no catalogue entry is available.
    pub fn from_value(value: OptionValue) -> Self {
        let label = value.fallback_label();
        let id = match &value {
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Text(s) => s.clone(),
            OptionValue::Entity(entity) => entity.id.to_string(),
        };
        Self {
            id,
            value,
            label,
            is_new: false,
        }
    }

    /// Case-insensitive label match against typed input.
    pub fn label_matches(&self, input: &str) -> bool {
        self.label.trim().eq_ignore_ascii_case(input.trim())
    }
}

/// Options whose label contains `query`, ignoring case. A blank query keeps all.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// First option carrying `value`.
pub fn find_by_value<'a>(
    options: &'a [SelectOption],
    value: &OptionValue,
) -> Option<&'a SelectOption> {
    options.iter().find(|o| &o.value == value)
}

/// First option whose label equals `label`, ignoring case and surrounding space.
pub fn find_by_label<'a>(options: &'a [SelectOption], label: &str) -> Option<&'a SelectOption> {
    options.iter().find(|o| o.label_matches(label))
}

/// Drop options whose id was already seen. Returns the kept list and the drop count.
pub fn dedup_by_id(options: Vec<SelectOption>) -> (Vec<SelectOption>, usize) {
    let before = options.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<SelectOption> = options
        .into_iter()
        .filter(|o| seen.insert(o.id.clone()))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
