//! Creatable multi-select state.

use prw_model::{EquivalenceRecord, SelectOption, find_by_label};
use tracing::debug;

use crate::equivalence::EquivalenceEncoder;

/// Options picked in a multi-select that also accepts free text.
///
/// At most one free-text option is held at a time; creating another replaces
/// it, matching the single overflow field of an [`EquivalenceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiSelection {
    selected: Vec<SelectOption>,
}

impl MultiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a selection from a stored record.
    pub fn from_record(record: &EquivalenceRecord, catalogue: &[SelectOption]) -> Self {
        Self {
            selected: EquivalenceEncoder::decode(record, catalogue),
        }
    }

    #[inline]
    pub fn selected(&self) -> &[SelectOption] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|o| o.id == id)
    }

    /// Add an option. Returns `false` when an option with the same id is
    /// already selected.
    pub fn select(&mut self, option: SelectOption) -> bool {
        if self.contains(&option.id) {
            return false;
        }
        if option.is_new {
            self.selected.retain(|o| !o.is_new);
        }
        self.selected.push(option);
        true
    }

    /// Handle text the user asked to create.
    ///
    /// When `catalogue` already has an option with that label it is selected
    /// instead; otherwise a new option replaces any earlier free-text entry.
    /// Blank input is ignored.
    pub fn create(&mut self, input: &str, catalogue: &[SelectOption]) -> Option<&SelectOption> {
        let label = input.trim();
        if label.is_empty() {
            return None;
        }

        let option = match find_by_label(catalogue, label) {
            Some(existing) => {
                debug!(label, id = %existing.id, "typed label matches an existing option");
                existing.clone()
            }
            None => SelectOption::typed(label),
        };
        let id = option.id.clone();
        self.select(option);
        self.selected.iter().find(|o| o.id == id)
    }

    /// Remove the option with `id`, returning it when it was selected.
    pub fn remove(&mut self, id: &str) -> Option<SelectOption> {
        let idx = self.selected.iter().position(|o| o.id == id)?;
        Some(self.selected.remove(idx))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn encode(&self) -> EquivalenceRecord {
        EquivalenceEncoder::encode(&self.selected)
    }
}
