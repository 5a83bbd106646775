//! Fixed-arity storage for bounded multi-selections.

use serde::{Deserialize, Serialize};

use crate::value::OptionValue;

/// Number of equivalence slots a record can hold.
pub const EQUIVALENCE_SLOTS: usize = 3;

/// Three opaque equivalence slots plus one free-text overflow field.
///
/// Slots are filled in selection order by existing options; the overflow field
/// holds the label of the single free-text entry, empty when there is none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquivalenceRecord {
    pub slots: [Option<OptionValue>; EQUIVALENCE_SLOTS],
    #[serde(default)]
    pub overflow_text: String,
}

impl EquivalenceRecord {
    /// Value in a 1-based slot, as the form fields `slot1..slot3` name them.
    pub fn slot(&self, position: usize) -> Option<&OptionValue> {
        position
            .checked_sub(1)
            .and_then(|idx| self.slots.get(idx))
            .and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow_text.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0 && !self.has_overflow()
    }
}
