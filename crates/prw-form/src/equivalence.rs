//! Encoding of a creatable multi-selection into an [`EquivalenceRecord`].
//!
//! The record has three slots for existing options and one free-text overflow
//! field. Encoding is lossy past that boundary:
//!
//! - existing options fill slots in selection order; the fourth and later are dropped
//! - each new option overwrites the overflow label, so only the last one survives

use prw_model::{EQUIVALENCE_SLOTS, EquivalenceRecord, SelectOption, find_by_value};
use tracing::{debug, warn};

/// Result of [`EquivalenceEncoder::encode_detailed`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodeOutcome {
    pub record: EquivalenceRecord,
    /// Options the record could not hold, in selection order: existing
    /// options past the last slot and new options with a blank label.
    pub dropped: Vec<SelectOption>,
    /// Overflow labels that a later new option overwrote.
    pub replaced_overflow: Vec<String>,
}

impl EncodeOutcome {
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty() && self.replaced_overflow.is_empty()
    }
}

/// Maps selected options to and from an [`EquivalenceRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EquivalenceEncoder;

impl EquivalenceEncoder {
    pub fn encode(options: &[SelectOption]) -> EquivalenceRecord {
        Self::encode_detailed(options).record
    }

    /// Encode and report what the record could not hold.
    pub fn encode_detailed(options: &[SelectOption]) -> EncodeOutcome {
        let mut outcome = EncodeOutcome::default();
        let mut next_slot = 0;

        for option in options {
            if option.is_new && option.label.trim().is_empty() {
                debug!(id = %option.id, "blank free-text option not stored");
                outcome.dropped.push(option.clone());
            } else if option.is_new {
                let overflow = &mut outcome.record.overflow_text;
                let previous = std::mem::replace(overflow, option.label.clone());
                if !previous.is_empty() {
                    warn!(previous = %previous, label = %option.label, "overflow label replaced");
                    outcome.replaced_overflow.push(previous);
                }
            } else if next_slot < EQUIVALENCE_SLOTS {
                outcome.record.slots[next_slot] = Some(option.value.clone());
                next_slot += 1;
            } else {
                outcome.dropped.push(option.clone());
            }
        }

        let truncated = outcome.dropped.iter().filter(|o| !o.is_new).count();
        if truncated > 0 {
            warn!(
                selected = options.len(),
                dropped = truncated,
                slots = EQUIVALENCE_SLOTS,
                "equivalence selection truncated"
            );
        }
        outcome
    }

    /// Rebuild the selection from a record.
    ///
    /// Slot values are looked up in `catalogue` for their labels; a value the
    /// catalogue lacks gets a label derived from the value itself. A non-empty
    /// overflow label is appended as a new option.
    pub fn decode(record: &EquivalenceRecord, catalogue: &[SelectOption]) -> Vec<SelectOption> {
        let mut options: Vec<SelectOption> = record
            .slots
            .iter()
            .flatten()
            .map(|value| match find_by_value(catalogue, value) {
                Some(option) => option.clone(),
                None => {
                    debug!(
                        value = %value.fallback_label(),
                        "equivalence value missing from catalogue"
                    );
                    SelectOption::from_value(value.clone())
                }
            })
            .collect();

        if record.has_overflow() {
            options.push(SelectOption::typed(record.overflow_text.clone()));
        }
        options
    }
}
