//! Form engine for the provider registration wizard.
//!
//! Every form in the wizard is a [`GenericFormState`] over a record type that
//! implements [`FormRecord`]. On top of that sit:
//!
//! - [`FieldValidator`] / [`ValidatorSet`] - per-field checks, including ABN and
//!   Australian phone number rules
//! - [`EquivalenceEncoder`] / [`MultiSelection`] - bounded multi-selections
//!   stored as three slots plus a free-text overflow
//! - [`RowCollectionEditor`] - edits to server-identified rows that keep
//!   untouched rows shared
//! - [`FieldGraph`] / [`CascadeController`] - parent/child selects declared once
//!   and driven from the form
//!
//! Nothing in this crate performs I/O. Fetches are described by tickets and
//! run by the caller through `prw-lookup`.

pub mod cascade;
pub mod equivalence;
pub mod error;
pub mod graph;
pub mod multi_select;
pub mod record;
pub mod rows;
pub mod state;
pub mod validate;

#[cfg(test)]
mod fixtures;

pub use cascade::CascadeController;
pub use equivalence::{EncodeOutcome, EquivalenceEncoder};
pub use error::{FormError, Result};
pub use graph::{FieldGraph, FieldGraphBuilder};
pub use multi_select::MultiSelection;
pub use record::{FieldValue, FormRecord};
pub use rows::RowCollectionEditor;
pub use state::GenericFormState;
pub use validate::{FieldValidator, ValidatorSet, rules};
