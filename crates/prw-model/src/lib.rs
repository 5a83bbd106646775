//! Data model for the provider registration wizard.
//!
//! These are the value types every form in the wizard composes:
//!
//! - [`SelectOption`] / [`OptionValue`] - one selectable choice and its opaque value
//! - [`ValueShape`] - narrowing of a parent value before a dependent lookup
//! - [`LookupState`] - state of one cascading field
//! - [`EquivalenceRecord`] - three equivalence slots plus a free-text overflow
//! - [`Row`] / [`RowId`] - server-identified records in an editable collection

pub mod equivalence;
pub mod error;
pub mod lookup;
pub mod option;
pub mod row;
pub mod value;

pub use equivalence::{EQUIVALENCE_SLOTS, EquivalenceRecord};
pub use error::{ModelError, Result};
pub use lookup::LookupState;
pub use option::{
    SelectOption, TYPED_ID_PREFIX, dedup_by_id, filter_options, find_by_label, find_by_value,
};
pub use row::{Row, RowId};
pub use value::{EntityRef, OptionValue, ValueShape};
