//! Field validation.
//!
//! A validator is a pure predicate plus the message shown when it fails. The
//! form runs a field's validators on blur and every validator on submit.

pub mod rules;
mod validator;

pub use validator::{FieldValidator, ValidatorSet};
