//! Form error types.
//!
//! Validation failures are not errors: they are messages stored per field in
//! the form state. `FormError` covers programming mistakes at the form
//! boundary (wrong value kind for a field, inconsistent row data, a cyclic
//! field graph).

use prw_model::RowId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// A value of the wrong kind was written to a field.
    #[error("field `{field}` expects {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Two rows in one collection share a row id.
    #[error("duplicate row id {0}")]
    DuplicateRowId(RowId),

    /// The declared field dependencies form a cycle.
    #[error("field dependency cycle through {field}")]
    CyclicDependency { field: String },

    /// A field was declared as its own parent.
    #[error("field {field} cannot depend on itself")]
    SelfDependency { field: String },
}

pub type Result<T> = std::result::Result<T, FormError>;
