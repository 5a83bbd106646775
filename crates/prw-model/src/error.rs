use thiserror::Error;

use crate::value::ValueShape;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("expected {}, found {found} value", expected.label())]
    ShapeMismatch {
        expected: ValueShape,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
