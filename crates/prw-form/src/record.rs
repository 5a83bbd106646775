//! Record shapes and the values their fields hold.
//!
//! A form is generic over any record implementing [`FormRecord`]. Field keys
//! are a closed enum per record, so addressing a field the record does not
//! have is a compile error rather than a runtime surprise.

use std::fmt::Debug;

use chrono::NaiveDate;
use prw_model::OptionValue;

use crate::error::{FormError, Result};

/// Value of one form field, independent of the record it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Number(i64),
    Flag(bool),
    Date(NaiveDate),
    Choice(OptionValue),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Flag(_) => "flag",
            Self::Date(_) => "date",
            Self::Choice(_) => "choice",
        }
    }

    /// Whether a required-field check passes for this value.
    ///
    /// Empty, empty text, zero and `false` are falsy; a choice is as truthy as
    /// its underlying value.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0,
            Self::Flag(b) => *b,
            Self::Date(_) => true,
            Self::Choice(value) => value.is_truthy(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&OptionValue> {
        match self {
            Self::Choice(value) => Some(value),
            _ => None,
        }
    }

    /// Text field contents; `Empty` reads as an empty string.
    pub fn into_text(self, field: &'static str) -> Result<String> {
        match self {
            Self::Empty => Ok(String::new()),
            Self::Text(s) => Ok(s),
            other => Err(mismatch(field, "text", &other)),
        }
    }

    pub fn into_number(self, field: &'static str) -> Result<Option<i64>> {
        match self {
            Self::Empty => Ok(None),
            Self::Number(n) => Ok(Some(n)),
            other => Err(mismatch(field, "a number", &other)),
        }
    }

    /// Checkbox state; `Empty` reads as unchecked.
    pub fn into_flag(self, field: &'static str) -> Result<bool> {
        match self {
            Self::Empty => Ok(false),
            Self::Flag(b) => Ok(b),
            other => Err(mismatch(field, "a flag", &other)),
        }
    }

    pub fn into_date(self, field: &'static str) -> Result<Option<NaiveDate>> {
        match self {
            Self::Empty => Ok(None),
            Self::Date(d) => Ok(Some(d)),
            other => Err(mismatch(field, "a date", &other)),
        }
    }

    pub fn into_choice(self, field: &'static str) -> Result<Option<OptionValue>> {
        match self {
            Self::Empty => Ok(None),
            Self::Choice(value) => Ok(Some(value)),
            other => Err(mismatch(field, "a choice", &other)),
        }
    }
}

fn mismatch(field: &'static str, expected: &'static str, found: &FieldValue) -> FormError {
    FormError::TypeMismatch {
        field,
        expected,
        found: found.kind(),
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<OptionValue> for FieldValue {
    fn from(value: OptionValue) -> Self {
        Self::Choice(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// A record shape a form can be built over.
///
/// ```ignore
/// impl FormRecord for Qualification {
///     type Field = QualificationField;
///     const FIELDS: &'static [QualificationField] = &[QualificationField::Title, ..];
///
///     fn field_name(field: QualificationField) -> &'static str { .. }
///     fn get(&self, field: QualificationField) -> FieldValue { .. }
///     fn set(&mut self, field: QualificationField, value: FieldValue) -> Result<()> {
///         match field {
///             QualificationField::Title => self.title = value.into_text("title")?,
///             ..
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait FormRecord: Clone + 'static {
    /// Closed set of field keys.
    type Field: Copy + Eq + Ord + Debug + Send + Sync + 'static;

    /// Every field, in display order.
    const FIELDS: &'static [Self::Field];

    fn field_name(field: Self::Field) -> &'static str;

    fn get(&self, field: Self::Field) -> FieldValue;

    /// Write one field. Fails when `value` is not of the field's kind.
    fn set(&mut self, field: Self::Field, value: FieldValue) -> Result<()>;
}
