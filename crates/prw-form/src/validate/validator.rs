use std::fmt;
use std::sync::Arc;

use crate::record::{FieldValue, FormRecord};

use super::rules;

type ValuePredicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;
type RecordPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

enum Rule<T> {
    /// The field value must be truthy.
    Required,
    Value(ValuePredicate),
    Record(RecordPredicate<T>),
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Required => Self::Required,
            Self::Value(p) => Self::Value(Arc::clone(p)),
            Self::Record(p) => Self::Record(Arc::clone(p)),
        }
    }
}

/// A predicate over one field and the message shown when it fails.
pub struct FieldValidator<T: FormRecord> {
    field: T::Field,
    message: String,
    rule: Rule<T>,
}

impl<T: FormRecord> FieldValidator<T> {
    /// Fails when the field value is falsy (empty, blank, zero, unchecked).
    pub fn required(field: T::Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            rule: Rule::Required,
        }
    }

    /// Fails when `predicate` rejects the field value.
    pub fn check(
        field: T::Field,
        message: impl Into<String>,
        predicate: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            rule: Rule::Value(Arc::new(predicate)),
        }
    }

    /// Fails when `predicate` rejects the whole record; the message is attached
    /// to `field`. Used for cross-field checks such as date ranges.
    pub fn check_record(
        field: T::Field,
        message: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            rule: Rule::Record(Arc::new(predicate)),
        }
    }

    /// Text field must hold a valid ABN when filled in.
    pub fn abn(field: T::Field, message: impl Into<String>) -> Self {
        Self::check(field, message, |value| {
            optional_text(value, rules::is_valid_abn)
        })
    }

    /// Text field must hold an Australian phone number when filled in.
    pub fn au_phone(field: T::Field, message: impl Into<String>) -> Self {
        Self::check(field, message, |value| {
            optional_text(value, rules::is_valid_au_phone)
        })
    }

    /// Text field must have at least `min` characters when filled in.
    pub fn min_len(field: T::Field, min: usize, message: impl Into<String>) -> Self {
        Self::check(field, message, move |value| {
            optional_text(value, |s| s.trim().chars().count() >= min)
        })
    }

    /// Date in `field` must not be earlier than the date in `start`.
    /// Passes while either date is unset.
    pub fn date_not_before(field: T::Field, start: T::Field, message: impl Into<String>) -> Self {
        Self::check_record(field, message, move |record: &T| {
            match (record.get(start).as_date(), record.get(field).as_date()) {
                (Some(from), Some(to)) => to >= from,
                _ => true,
            }
        })
    }

    #[inline]
    pub fn field(&self) -> T::Field {
        self.field
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate against the current record.
    pub fn passes(&self, record: &T) -> bool {
        match &self.rule {
            Rule::Required => record.get(self.field).is_truthy(),
            Rule::Value(predicate) => predicate(&record.get(self.field)),
            Rule::Record(predicate) => predicate(record),
        }
    }
}

fn optional_text(value: &FieldValue, check: impl Fn(&str) -> bool) -> bool {
    match value {
        FieldValue::Empty => true,
        FieldValue::Text(s) if s.trim().is_empty() => true,
        FieldValue::Text(s) => check(s),
        _ => false,
    }
}

impl<T: FormRecord> Clone for FieldValidator<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            message: self.message.clone(),
            rule: self.rule.clone(),
        }
    }
}

impl<T: FormRecord> fmt::Debug for FieldValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self.rule {
            Rule::Required => "required",
            Rule::Value(_) => "value",
            Rule::Record(_) => "record",
        };
        f.debug_struct("FieldValidator")
            .field("field", &self.field)
            .field("message", &self.message)
            .field("rule", &rule)
            .finish()
    }
}

/// Validators registered for a form, in registration order.
pub struct ValidatorSet<T: FormRecord> {
    validators: Vec<FieldValidator<T>>,
}

impl<T: FormRecord> ValidatorSet<T> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Builder-style registration.
    #[must_use]
    pub fn with(mut self, validator: FieldValidator<T>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn push(&mut self, validator: FieldValidator<T>) {
        self.validators.push(validator);
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidator<T>> {
        self.validators.iter()
    }

    /// Validators attached to `field`, in registration order.
    pub fn for_field(&self, field: T::Field) -> impl Iterator<Item = &FieldValidator<T>> {
        self.validators.iter().filter(move |v| v.field == field)
    }

    /// Distinct fields with at least one validator, in first-registration order.
    pub fn fields(&self) -> Vec<T::Field> {
        let mut fields: Vec<T::Field> = Vec::new();
        for validator in &self.validators {
            if !fields.contains(&validator.field) {
                fields.push(validator.field);
            }
        }
        fields
    }
}

impl<T: FormRecord> Default for ValidatorSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FormRecord> Clone for ValidatorSet<T> {
    fn clone(&self) -> Self {
        Self {
            validators: self.validators.clone(),
        }
    }
}

impl<T: FormRecord> fmt::Debug for ValidatorSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.validators).finish()
    }
}
