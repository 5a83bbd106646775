//! Generic form state.
//!
//! [`GenericFormState`] holds the current values of a record and one error
//! message slot per field. Validation writes into those slots; nothing here
//! talks to the network.
//!
//! A submit runs every registered validator before the valid flag is read,
//! so the user sees all field errors at once:
//!
//! ```ignore
//! let mut form = GenericFormState::new(Organisation::default());
//! form.set_field(OrgField::OrgId, "")?;
//! form.submit(&validators, |valid, record| {
//!     if valid {
//!         api.save_organisation(record);
//!     }
//! });
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::Result;
use crate::record::{FieldValue, FormRecord};
use crate::validate::{FieldValidator, ValidatorSet};

/// Current values, per-field errors and the valid flag of one validation pass.
#[derive(Debug, Clone)]
pub struct GenericFormState<T: FormRecord> {
    template: T,
    values: T,
    errors: BTreeMap<T::Field, String>,
    valid: bool,
}

impl<T: FormRecord> GenericFormState<T> {
    /// Start a form from its zero-value template.
    pub fn new(template: T) -> Self {
        Self {
            values: template.clone(),
            template,
            errors: BTreeMap::new(),
            valid: true,
        }
    }

    #[inline]
    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn into_values(self) -> T {
        self.values
    }

    pub fn field(&self, field: T::Field) -> FieldValue {
        self.values.get(field)
    }

    /// Write one field, leaving every other field untouched.
    pub fn set_field(&mut self, field: T::Field, value: impl Into<FieldValue>) -> Result<()> {
        self.values.set(field, value.into())
    }

    #[inline]
    pub fn errors(&self) -> &BTreeMap<T::Field, String> {
        &self.errors
    }

    pub fn error(&self, field: T::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Start a validation pass; the valid flag stays set until a check fails.
    pub fn begin_pass(&mut self) {
        self.valid = true;
    }

    /// Outcome of the current pass. Read it only after every check has run.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Required-field check: a falsy value records `message` and fails the pass.
    pub fn validate_field(&mut self, field: T::Field, message: impl Into<String>) -> bool {
        let passed = self.values.get(field).is_truthy();
        self.record(field, (!passed).then(|| message.into()))
    }

    /// Run one validator and record its outcome on its field.
    pub fn apply(&mut self, validator: &FieldValidator<T>) -> bool {
        let failure = (!validator.passes(&self.values)).then(|| validator.message().to_string());
        self.record(validator.field(), failure)
    }

    /// Run the validators of one field, as on blur.
    ///
    /// The first failing validator's message is shown; the field's error is
    /// cleared when all of them pass.
    pub fn validate_on_blur(&mut self, field: T::Field, validators: &ValidatorSet<T>) -> bool {
        let failures: Vec<&str> = validators
            .for_field(field)
            .filter(|v| !v.passes(&self.values))
            .map(FieldValidator::message)
            .collect();
        let failure = failures.first().map(|m| (*m).to_string());
        self.record(field, failure)
    }

    /// Run every registered validator in a fresh pass and return the outcome.
    ///
    /// No field short-circuits another: all fields are checked before the
    /// flag is returned.
    pub fn run(&mut self, validators: &ValidatorSet<T>) -> bool {
        self.begin_pass();
        for field in validators.fields() {
            self.validate_on_blur(field, validators);
        }
        self.valid
    }

    /// Validate everything, then hand the outcome and the record to `on_submit`.
    ///
    /// The callback is invoked exactly once per call, whether or not the form
    /// is valid, so the caller decides whether to proceed.
    pub fn submit<R>(
        &mut self,
        validators: &ValidatorSet<T>,
        on_submit: impl FnOnce(bool, &T) -> R,
    ) -> R {
        let valid = self.run(validators);
        debug!(valid, errors = self.errors.len(), "form submitted");
        on_submit(valid, &self.values)
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.valid = true;
    }

    /// Restore the template values and drop all errors.
    pub fn reset(&mut self) {
        self.values = self.template.clone();
        self.clear_errors();
    }

    fn record(&mut self, field: T::Field, failure: Option<String>) -> bool {
        match failure {
            Some(message) => {
                self.errors.insert(field, message);
                self.valid = false;
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }
}
