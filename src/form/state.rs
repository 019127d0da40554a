//! Form-local state driven by input and submit events.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `ContactForm` component holds one `ContactFormState` in an `RwSignal`
//! and forwards DOM events to `on_change` / `on_submit`. Keeping the
//! transitions here lets them run without a browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use super::validate::{ValidationErrors, validate_all, validate_field};
use super::values::{Field, FormValues, SubmittedValues};

/// Values, current errors, and the last accepted snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub values: FormValues,
    pub errors: ValidationErrors,
    pub submitted: Option<SubmittedValues>,
}

/// Result of a submit attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    /// All required fields passed; the snapshot was replaced.
    Accepted(&'a SubmittedValues),
    /// Validation failed; the previous snapshot (if any) is untouched.
    Rejected { error_count: usize },
}

impl ContactFormState {
    /// Seed a form with existing values, validating nothing until an event fires.
    pub fn with_values(values: FormValues) -> Self {
        Self { values, ..Self::default() }
    }

    /// Store a new value for `field` and revalidate that field only.
    pub fn on_change(&mut self, field: Field, value: String) {
        let result = validate_field(field, &value);
        self.values.set(field, value);
        self.errors.apply(field, result);
    }

    /// Validate every field and snapshot the values when they all pass.
    pub fn on_submit(&mut self) -> SubmitOutcome<'_> {
        self.errors = validate_all(&self.values);
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected { error_count: self.errors.len() };
        }
        SubmitOutcome::Accepted(self.submitted.insert(SubmittedValues::capture(&self.values)))
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }
}
