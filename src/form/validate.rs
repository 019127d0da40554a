//! Declarative validation schema for the contact form.
//!
//! DESIGN
//! ======
//! Each field maps to an ordered list of `Rule`s. A field is checked rule by
//! rule and reports the first failure, so an empty first name reads as
//! "required" rather than "too short". Values are checked verbatim; nothing
//! is trimmed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::values::{Field, FormValues};

/// Minimum character count for `firstName`.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// `local@label(.label)+`. At least one dot is required after the `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// A single constraint in the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLen(usize),
    Email,
}

/// Rules per field, checked in order.
pub fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::FirstName => &[Rule::Required, Rule::MinLen(FIRST_NAME_MIN_LEN)],
        Field::LastName => &[Rule::Required],
        Field::Email => &[Rule::Required, Rule::Email],
        Field::Message => &[],
    }
}

/// A field is required when its rules can reject an empty value.
pub fn is_required(field: Field) -> bool {
    rules(field).contains(&Rule::Required)
}

/// Why a field is currently invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} is a required field")]
    Required { field: Field },
    #[error("{field} requires {min} or more characters")]
    TooShort { field: Field, min: usize },
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: Field },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field } | Self::TooShort { field, .. } | Self::InvalidEmail { field } => *field,
        }
    }
}

impl Rule {
    fn check(self, field: Field, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Required if value.is_empty() => Err(FieldError::Required { field }),
            Self::MinLen(min) if value.chars().count() < min => Err(FieldError::TooShort { field, min }),
            Self::Email if !is_email_shape(value) => Err(FieldError::InvalidEmail { field }),
            _ => Ok(()),
        }
    }
}

pub fn is_email_shape(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate one field value against its schema entry.
///
/// # Errors
///
/// Returns the first rule the value fails.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    rules(field).iter().try_for_each(|rule| rule.check(field, value))
}

/// Validate every field; the result holds one entry per failing field.
pub fn validate_all(values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        errors.apply(field, validate_field(field, values.get(field)));
    }
    errors
}

/// Per-field validation failures, ordered by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.by_field.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.by_field.values()
    }

    /// Record a field's latest validation result, replacing any prior entry.
    pub(crate) fn apply(&mut self, field: Field, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.by_field.remove(&field);
            }
            Err(error) => {
                self.by_field.insert(field, error);
            }
        }
    }
}
