//! Field identities and the raw values the form holds.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// One input of the contact form.
///
/// Declaration order is display order; `ValidationErrors` iterates in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Wire name, used for element ids and in validation messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Visible label text. Required fields carry a trailing `*`.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// HTML `type` for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    /// Whether the field renders as a `<textarea>`.
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current contents of every input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Snapshot of `FormValues` captured by an accepted submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedValues(FormValues);

impl SubmittedValues {
    pub(crate) fn capture(values: &FormValues) -> Self {
        Self(values.clone())
    }

    pub fn values(&self) -> &FormValues {
        &self.0
    }

    /// Whether the message line belongs in the submitted display.
    pub fn shows_message(&self, policy: MessageDisplay) -> bool {
        match policy {
            MessageDisplay::Hidden => false,
            MessageDisplay::WhenPresent => !self.0.message.is_empty(),
        }
    }
}

/// Controls whether the optional message appears after submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDisplay {
    /// Never show the message in the submitted display.
    #[default]
    Hidden,
    /// Show the message when it was non-empty at submit time.
    WhenPresent,
}
