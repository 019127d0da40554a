//! Contact form model: fields, validation schema, and event-driven state.
//!
//! ARCHITECTURE
//! ============
//! `values` names the fields and holds their contents, `validate` owns the
//! schema and error types, and `state` applies input/submit events. None of
//! it depends on Leptos.

pub mod state;
pub mod validate;
pub mod values;

pub use state::{ContactFormState, SubmitOutcome};
pub use validate::{FieldError, ValidationErrors};
pub use values::{Field, FormValues, MessageDisplay, SubmittedValues};
