//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their form-local signals and delegate every state
//! transition to the `form` model.

pub mod contact_form;
pub mod submitted_display;
