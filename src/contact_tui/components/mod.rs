//! Reusable UI components for the contact form TUI

pub mod form_field;

pub use form_field::FormField;
