//! Screen modules for the contact form TUI

pub mod contact_form;

pub use contact_form::ContactFormScreen;
