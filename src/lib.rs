//! Contact form with live field validation
//!
//! [`form`] holds the validation state machine; [`contact_tui`] renders it in
//! the terminal; [`cli`] and [`config`] back the `contact-form` binary.

pub mod cli;
pub mod config;
pub mod contact_tui;
pub mod form;
