//! Contact form Terminal User Interface (TUI)
//!
//! Renders the contact form with ratatui, re-deriving the whole view from the
//! form state after every key event.

pub mod app;
pub mod components;
pub mod screens;
pub mod traits;
pub mod ui;

pub use app::App;
pub use screens::ContactFormScreen;
pub use traits::{FormHandler, Screen, ScreenAction};
