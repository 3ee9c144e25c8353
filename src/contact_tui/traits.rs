//! Core traits for the contact form TUI
//!
//! Screens draw themselves and turn key events into [`ScreenAction`]s; the
//! [`App`](super::App) owns everything global and applies those actions.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Actions that can be returned from screen event handling
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Set status message
    SetStatus(String),
    /// Set error message
    SetError(String),
    /// Clear messages
    ClearMessages,
    /// No action taken
    None,
}

/// Core trait for all TUI screens
pub trait Screen {
    /// Draw the screen content
    fn draw(&mut self, f: &mut Frame, area: Rect);

    /// Handle keyboard input and return an action for the app
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction>;

    /// Short name shown in the status bar
    fn title(&self) -> &str;

    /// Screen-specific shortcuts for the help popup
    fn help_text(&self) -> &str {
        ""
    }
}

/// Trait for form handling
pub trait FormHandler {
    /// Get current focus index
    fn get_current_field(&self) -> usize;

    /// Set current focus index
    fn set_current_field(&mut self, field: usize);

    /// Get total number of focus stops
    fn get_field_count(&self) -> usize;

    /// Move to next field
    fn next_field(&mut self) {
        let current = self.get_current_field();
        let total = self.get_field_count();
        self.set_current_field((current + 1) % total);
    }

    /// Move to previous field
    fn previous_field(&mut self) {
        let current = self.get_current_field();
        let total = self.get_field_count();
        self.set_current_field(if current == 0 { total - 1 } else { current - 1 });
    }

    /// Handle character input for current field
    fn handle_char_input(&mut self, c: char);

    /// Handle backspace for current field
    fn handle_backspace(&mut self);

    /// Handle delete for current field
    fn handle_delete(&mut self);

    /// Error lines currently shown, in field order
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Submit form
    fn submit(&mut self) -> ScreenAction;
}
