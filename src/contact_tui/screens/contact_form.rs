//! Contact form screen

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use crate::{
    contact_tui::{
        components::FormField,
        traits::{FormHandler, Screen, ScreenAction},
        ui::{centered_rect_with_height, Styles},
    },
    form::{DisplayItem, Field, FormValidator, FormValues},
};

/// Focus index of the submit button, after the four inputs
pub const SUBMIT_BUTTON: usize = Field::ALL.len();

const TITLE_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const INSTRUCTIONS_HEIGHT: u16 = 3;

/// Contact form screen state
pub struct ContactFormScreen {
    pub form: FormValidator,
    pub inputs: Vec<FormField>,
    pub current_field: usize,
    pub show_instructions: bool,
}

impl ContactFormScreen {
    pub fn new(show_instructions: bool) -> Self {
        Self::with_values(FormValues::default(), show_instructions)
    }

    /// Screen pre-filled with `values`; nothing is validated until edited or submitted
    pub fn with_values(values: FormValues, show_instructions: bool) -> Self {
        let inputs = Field::ALL
            .into_iter()
            .map(|field| {
                FormField::new(field)
                    .with_placeholder(placeholder(field))
                    .with_value(values.get(field))
            })
            .collect();

        let mut screen = Self {
            form: FormValidator::with_values(values),
            inputs,
            current_field: 0,
            show_instructions,
        };
        screen.update_field_focus();
        screen
    }

    pub fn update_field_focus(&mut self) {
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focus(i == self.current_field);
        }
    }

    /// Field under focus, or `None` when the submit button has it
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.current_field)
    }

    fn focused_input_mut(&mut self) -> Option<&mut FormField> {
        self.inputs.get_mut(self.current_field)
    }

    /// Push the focused input's value into the validator
    fn commit_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            let value = self.inputs[field.index()].value.clone();
            self.form.set_field(field, value);
            self.sync_errors();
        }
    }

    fn sync_errors(&mut self) {
        for input in &mut self.inputs {
            input.validation_error = None;
        }
        for item in self.form.error_items() {
            self.inputs[item.field.index()].validation_error = Some(item.text);
        }
    }

    /// Text of every error element currently on screen
    pub fn error_lines(&self) -> Vec<String> {
        self.form.error_lines()
    }

    /// Summary elements; empty until a submit succeeds
    pub fn display_items(&self) -> Vec<DisplayItem> {
        self.form
            .submission()
            .map(|submission| submission.display_items())
            .unwrap_or_default()
    }

    /// Clear every field and return to the first one
    pub fn clear_form(&mut self) {
        self.form.reset();
        for input in &mut self.inputs {
            input.clear();
        }
        self.current_field = 0;
        self.update_field_focus();
    }

    /// Bordered header, or a single bare line when `area` has no room for borders
    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let mut title = Paragraph::new("Contact Form")
            .style(Styles::title())
            .alignment(Alignment::Center);
        if area.height >= TITLE_HEIGHT {
            title = title.block(Block::default().borders(Borders::ALL));
        }
        f.render_widget(title, area);
    }

    fn draw_submit_button(&self, f: &mut Frame, area: Rect) {
        let focused = self.current_field == SUBMIT_BUTTON;
        let (style, border) = if focused {
            (Styles::selected(), Styles::active_border())
        } else {
            (Styles::default(), Styles::inactive_border())
        };

        let button = Paragraph::new("[ Submit ]")
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(button, area);
    }

    /// Summary popup over the form; its size follows the items, not the layout
    fn draw_summary(&self, f: &mut Frame, area: Rect) {
        let items = self.display_items();
        if items.is_empty() {
            return;
        }

        let rows = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup_area = centered_rect_with_height(80, rows, area);
        f.render_widget(Clear, popup_area);

        let lines: Vec<Line> = items.iter().map(|item| Line::from(item.text())).collect();
        let summary = Paragraph::new(lines)
            .style(Styles::success())
            .block(
                Block::default()
                    .title("You Submitted")
                    .borders(Borders::ALL)
                    .border_style(Styles::success()),
            );
        f.render_widget(summary, popup_area);
    }

    fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let instructions = Paragraph::new(
            "Tab/↑↓: Move | Enter: Next/Submit | Ctrl+S: Submit | Ctrl+L: Clear | Esc: Quit",
        )
        .style(Styles::info())
        .block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(instructions, area);
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FirstName => "at least 5 characters",
        Field::LastName => "required",
        Field::Email => "name@example.com",
        Field::Message => "optional",
    }
}

impl FormHandler for ContactFormScreen {
    fn get_current_field(&self) -> usize {
        self.current_field
    }

    fn set_current_field(&mut self, field: usize) {
        if field < self.get_field_count() {
            self.current_field = field;
            self.update_field_focus();
        }
    }

    fn get_field_count(&self) -> usize {
        self.inputs.len() + 1
    }

    fn handle_char_input(&mut self, c: char) {
        if let Some(input) = self.focused_input_mut() {
            input.insert_char(c);
            self.commit_focused();
        }
    }

    fn handle_backspace(&mut self) {
        let changed = self.focused_input_mut().map(|input| input.delete_char()).unwrap_or(false);
        if changed {
            self.commit_focused();
        }
    }

    fn handle_delete(&mut self) {
        let changed = self
            .focused_input_mut()
            .map(|input| input.delete_char_forward())
            .unwrap_or(false);
        if changed {
            self.commit_focused();
        }
    }

    fn validate(&self) -> Result<(), Vec<String>> {
        let lines = self.error_lines();
        if lines.is_empty() {
            Ok(())
        } else {
            Err(lines)
        }
    }

    fn submit(&mut self) -> ScreenAction {
        let result = self.form.submit();
        self.sync_errors();

        match result {
            Ok(submission) => {
                ScreenAction::SetStatus(format!("Thanks {}, your message was submitted", submission.first_name))
            }
            Err(e) => {
                // jump to the first field that needs attention
                if let Some(field) = e.fields().first() {
                    self.set_current_field(field.index());
                }
                ScreenAction::SetError(e.to_string())
            }
        }
    }
}

impl Screen for ContactFormScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        // inputs and button keep their height; title and instructions give way first
        let inputs_height = FormField::HEIGHT * self.inputs.len() as u16;
        let title_height = if area.height >= TITLE_HEIGHT + inputs_height + BUTTON_HEIGHT {
            TITLE_HEIGHT
        } else {
            1
        };
        let show_instructions = self.show_instructions
            && area.height >= title_height + inputs_height + BUTTON_HEIGHT + INSTRUCTIONS_HEIGHT;

        let mut constraints = vec![Constraint::Length(title_height)];
        constraints.extend(self.inputs.iter().map(|_| Constraint::Length(FormField::HEIGHT)));
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));
        if show_instructions {
            constraints.push(Constraint::Length(INSTRUCTIONS_HEIGHT));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.draw_title(f, chunks[0]);
        for (i, input) in self.inputs.iter().enumerate() {
            input.render(f, chunks[i + 1]);
        }

        let button = self.inputs.len() + 1;
        self.draw_submit_button(f, chunks[button]);
        if show_instructions {
            self.draw_instructions(f, chunks[button + 2]);
        }
        self.draw_summary(f, area);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        // AltGr arrives as Ctrl+Alt on some platforms and is plain typing
        if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
            return Ok(match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('l') => {
                    self.clear_form();
                    ScreenAction::SetStatus("Form cleared".to_string())
                }
                _ => ScreenAction::None,
            });
        }

        let before = self.form.values().clone();
        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                ScreenAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                ScreenAction::None
            }
            KeyCode::Enter => {
                if self.current_field == SUBMIT_BUTTON {
                    self.submit()
                } else {
                    self.next_field();
                    ScreenAction::None
                }
            }
            KeyCode::Char(c) => {
                self.handle_char_input(c);
                ScreenAction::None
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                ScreenAction::None
            }
            KeyCode::Delete => {
                self.handle_delete();
                ScreenAction::None
            }
            KeyCode::Left => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_cursor_left();
                }
                ScreenAction::None
            }
            KeyCode::Right => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_cursor_right();
                }
                ScreenAction::None
            }
            KeyCode::Home => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_cursor_to_start();
                }
                ScreenAction::None
            }
            KeyCode::End => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_cursor_to_end();
                }
                ScreenAction::None
            }
            _ => ScreenAction::None,
        };

        if action == ScreenAction::None && self.form.values() != &before {
            debug!("form edited, clearing status line");
            return Ok(ScreenAction::ClearMessages);
        }
        Ok(action)
    }

    fn title(&self) -> &str {
        "Contact Form"
    }

    fn help_text(&self) -> &str {
        "Contact Form:\n\
        Tab / ↓ - Next field\n\
        Shift+Tab / ↑ - Previous field\n\
        Enter - Next field, or submit on the button\n\
        Ctrl+S - Submit from any field\n\
        Ctrl+L - Clear the form\n\
        ←/→/Home/End - Move the cursor"
    }
}
