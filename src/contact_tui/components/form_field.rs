//! Form field component for user input

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::contact_tui::ui::Styles;
use crate::form::Field;

/// Individual form field: a bordered input box with an error line beneath it
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub is_focused: bool,
    /// Cursor position in characters, not bytes
    pub cursor_position: usize,
    pub validation_error: Option<String>,
}

impl FormField {
    /// Rows taken by the input box plus its error line
    pub const HEIGHT: u16 = 4;

    pub fn new(field: Field) -> Self {
        Self {
            field,
            label: field.label(),
            value: String::new(),
            placeholder: String::new(),
            is_focused: false,
            cursor_position: 0,
            validation_error: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.cursor_position = value.chars().count();
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor_position += 1;
    }

    /// Remove the character before the cursor; returns whether anything changed
    pub fn delete_char(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.cursor_position -= 1;
        let index = self.byte_index();
        self.value.remove(index);
        true
    }

    /// Remove the character under the cursor; returns whether anything changed
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor_position >= self.char_count() {
            return false;
        }
        let index = self.byte_index();
        self.value.remove(index);
        true
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
        self.validation_error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Display column of the cursor, counting wide characters twice
    fn cursor_column(&self) -> u16 {
        let width = UnicodeWidthStr::width(&self.value[..self.byte_index()]);
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Render the input box and, if present, its error line.
    ///
    /// Without a spare row under the box the error goes on the bottom border.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let box_area = Rect { height: area.height.min(3), ..area };
        let error_below = area.height > box_area.height;

        let border_style = if self.is_focused {
            Styles::active_border()
        } else if self.validation_error.is_some() {
            Styles::error_border()
        } else {
            Styles::inactive_border()
        };

        let mut block = Block::default()
            .title(self.label.as_str())
            .borders(Borders::ALL)
            .border_style(border_style);
        if let (Some(error), false) = (&self.validation_error, error_below) {
            let title = Line::from(Span::styled(error.as_str(), Styles::error()));
            block = block.title(Title::from(title).position(Position::Bottom));
        }

        // keep the cursor inside the box when the value is wider than it
        let inner_width = box_area.width.saturating_sub(2);
        let cursor_column = self.cursor_column();
        let scroll = if inner_width > 0 && cursor_column >= inner_width {
            cursor_column - inner_width + 1
        } else {
            0
        };

        let paragraph = if self.value.is_empty() && !self.placeholder.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(Styles::inactive())
        } else {
            Paragraph::new(self.value.as_str())
                .style(Styles::default())
                .scroll((0, scroll))
        };
        f.render_widget(paragraph.block(block), box_area);

        if let (Some(error), true) = (&self.validation_error, error_below) {
            let error_area = Rect {
                y: box_area.y + box_area.height,
                height: 1,
                ..area
            };
            let line = Paragraph::new(Line::from(format!(" {}", error))).style(Styles::error());
            f.render_widget(line, error_area);
        }

        if self.is_focused && inner_width > 0 {
            let cursor_x = box_area.x + 1 + (cursor_column - scroll);
            let cursor_y = box_area.y + 1;
            f.set_cursor(cursor_x, cursor_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_insert_and_delete_at_cursor() {
        let mut input = FormField::new(Field::FirstName).with_value("Jmy");
        input.move_cursor_left();
        input.move_cursor_left();
        input.insert_char('i');
        input.insert_char('m');
        assert_eq!(input.value, "Jimmy");
        assert_eq!(input.cursor_position, 3);

        assert!(input.delete_char());
        assert_eq!(input.value, "Jimy");
        input.move_cursor_to_end();
        assert!(!input.delete_char_forward());
        input.move_cursor_to_start();
        assert!(!input.delete_char());
        assert!(input.delete_char_forward());
        assert_eq!(input.value, "imy");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = FormField::new(Field::LastName).with_value("Šůr");
        input.move_cursor_left();
        input.insert_char('é');
        assert_eq!(input.value, "Šůér");
        assert!(input.delete_char());
        assert!(input.delete_char());
        assert_eq!(input.value, "Šr");
    }

    #[test]
    fn test_render_shows_label_value_and_error() {
        let mut input = FormField::new(Field::FirstName).with_value("Bill");
        input.validation_error = Some("Error: firstName must have at least 5 characters.".to_string());

        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                input.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..4)
            .map(|y| (0..60).map(|x| buffer.get(x, y).symbol().to_string()).collect())
            .collect();
        assert!(rows[0].contains("First Name*"));
        assert!(rows[1].contains("Bill"));
        assert!(rows[3].contains("Error: firstName must have at least 5 characters."));
    }

    #[test]
    fn test_render_keeps_error_when_squeezed_to_box() {
        let mut input = FormField::new(Field::Email).with_value("jimmy");
        input.validation_error = Some("Error: email must be a valid email address.".to_string());

        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                input.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let bottom: String = (0..60).map(|x| buffer.get(x, 2).symbol().to_string()).collect();
        assert!(
            bottom.contains("Error: email must be a valid email address."),
            "bottom border was {:?}",
            bottom
        );
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let mut input = FormField::new(Field::Message).with_value(&"x".repeat(30));
        input.value.push_str("END");
        input.move_cursor_to_end();
        input.set_focus(true);

        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                input.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..12).map(|x| buffer.get(x, 1).symbol().to_string()).collect();
        assert!(row.contains("END"), "row was {:?}", row);
    }
}
