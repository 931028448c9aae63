//! Amount Input Widget: single-line numeric entry with a cursor.
//!
//! Only characters that can appear in a decimal number are accepted. The
//! content is not validated while typing; the staking form parses it on
//! submit.

use super::theme;
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Modifiers};
use crate::layout::Rect;

/// Longest accepted input, in characters.
const MAX_LEN: usize = 24;

/// Numeric text input.
#[derive(Debug)]
pub struct AmountInput {
    content: String,
    /// Cursor position as a byte offset; content is ASCII only.
    cursor: usize,
    placeholder: &'static str,
    focused: bool,
    bounds: Rect,
}

impl AmountInput {
    /// Create an empty, focused input.
    pub const fn new(bounds: Rect, placeholder: &'static str) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            placeholder,
            focused: true,
            bounds,
        }
    }

    /// Current text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the field takes keys.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    fn insert_char(&mut self, c: char) -> bool {
        if !accepts(c) || self.content.len() >= MAX_LEN {
            return false;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }
}

/// Characters that can appear in a decimal or scientific number.
const fn accepts(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '-' | '+' | 'e' | 'E')
}

impl Widget for AmountInput {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn render(&self, buffer: &mut Buffer) {
        let area = self.bounds;
        if area.is_empty() {
            return;
        }
        let field = theme::TEXT.bg(theme::BAR_BG);
        buffer.fill(area.row(0), field);

        // Keep the cursor visible when the content is wider than the field.
        let width = usize::from(area.width);
        let scroll = (self.cursor + 1).saturating_sub(width);
        if self.content.is_empty() {
            buffer.draw_text(area.x, area.y, self.placeholder, field.fg(theme::MUTED), area.width);
        } else {
            buffer.draw_text(area.x, area.y, &self.content[scroll..], field, area.width);
        }

        if self.focused {
            #[allow(clippy::cast_possible_truncation)]
            let x = area.x + (self.cursor - scroll) as u16;
            let under = self.content[self.cursor..].chars().next().unwrap_or(' ');
            let mut tmp = [0u8; 4];
            buffer.draw_text(x, area.y, under.encode_utf8(&mut tmp), field.add(Modifiers::REVERSED), 1);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.focused {
            return false;
        }
        let InputEvent::Key { code, modifiers } = event else {
            return false;
        };
        match code {
            KeyCode::Char(c) if !modifiers.control && !modifiers.alt => self.insert_char(*c),
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.content.len());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.content.len();
                true
            }
            _ => false,
        }
    }
}
