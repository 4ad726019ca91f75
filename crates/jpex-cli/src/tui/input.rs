//! Expression input line
//!
//! Single-line editor for the query expression. Every key that changes the
//! buffer reports [`InputAction::Edited`] so the session re-runs the
//! evaluation cycle; cursor movement is handled locally and reports nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::styles::Styles;

/// Action reported after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The buffer changed
    Edited,
    /// The key was consumed without changing the buffer
    None,
}

/// Single-line editor for the query expression.
///
/// The cursor is tracked in characters, not bytes, so multi-byte input
/// behaves like any other character.
#[derive(Debug, Clone)]
pub struct ExpressionInput {
    /// Current expression text
    buffer: String,
    /// Cursor position in characters
    cursor: usize,
    /// Hint shown while the buffer is empty
    hint: String,
    /// Prefix displayed before the text
    prefix: String,
}

impl Default for ExpressionInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionInput {
    /// Create a new expression input
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            hint: "type a JMESPath expression".to_string(),
            prefix: "> ".to_string(),
        }
    }

    /// Set the hint text
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Get the current expression text
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Set the buffer content, placing the cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.char_count();
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of characters in the buffer
    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the given character position
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    /// Character immediately before the cursor
    fn char_before(&self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        self.buffer.chars().nth(self.cursor - 1)
    }

    /// Insert a character at the cursor position
    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace)
    fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete the character at the cursor (delete)
    fn delete_char_at(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Move cursor left
    fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete the word before the cursor (Ctrl+W)
    fn delete_word_before(&mut self) {
        while self.cursor > 0 && self.char_before() == Some(' ') {
            self.delete_char_before();
        }
        while self.cursor > 0 && self.char_before() != Some(' ') {
            self.delete_char_before();
        }
    }

    /// Clear from start to cursor (Ctrl+U)
    fn delete_to_start(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.buffer.drain(..at);
        self.cursor = 0;
    }

    /// Clear from cursor to end (Ctrl+K)
    fn delete_to_end(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.buffer.truncate(at);
    }

    /// Apply one key press to the buffer.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('w') => {
                    self.delete_word_before();
                    InputAction::Edited
                }
                KeyCode::Char('a') => {
                    self.cursor_home();
                    InputAction::None
                }
                KeyCode::Char('e') => {
                    self.cursor_end();
                    InputAction::None
                }
                KeyCode::Char('u') => {
                    self.delete_to_start();
                    InputAction::Edited
                }
                KeyCode::Char('k') => {
                    self.delete_to_end();
                    InputAction::Edited
                }
                _ => InputAction::None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                InputAction::Edited
            }
            KeyCode::Backspace => {
                self.delete_char_before();
                InputAction::Edited
            }
            KeyCode::Delete => {
                self.delete_char_at();
                InputAction::Edited
            }
            KeyCode::Left => {
                self.cursor_left();
                InputAction::None
            }
            KeyCode::Right => {
                self.cursor_right();
                InputAction::None
            }
            KeyCode::Home => {
                self.cursor_home();
                InputAction::None
            }
            KeyCode::End => {
                self.cursor_end();
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    /// Render the input line with a block cursor.
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("JMESPath Expression")
            .border_style(styles.border_focused());

        let mut spans = vec![Span::styled(&self.prefix, styles.text_muted())];

        if self.buffer.is_empty() {
            spans.push(Span::styled(
                " ",
                styles.text().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(&self.hint, styles.text_muted()));
        } else {
            let at = self.byte_offset(self.cursor);
            let before = &self.buffer[..at];
            let cursor_char = self.buffer[at..].chars().next();
            let after = match cursor_char {
                Some(c) => &self.buffer[at + c.len_utf8()..],
                None => "",
            };

            spans.push(Span::styled(before, styles.text()));
            let cursor_str = cursor_char
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            spans.push(Span::styled(
                cursor_str,
                styles.text().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(after, styles.text()));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        f.render_widget(paragraph, area);
    }
}
