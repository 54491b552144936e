use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// A single-line text input with cursor positioning and readline-style
/// editing. Cursor positions are in characters; edits translate to byte
/// offsets so multibyte input works.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor_position = text.chars().count();
        self.text = text;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum()
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_char_at_cursor(&mut self) -> bool {
        let pos = self.cursor_position;
        if pos >= self.char_count() {
            return false;
        }
        self.delete_range(pos, pos + 1)
    }

    /// Text plus a block cursor, for rendering inside a `Line`.
    pub fn cursor_spans(&self) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        if self.cursor_position >= self.char_count() {
            return vec![
                Span::raw(self.text.clone()),
                Span::styled(" ", cursor_style),
            ];
        }

        let split = self.byte_index(self.cursor_position);
        let (before, rest) = self.text.split_at(split);
        let cursor_char = rest.chars().next().unwrap_or(' ');
        let after: String = rest.chars().skip(1).collect();

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before.to_string()));
        }
        spans.push(Span::styled(cursor_char.to_string(), cursor_style));
        if !after.is_empty() {
            spans.push(Span::raw(after));
        }
        spans
    }

    /// Handles a key event; returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    false
                }
                KeyCode::Char('h') => self.delete_char_before_cursor(),
                KeyCode::Char('w') => {
                    let boundary = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(boundary, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => {
                    let len = self.char_count();
                    self.delete_range(self.cursor_position, len)
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.text.insert(byte_pos, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_at_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                false
            }
            _ => false,
        }
    }
}
