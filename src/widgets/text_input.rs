//! Single-line text input.

use std::any::Any;
use std::io;

use super::component::{CommitValue, Component, ComponentKind, WidgetBase};
use super::frame::{draw_box, draw_boxed_line, draw_title, erase_if_drawn};
use crate::input::Key;
use crate::layout::string_width;
use crate::renderer::{SnapshotCache, Terminal};
use crate::types::{Size, Style};

/// Title row plus a three-row box.
const HEIGHT: u16 = 4;

/// Everything that affects how a [`TextInput`] looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputSnapshot {
    pub text: String,
    pub cursor: usize,
    pub view_start: usize,
    pub focused: bool,
}

/// A bordered single-line text field.
///
/// Typing inserts at the cursor until `max_length` characters are reached.
/// Enter commits the current text without clearing it. Text wider than the
/// box scrolls horizontally so the cursor stays visible.
#[derive(Debug, Clone)]
pub struct TextInput {
    base: WidgetBase,
    text: Vec<char>,
    cursor: usize,
    /// First visible character.
    view_start: usize,
    max_length: usize,
    cache: SnapshotCache<TextInputSnapshot>,
}

impl TextInput {
    /// A field `width` cells wide, accepting `width - 2` characters.
    pub fn new(title: impl Into<String>, width: u16) -> Self {
        Self {
            base: WidgetBase::new(title, Size::new(width, HEIGHT)),
            text: Vec::new(),
            cursor: 0,
            view_start: 0,
            max_length: usize::from(width.saturating_sub(2)),
            cache: SnapshotCache::new(),
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self.text.truncate(max_length);
        self.cursor = self.cursor.min(self.text.len());
        self.follow_cursor();
        self
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Cursor offset in characters, `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Replace the text and put the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_length).collect();
        self.cursor = self.text.len();
        self.follow_cursor();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.view_start = 0;
    }

    /// Index of the first character shown in the box.
    pub fn view_start(&self) -> usize {
        self.view_start
    }

    fn width_between(&self, from: usize, to: usize) -> usize {
        let slice: String = self.text[from..to].iter().collect();
        string_width(&slice)
    }

    /// Slide the view so the caret cell after the cursor stays inside the
    /// box.
    fn follow_cursor(&mut self) {
        let last_cell = self.base.inner_width().saturating_sub(1);
        self.view_start = self.view_start.min(self.cursor);
        while self.view_start < self.cursor
            && self.width_between(self.view_start, self.cursor) > last_cell
        {
            self.view_start += 1;
        }
    }

    fn snapshot(&self) -> TextInputSnapshot {
        TextInputSnapshot {
            text: self.text(),
            cursor: self.cursor,
            view_start: self.view_start,
            focused: self.base.focused,
        }
    }
}

impl Component for TextInput {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextInput
    }

    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn render(&mut self, terminal: &mut dyn Terminal, x: i32, y: i32) -> io::Result<bool> {
        if !self.base.visible {
            return erase_if_drawn(terminal, x, y, self.base.size, &mut self.cache);
        }
        let snapshot = self.snapshot();
        if self.cache.is_current(&snapshot) {
            return Ok(false);
        }

        let width = self.base.size.width;
        let style = if self.base.focused {
            Style::Focus
        } else {
            Style::Plain
        };
        draw_title(terminal, x, y, &self.base.title, width)?;
        draw_box(terminal, x, y + 1, width, HEIGHT - 1, style)?;
        let visible: String = self.text[self.view_start..].iter().collect();
        draw_boxed_line(terminal, x, y + 2, &visible, width, style)?;

        self.cache.store(snapshot);
        Ok(true)
    }

    fn handle_key(&mut self, key: &Key) -> Option<CommitValue> {
        match key {
            Key::Enter => return Some(CommitValue::Text(self.text())),
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.text.remove(self.cursor);
                }
            }
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.text.len()),
            other => {
                if let Some(c) = other.printable() {
                    if self.text.len() < self.max_length {
                        self.text.insert(self.cursor, c);
                        self.cursor += 1;
                    }
                }
            }
        }
        self.follow_cursor();
        None
    }

    fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    /// On the content row, just inside the left border, after the cursor.
    /// Measured in cells, so wide characters move the caret by two.
    fn cursor_position(&self, x: i32, y: i32) -> (i32, i32) {
        let last_cell = self.base.inner_width().saturating_sub(1);
        let offset = self.width_between(self.view_start, self.cursor).min(last_cell) as i32;
        (x + 2 + offset, y + 3)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::OutputBuffer;

    fn type_text(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            assert_eq!(input.handle_key(&Key::from(c)), None);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut input = TextInput::new("Name", 20);
        type_text(&mut input, "hello");
        input.handle_key(&Key::Backspace);
        input.handle_key(&Key::Backspace);

        assert_eq!(input.text(), "hel");
        assert_eq!(input.cursor(), 3);
        assert_eq!(
            input.handle_key(&Key::Enter),
            Some(CommitValue::Text("hel".to_string()))
        );
        // commit does not clear
        assert_eq!(input.text(), "hel");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = TextInput::new("Name", 20);
        type_text(&mut input, "ac");
        input.handle_key(&Key::Left);
        input.handle_key(&Key::Char('b'));
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_space_inserts() {
        let mut input = TextInput::new("Name", 20);
        type_text(&mut input, "a b");
        assert_eq!(input.text(), "a b");
    }

    #[test]
    fn test_cursor_clamped() {
        let mut input = TextInput::new("Name", 20);
        input.handle_key(&Key::Left);
        assert_eq!(input.cursor(), 0);

        type_text(&mut input, "ab");
        input.handle_key(&Key::Right);
        input.handle_key(&Key::Right);
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("Name", 20);
        type_text(&mut input, "ab");
        input.handle_key(&Key::Left);
        input.handle_key(&Key::Left);
        input.handle_key(&Key::Backspace);
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_max_length() {
        let mut input = TextInput::new("Name", 6);
        assert_eq!(input.max_length(), 4);
        type_text(&mut input, "abcdef");
        assert_eq!(input.text(), "abcd");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_ignored_keys() {
        let mut input = TextInput::new("Name", 20);
        type_text(&mut input, "x");
        for key in [Key::Up, Key::Down, Key::Unknown, Key::Char('\u{7}')] {
            assert_eq!(input.handle_key(&key), None);
        }
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn test_render_idempotent() {
        let mut input = TextInput::new("Name", 10);
        let mut out = OutputBuffer::new();

        assert!(input.render(&mut out, 0, 0).unwrap());
        assert!(!out.is_empty());

        out.clear();
        assert!(!input.render(&mut out, 0, 0).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_after_change() {
        let mut input = TextInput::new("Name", 10);
        let mut out = OutputBuffer::new();
        input.render(&mut out, 0, 0).unwrap();

        input.handle_key(&Key::Char('z'));
        out.clear();
        assert!(input.render(&mut out, 0, 0).unwrap());
        assert_eq!(out.screen()[2], "│z       │");
    }

    #[test]
    fn test_focus_changes_style() {
        let mut input = TextInput::new("Name", 10);
        let mut out = OutputBuffer::new();
        input.render(&mut out, 0, 0).unwrap();

        input.set_focus(true);
        out.clear();
        assert!(input.render(&mut out, 0, 0).unwrap());
        assert!(out.ops().iter().any(|op| matches!(
            op,
            crate::renderer::TermOp::Write { style: Style::Focus, .. }
        )));
    }

    #[test]
    fn test_render_layout() {
        let mut input = TextInput::new("Name", 8);
        input.set_text("hi");
        let mut out = OutputBuffer::new();
        input.render(&mut out, 0, 0).unwrap();
        assert_eq!(out.screen(), vec!["Name", "┌──────┐", "│hi    │", "└──────┘"]);
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let mut input = TextInput::new("Name", 10);
        input.set_visible(false);
        let mut out = OutputBuffer::new();
        assert!(!input.render(&mut out, 0, 0).unwrap());
        assert!(out.is_empty());

        input.set_visible(true);
        assert!(input.render(&mut out, 0, 0).unwrap());
    }

    #[test]
    fn test_cursor_position() {
        let mut input = TextInput::new("Name", 10);
        type_text(&mut input, "abc");
        assert_eq!(input.cursor_position(4, 2), (4 + 2 + 3, 2 + 3));

        // never past the right border
        type_text(&mut input, "defghij");
        assert_eq!(input.cursor(), 8);
        assert_eq!(input.cursor_position(0, 0), (2 + 7, 3));
    }

    #[test]
    fn test_cursor_position_counts_cells() {
        let mut input = TextInput::new("Name", 12);
        type_text(&mut input, "用户");
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.cursor_position(0, 0), (2 + 4, 3));

        input.handle_key(&Key::Left);
        assert_eq!(input.cursor_position(0, 0), (2 + 2, 3));
    }

    #[test]
    fn test_long_text_scrolls() {
        // inner width 6, caret needs the last cell
        let mut input = TextInput::new("Name", 8).with_max_length(20);
        type_text(&mut input, "abcdefghij");
        assert_eq!(input.text(), "abcdefghij");
        assert_eq!(input.view_start(), 5);
        assert_eq!(input.cursor_position(0, 0), (2 + 5, 3));

        let mut out = OutputBuffer::new();
        input.render(&mut out, 0, 0).unwrap();
        assert_eq!(out.screen()[2], "│fghij │");

        for _ in 0..10 {
            input.handle_key(&Key::Left);
        }
        assert_eq!(input.view_start(), 0);
        assert_eq!(input.cursor_position(0, 0), (2, 3));

        out.clear();
        assert!(input.render(&mut out, 0, 0).unwrap());
        assert_eq!(out.screen()[2], "│abcdef│");
    }

    #[test]
    fn test_clear_resets_view() {
        let mut input = TextInput::new("Name", 8).with_max_length(20);
        type_text(&mut input, "abcdefghij");
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.view_start(), 0);
        assert_eq!(input.cursor_position(0, 0), (2, 3));
    }

    #[test]
    fn test_size() {
        let input = TextInput::new("Name", 30);
        assert_eq!(input.size(), Size::new(30, 4));
        assert_eq!(input.kind(), ComponentKind::TextInput);
    }
}
