//! Scrolling list with single or multi-select.

use std::any::Any;
use std::collections::BTreeSet;
use std::io;

use super::component::{CommitValue, Component, ComponentKind, WidgetBase};
use super::frame::{draw_box, draw_title, erase_if_drawn};
use super::scroll::follow_cursor;
use crate::input::Key;
use crate::layout::pad_to_width;
use crate::renderer::{SnapshotCache, Terminal, write_at};
use crate::types::{Size, Style};

const CURSOR_MARK: &str = "▶ ";
const NO_MARK: &str = "  ";

/// Everything that affects how a [`SelectableList`] looks.
///
/// `revision` counts item replacements so a new item list repaints even when
/// cursor and selection happen to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub cursor: usize,
    pub selected: Vec<usize>,
    pub scroll: usize,
    pub focused: bool,
    pub revision: u64,
}

/// A bordered vertical list.
///
/// Up/Down move the cursor. With multi-select, Space toggles the item under
/// the cursor and Enter commits every selected index; otherwise Enter
/// commits the cursor index.
#[derive(Debug, Clone)]
pub struct SelectableList {
    base: WidgetBase,
    items: Vec<String>,
    cursor: usize,
    selected: BTreeSet<usize>,
    scroll: usize,
    multi_select: bool,
    revision: u64,
    cache: SnapshotCache<ListSnapshot>,
}

impl SelectableList {
    pub fn new(title: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            base: WidgetBase::new(title, Size::new(width, height)),
            items: Vec::new(),
            cursor: 0,
            selected: BTreeSet::new(),
            scroll: 0,
            multi_select: false,
            revision: 0,
            cache: SnapshotCache::new(),
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_items(items);
        self
    }

    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    /// Replace the items. The cursor is clamped and selections past the new
    /// end are dropped.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        let len = self.items.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.selected.retain(|&index| index < len);
        self.scroll = follow_cursor(self.cursor, self.scroll, self.visible_rows(), len);
        self.revision += 1;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected indices, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Index of the first visible item.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn visible_rows(&self) -> usize {
        self.base.content_rows()
    }

    fn move_cursor(&mut self, down: bool) {
        let last = self.items.len() - 1;
        self.cursor = if down {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.scroll = follow_cursor(self.cursor, self.scroll, self.visible_rows(), self.items.len());
    }

    fn toggle(&mut self) {
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            cursor: self.cursor,
            selected: self.selected(),
            scroll: self.scroll,
            focused: self.base.focused,
            revision: self.revision,
        }
    }

    fn row_style(&self, index: usize) -> Style {
        if self.selected.contains(&index) {
            Style::Selected
        } else if index == self.cursor && self.base.focused {
            Style::Highlight
        } else {
            Style::Plain
        }
    }
}

impl Component for SelectableList {
    fn kind(&self) -> ComponentKind {
        ComponentKind::SelectableList
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

        let Size { width, height } = self.base.size;
        let border = if self.base.focused {
            Style::Focus
        } else {
            Style::Plain
        };
        draw_title(terminal, x, y, &self.base.title, width)?;
        draw_box(terminal, x, y + 1, width, height.saturating_sub(1), border)?;

        let inner = self.base.inner_width();
        let end = (self.scroll + self.visible_rows()).min(self.items.len());
        for (row, index) in (self.scroll..end).enumerate() {
            let mark = if index == self.cursor && self.base.focused {
                CURSOR_MARK
            } else {
                NO_MARK
            };
            let line = pad_to_width(&format!("{mark}{}", self.items[index]), inner);
            write_at(terminal, x + 1, y + 2 + row as i32, &line, self.row_style(index))?;
        }

        self.cache.store(snapshot);
        Ok(true)
    }

    fn handle_key(&mut self, key: &Key) -> Option<CommitValue> {
        if self.items.is_empty() {
            return None;
        }
        match key {
            Key::Up => self.move_cursor(false),
            Key::Down => self.move_cursor(true),
            Key::Space if self.multi_select => self.toggle(),
            Key::Enter if self.multi_select => return Some(CommitValue::Indices(self.selected())),
            Key::Enter => return Some(CommitValue::Index(self.cursor)),
            _ => {}
        }
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
}

// =============================================================================
// Tests
// =============================================================================
