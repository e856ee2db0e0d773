//! Two-dimensional cell picker.

use std::any::Any;
use std::collections::{BTreeSet, HashMap};
use std::io;

use super::component::{CommitValue, Component, ComponentKind, WidgetBase};
use super::frame::{draw_box, draw_title, erase_if_drawn};
use super::scroll::follow_cursor;
use crate::input::Key;
use crate::layout::center_to_width;
use crate::renderer::{SnapshotCache, Terminal, write_at};
use crate::types::{Size, Style};

/// Everything that affects how a [`SelectableGrid`] looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub cursor: (usize, usize),
    pub selected: Vec<(usize, usize)>,
    pub scroll: usize,
    pub focused: bool,
    pub revision: u64,
}

/// A bordered `rows` x `cols` grid of cells.
///
/// Arrow keys move the cursor cell, clamped at the edges. Each cell shows
/// its label, `"[r,c]"` unless one was set, centred in `(width - 2) / cols`
/// cells. Rows scroll when there are more than fit.
#[derive(Debug, Clone)]
pub struct SelectableGrid {
    base: WidgetBase,
    rows: usize,
    cols: usize,
    cursor: (usize, usize),
    selected: BTreeSet<(usize, usize)>,
    labels: HashMap<(usize, usize), String>,
    scroll: usize,
    multi_select: bool,
    revision: u64,
    cache: SnapshotCache<GridSnapshot>,
}

impl SelectableGrid {
    pub fn new(title: impl Into<String>, width: u16, height: u16, rows: usize, cols: usize) -> Self {
        Self {
            base: WidgetBase::new(title, Size::new(width, height)),
            rows,
            cols,
            cursor: (0, 0),
            selected: BTreeSet::new(),
            labels: HashMap::new(),
            scroll: 0,
            multi_select: false,
            revision: 0,
            cache: SnapshotCache::new(),
        }
    }

    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    /// Set labels row by row. Missing cells keep their default label and
    /// entries outside the grid are ignored.
    pub fn with_labels<R, S>(mut self, labels: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (row, cells) in labels.into_iter().enumerate() {
            for (col, label) in cells.into_iter().enumerate() {
                self.set_label(row, col, label);
            }
        }
        self
    }

    pub fn set_label(&mut self, row: usize, col: usize, label: impl Into<String>) {
        if row < self.rows && col < self.cols {
            self.labels.insert((row, col), label.into());
            self.revision += 1;
        }
    }

    pub fn label(&self, row: usize, col: usize) -> String {
        match self.labels.get(&(row, col)) {
            Some(label) => label.clone(),
            None => format!("[{row},{col}]"),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cursor cell as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Selected cells, row-major ascending.
    pub fn selected(&self) -> Vec<(usize, usize)> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selected.contains(&(row, col))
    }

    /// First visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn cell_width(&self) -> usize {
        match self.cols {
            0 => 0,
            cols => self.base.inner_width() / cols,
        }
    }

    fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cursor: self.cursor,
            selected: self.selected(),
            scroll: self.scroll,
            focused: self.base.focused,
            revision: self.revision,
        }
    }

    fn cell_style(&self, cell: (usize, usize)) -> Style {
        if self.selected.contains(&cell) {
            Style::Selected
        } else if cell == self.cursor && self.base.focused {
            Style::Highlight
        } else {
            Style::Plain
        }
    }
}

impl Component for SelectableGrid {
    fn kind(&self) -> ComponentKind {
        ComponentKind::SelectableGrid
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

        let cell_width = self.cell_width();
        if cell_width > 0 {
            let end = (self.scroll + self.base.content_rows()).min(self.rows);
            for (line, row) in (self.scroll..end).enumerate() {
                for col in 0..self.cols {
                    let text = center_to_width(&self.label(row, col), cell_width);
                    let cell_x = x + 1 + (col * cell_width) as i32;
                    write_at(terminal, cell_x, y + 2 + line as i32, &text, self.cell_style((row, col)))?;
                }
            }
        }

        self.cache.store(snapshot);
        Ok(true)
    }

    fn handle_key(&mut self, key: &Key) -> Option<CommitValue> {
        if self.is_empty() {
            return None;
        }
        let (row, col) = self.cursor;
        match key {
            Key::Up => self.cursor.0 = row.saturating_sub(1),
            Key::Down => self.cursor.0 = (row + 1).min(self.rows - 1),
            Key::Left => self.cursor.1 = col.saturating_sub(1),
            Key::Right => self.cursor.1 = (col + 1).min(self.cols - 1),
            Key::Space if self.multi_select => {
                if !self.selected.remove(&self.cursor) {
                    self.selected.insert(self.cursor);
                }
            }
            Key::Enter if self.multi_select => return Some(CommitValue::Cells(self.selected())),
            Key::Enter => return Some(CommitValue::Cell { row, col }),
            _ => {}
        }
        self.scroll = follow_cursor(self.cursor.0, self.scroll, self.base.content_rows(), self.rows);
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
