//! A row of buttons.

use std::any::Any;
use std::io;

use super::component::{CommitValue, Component, ComponentKind, WidgetBase};
use super::frame::{draw_title, erase_if_drawn};
use crate::input::Key;
use crate::layout::string_width;
use crate::renderer::{SnapshotCache, Terminal, write_at};
use crate::types::{Size, Style};

/// Title row plus the button row.
const HEIGHT: u16 = 2;

/// Everything that affects how a [`ButtonGroup`] looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSnapshot {
    pub selected: usize,
    pub focused: bool,
}

/// Buttons rendered as `[OK] [Cancel]`, centred under the title.
///
/// Left/Right move between buttons without wrapping; Enter commits the
/// label of the active one.
#[derive(Debug, Clone)]
pub struct ButtonGroup {
    base: WidgetBase,
    labels: Vec<String>,
    selected: usize,
    cache: SnapshotCache<ButtonSnapshot>,
}

impl ButtonGroup {
    pub fn new<I, S>(title: impl Into<String>, labels: I, width: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: WidgetBase::new(title, Size::new(width, HEIGHT)),
            labels: labels.into_iter().map(Into::into).collect(),
            selected: 0,
            cache: SnapshotCache::new(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the active button.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.labels.get(self.selected).map(String::as_str)
    }

    fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            selected: self.selected,
            focused: self.base.focused,
        }
    }
}

impl Component for ButtonGroup {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ButtonGroup
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

        let width = usize::from(self.base.size.width);
        draw_title(terminal, x, y, &self.base.title, self.base.size.width)?;

        let buttons: Vec<String> = self.labels.iter().map(|label| format!("[{label}]")).collect();
        let line_width =
            buttons.iter().map(|b| string_width(b)).sum::<usize>() + buttons.len().saturating_sub(1);
        let slack = width.saturating_sub(line_width);
        let left = slack / 2;

        write_at(terminal, x, y + 1, &" ".repeat(left), Style::Plain)?;
        for (index, button) in buttons.iter().enumerate() {
            if index > 0 {
                terminal.write_styled(" ", Style::Plain)?;
            }
            let style = if index == self.selected && self.base.focused {
                Style::Focus
            } else {
                Style::Plain
            };
            terminal.write_styled(button, style)?;
        }
        terminal.write_styled(&" ".repeat(slack - left), Style::Plain)?;

        self.cache.store(snapshot);
        Ok(true)
    }

    fn handle_key(&mut self, key: &Key) -> Option<CommitValue> {
        if self.labels.is_empty() {
            return None;
        }
        match key {
            Key::Left => self.selected = self.selected.saturating_sub(1),
            Key::Right => self.selected = (self.selected + 1).min(self.labels.len() - 1),
            Key::Enter => return Some(CommitValue::Label(self.labels[self.selected].clone())),
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
