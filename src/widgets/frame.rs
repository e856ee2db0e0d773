//! Title and border drawing shared by the widgets.

use std::io;

use crate::layout::{pad_to_width, truncate_to_width};
use crate::renderer::{SnapshotCache, Terminal, write_at};
use crate::types::{Size, Style};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Title on the widget's first row, cut to the widget width.
pub(super) fn draw_title(
    terminal: &mut dyn Terminal,
    x: i32,
    y: i32,
    title: &str,
    width: u16,
) -> io::Result<()> {
    let title = truncate_to_width(title, usize::from(width));
    write_at(terminal, x, y, title, Style::Title)
}

/// A bordered box `width` x `height` with its top-left corner at `(x, y)`.
///
/// Interior rows are blanked. Needs at least 2x2 cells; smaller boxes draw
/// nothing.
pub(super) fn draw_box(
    terminal: &mut dyn Terminal,
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    style: Style,
) -> io::Result<()> {
    if width < 2 || height < 2 {
        return Ok(());
    }
    let inner = usize::from(width - 2);
    let rule: String = std::iter::repeat_n(HORIZONTAL, inner).collect();

    write_at(terminal, x, y, &format!("{TOP_LEFT}{rule}{TOP_RIGHT}"), style)?;
    let blank = " ".repeat(inner);
    for dy in 1..i32::from(height) - 1 {
        write_at(terminal, x, y + dy, &format!("{VERTICAL}{blank}{VERTICAL}"), style)?;
    }
    write_at(
        terminal,
        x,
        y + i32::from(height) - 1,
        &format!("{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}"),
        style,
    )
}

/// One bordered content line: `│text│`, padded to the inner width.
pub(super) fn draw_boxed_line(
    terminal: &mut dyn Terminal,
    x: i32,
    y: i32,
    text: &str,
    width: u16,
    style: Style,
) -> io::Result<()> {
    if width < 2 {
        return Ok(());
    }
    let content = pad_to_width(text, usize::from(width - 2));
    write_at(terminal, x, y, &format!("{VERTICAL}{content}{VERTICAL}"), style)
}

/// Blank the cells of a widget that was drawn and has since been hidden.
///
/// Returns `Ok(true)` when something was blanked. The cache is emptied so
/// later hidden passes write nothing and showing the widget repaints it.
pub(super) fn erase_if_drawn<S: PartialEq>(
    terminal: &mut dyn Terminal,
    x: i32,
    y: i32,
    size: Size,
    cache: &mut SnapshotCache<S>,
) -> io::Result<bool> {
    if !cache.has_previous() {
        return Ok(false);
    }
    let blank = " ".repeat(usize::from(size.width));
    for dy in 0..i32::from(size.height) {
        write_at(terminal, x, y + dy, &blank, Style::Plain)?;
    }
    cache.invalidate();
    Ok(true)
}
