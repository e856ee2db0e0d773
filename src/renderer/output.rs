//! Recording terminal.
//!
//! [`OutputBuffer`] accumulates terminal operations instead of emitting
//! escape codes. Tests use it to count writes and to reconstruct what ended
//! up on screen; headless runs use it as a sink.

use std::collections::BTreeMap;
use std::io;

use unicode_width::UnicodeWidthChar;

use super::Terminal;
use crate::types::Style;

// =============================================================================
// TermOp
// =============================================================================

/// One recorded terminal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOp {
    MoveTo { row: u16, col: u16 },
    Write { text: String, style: Style },
    Clear,
    Flush,
}

// =============================================================================
// OutputBuffer
// =============================================================================

/// A [`Terminal`] that records operations.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    ops: Vec<TermOp>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, oldest first.
    pub fn ops(&self) -> &[TermOp] {
        &self.ops
    }

    /// Number of recorded operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Take the recorded operations, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<TermOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of styled writes (moves, clears and flushes excluded).
    pub fn write_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, TermOp::Write { .. }))
            .count()
    }

    /// The last cursor move, i.e. where the caret was left.
    pub fn last_move(&self) -> Option<(u16, u16)> {
        self.ops.iter().rev().find_map(|op| match op {
            TermOp::MoveTo { row, col } => Some((*row, *col)),
            _ => None,
        })
    }

    /// Replay the operations onto a virtual screen and return its rows.
    ///
    /// Rows are 1-based like the terminal; missing rows are empty strings.
    /// Wide characters occupy two cells.
    pub fn screen(&self) -> Vec<String> {
        let mut cells: BTreeMap<(u16, u16), char> = BTreeMap::new();
        let (mut row, mut col) = (1u16, 1u16);

        for op in &self.ops {
            match op {
                TermOp::MoveTo { row: r, col: c } => {
                    row = *r;
                    col = *c;
                }
                TermOp::Write { text, .. } => {
                    for ch in text.chars() {
                        cells.insert((row, col), ch);
                        let width = ch.width().unwrap_or(0).max(1) as u16;
                        for extra in 1..width {
                            cells.remove(&(row, col + extra));
                        }
                        col = col.saturating_add(width);
                    }
                }
                TermOp::Clear => cells.clear(),
                TermOp::Flush => {}
            }
        }

        let max_row = cells.keys().map(|(r, _)| *r).max().unwrap_or(0);
        let mut rows = vec![String::new(); max_row as usize];
        for r in 1..=max_row {
            let line = &mut rows[(r - 1) as usize];
            let mut next_col = 1u16;
            for (&(_, c), &ch) in cells.range((r, 0)..=(r, u16::MAX)) {
                while next_col < c {
                    line.push(' ');
                    next_col += 1;
                }
                line.push(ch);
                next_col = c + ch.width().unwrap_or(0).max(1) as u16;
            }
        }
        rows
    }
}

impl Terminal for OutputBuffer {
    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.ops.push(TermOp::MoveTo { row, col });
        Ok(())
    }

    fn write_styled(&mut self, text: &str, style: Style) -> io::Result<()> {
        self.ops.push(TermOp::Write {
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::Clear);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::Flush);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
