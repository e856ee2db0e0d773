//! Terminal renderer - the output side of the toolkit.
//!
//! Widgets draw through the [`Terminal`] trait, which exposes exactly the
//! primitives a character-grid UI needs: absolute cursor moves, styled
//! writes, screen clears and a frame flush.
//!
//! # Backends
//!
//! - [`CrosstermTerminal`]: queues crossterm commands into a buffered writer
//!   and flushes once per frame
//! - [`OutputBuffer`]: records every operation; used for headless runs and
//!   tests
//!
//! [`SnapshotCache`] implements the per-widget diff that keeps unchanged
//! widgets from emitting anything at all.

pub mod backend;
pub mod diff;
pub mod output;
pub mod session;

use std::io;

use crate::types::Style;

pub use backend::CrosstermTerminal;
pub use diff::SnapshotCache;
pub use output::{OutputBuffer, TermOp};
pub use session::TerminalSession;

/// Minimal terminal capability used by every widget.
pub trait Terminal {
    /// Move the cursor to a 1-based `(row, col)`.
    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;

    /// Write text at the cursor with the given style, then reset.
    fn write_styled(&mut self, text: &str, style: Style) -> io::Result<()>;

    /// Erase the whole screen.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Push everything queued for this frame to the device.
    fn flush(&mut self) -> io::Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        (**self).move_to(row, col)
    }

    fn write_styled(&mut self, text: &str, style: Style) -> io::Result<()> {
        (**self).write_styled(text, style)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Write `text` at a 0-based cell position.
///
/// Negative coordinates (an oversized widget pushed past the screen origin)
/// are clamped to the first row/column.
pub fn write_at(
    terminal: &mut dyn Terminal,
    x: i32,
    y: i32,
    text: &str,
    style: Style,
) -> io::Result<()> {
    terminal.move_to(to_one_based(y), to_one_based(x))?;
    terminal.write_styled(text, style)
}

/// Convert a 0-based signed cell coordinate to a 1-based terminal one.
pub fn to_one_based(coord: i32) -> u16 {
    coord.clamp(0, i32::from(u16::MAX) - 1) as u16 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_one_based() {
        assert_eq!(to_one_based(0), 1);
        assert_eq!(to_one_based(9), 10);
        assert_eq!(to_one_based(-3), 1);
    }

    #[test]
    fn test_write_at_moves_then_writes() {
        let mut out = OutputBuffer::new();
        write_at(&mut out, 4, 2, "hi", Style::Title).unwrap();
        assert_eq!(
            out.ops(),
            &[
                TermOp::MoveTo { row: 3, col: 5 },
                TermOp::Write {
                    text: "hi".to_string(),
                    style: Style::Title
                },
            ]
        );
    }
}
