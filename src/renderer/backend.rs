//! crossterm backend.
//!
//! Commands are queued into the writer and only reach the device on
//! [`Terminal::flush`], so one frame is a single write to the terminal.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::PrintStyledContent;
use crossterm::terminal::{Clear, ClearType};

use super::Terminal;
use crate::theme::Theme;
use crate::types::Style;

/// Frame buffer capacity for the stdout backend.
const FRAME_CAPACITY: usize = 16 * 1024;

/// [`Terminal`] implementation emitting ANSI sequences through crossterm.
pub struct CrosstermTerminal<W: Write> {
    out: W,
    theme: Theme,
}

impl CrosstermTerminal<BufWriter<Stdout>> {
    /// Buffered stdout with the given theme.
    pub fn stdout(theme: Theme) -> Self {
        Self::new(BufWriter::with_capacity(FRAME_CAPACITY, io::stdout()), theme)
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        // crossterm is 0-based and takes (column, row)
        queue!(self.out, MoveTo(col.saturating_sub(1), row.saturating_sub(1)))
    }

    fn write_styled(&mut self, text: &str, style: Style) -> io::Result<()> {
        let styled = self.theme.content_style(style).apply(text);
        queue!(self.out, PrintStyledContent(styled))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut CrosstermTerminal<Vec<u8>>)) -> String {
        let mut term = CrosstermTerminal::new(Vec::new(), Theme::classic());
        f(&mut term);
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn test_move_to_is_one_based() {
        let out = render(|t| t.move_to(3, 5).unwrap());
        assert_eq!(out, "\x1b[3;5H");
    }

    #[test]
    fn test_plain_write_has_no_color() {
        let out = render(|t| t.write_styled("abc", Style::Plain).unwrap());
        assert!(out.contains("abc"));
        assert!(!out.contains("\x1b[38"));
    }

    #[test]
    fn test_styled_write_emits_sgr() {
        let out = render(|t| t.write_styled("abc", Style::Selected).unwrap());
        assert!(out.contains("abc"));
        assert!(out.contains('\x1b'));
        assert!(out.len() > "abc".len());
    }

    #[test]
    fn test_clear_screen() {
        let out = render(|t| t.clear_screen().unwrap());
        assert_eq!(out, "\x1b[2J");
    }
}
