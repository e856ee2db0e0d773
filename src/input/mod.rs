//! Input - logical key events and the sources that produce them.
//!
//! Raw terminal input (escape sequences, extended-key prefixes, key release
//! events) never reaches the widgets. A [`KeySource`] resolves it into one
//! [`Key`] per read, so every widget matches on the same small enum.
//!
//! # Sources
//!
//! - [`CrosstermKeys`] - blocking reads from the real terminal
//! - [`ScriptedKeys`] - a fixed queue of events, for tests and demos

mod convert;
mod scripted;

use std::io;

pub use convert::{CrosstermKeys, convert_event, convert_key_event};
pub use scripted::ScriptedKeys;

// =============================================================================
// TYPES
// =============================================================================

/// A fully resolved logical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character other than space.
    Char(char),
    /// Space bar. Toggles selection; inserts `' '` in text inputs.
    Space,
    /// Commit.
    Enter,
    Backspace,
    /// Leave the event loop.
    Escape,
    /// Focus the next component.
    Tab,
    /// Focus the previous component (Shift+Tab).
    BackTab,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+C. Raw mode swallows SIGINT, so this is treated like Escape.
    Interrupt,
    /// Anything that could not be classified. Always ignored.
    Unknown,
}

impl Key {
    /// The character this key would insert into text, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_control() => Some(*c),
            Self::Space => Some(' '),
            _ => None,
        }
    }

    /// True for keys that stop the event loop.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Escape | Self::Interrupt)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            ' ' => Self::Space,
            '\r' | '\n' => Self::Enter,
            '\t' => Self::Tab,
            '\x08' | '\x7f' => Self::Backspace,
            '\x1b' => Self::Escape,
            '\x03' => Self::Interrupt,
            c if c.is_control() => Self::Unknown,
            c => Self::Char(c),
        }
    }
}

/// One unit read from a [`KeySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

// =============================================================================
// KEY SOURCE
// =============================================================================

/// Blocking producer of input events.
pub trait KeySource {
    /// Block until the next event is available.
    ///
    /// Returns `ErrorKind::UnexpectedEof` once the source is exhausted.
    fn read_event(&mut self) -> io::Result<InputEvent>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        (**self).read_event()
    }
}

// =============================================================================
// TESTS
// =============================================================================
