//! Replayable key source.

use std::collections::VecDeque;
use std::io;

use super::{InputEvent, Key, KeySource};

/// A [`KeySource`] that yields a fixed sequence of events.
///
/// Once drained, every read fails with `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    events: VecDeque<InputEvent>,
}

impl ScriptedKeys {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Build from keys only.
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::new(keys.into_iter().map(InputEvent::Key))
    }

    /// Each character of `text` as a key.
    pub fn typed(text: &str) -> Self {
        Self::from_keys(text.chars().map(Key::from))
    }

    /// Append one event.
    pub fn push(&mut self, event: impl Into<InputEvent>) {
        self.events.push_back(event.into());
    }

    /// Append every character of `text` as a key.
    pub fn push_text(&mut self, text: &str) {
        self.events
            .extend(text.chars().map(|c| InputEvent::Key(Key::from(c))));
    }

    /// Events not read yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut keys = ScriptedKeys::typed("a b");
        keys.push(Key::Enter);

        assert_eq!(keys.read_event().unwrap(), InputEvent::Key(Key::Char('a')));
        assert_eq!(keys.read_event().unwrap(), InputEvent::Key(Key::Space));
        assert_eq!(keys.read_event().unwrap(), InputEvent::Key(Key::Char('b')));
        assert_eq!(keys.read_event().unwrap(), InputEvent::Key(Key::Enter));
        assert_eq!(keys.remaining(), 0);
    }

    #[test]
    fn test_exhausted_is_eof() {
        let mut keys = ScriptedKeys::default();
        let err = keys.read_event().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
