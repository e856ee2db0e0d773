//! crossterm event conversion.
//!
//! crossterm already decodes escape sequences (and the Windows console's
//! extended-key prefixes) into structured events; this module narrows them
//! to [`Key`] and drops what the toolkit does not use.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{InputEvent, Key, KeySource};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm key event.
///
/// Returns `None` for release/repeat events, which carry no new input.
pub fn convert_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Key::Interrupt,
        KeyCode::Char(_) if ctrl => Key::Unknown,
        KeyCode::Char(c) => Key::from(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => Key::Unknown,
    };
    Some(key)
}

/// Convert any crossterm event. Mouse, focus and paste events yield `None`.
pub fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => convert_key_event(key).map(InputEvent::Key),
        Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

// =============================================================================
// CROSSTERM KEY SOURCE
// =============================================================================

/// Blocking reader over `crossterm::event::read`.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(event) = convert_event(event::read()?) {
                return Ok(event);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_arrows() {
        assert_eq!(convert_key_event(press(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(convert_key_event(press(KeyCode::Down, KeyModifiers::NONE)), Some(Key::Down));
        assert_eq!(convert_key_event(press(KeyCode::Left, KeyModifiers::NONE)), Some(Key::Left));
        assert_eq!(convert_key_event(press(KeyCode::Right, KeyModifiers::NONE)), Some(Key::Right));
    }

    #[test]
    fn test_chars_and_space() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Key::Char('q'))
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Key::Char('Q'))
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Key::Space)
        );
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Key::Unknown)
        );
    }

    #[test]
    fn test_tab_variants() {
        assert_eq!(convert_key_event(press(KeyCode::Tab, KeyModifiers::NONE)), Some(Key::Tab));
        assert_eq!(
            convert_key_event(press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Key::BackTab)
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(release), None);
    }

    #[test]
    fn test_unclassified_key() {
        assert_eq!(convert_key_event(press(KeyCode::F(5), KeyModifiers::NONE)), Some(Key::Unknown));
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(convert_event(Event::Resize(80, 24)), Some(InputEvent::Resize(80, 24)));
        assert_eq!(convert_event(Event::FocusGained), None);
    }
}
