//! UI manager - focus, dispatch and the event loop.
//!
//! [`UiManager`] owns the registered components, the [`LayoutManager`] that
//! places them, a [`Terminal`] to draw on and a [`KeySource`] to read from.
//! Exactly one component holds focus at a time (the first one registered,
//! until Tab/Shift+Tab or [`UiManager::focus`] moves it).
//!
//! Each loop turn reads one event, routes it, then redraws. Redraws are
//! cheap: every widget compares its snapshot with the last frame and emits
//! nothing when unchanged.
//!
//! # Example
//!
//! ```ignore
//! use teigui::prelude::*;
//!
//! let mut ui = UiManager::new(OutputBuffer::new(), ScriptedKeys::typed("hi\r\x1b"));
//! let name = ui.register(TextInput::new("Name", 20), 0, 0, PlacementOptions::new());
//! ui.on_commit(|commit| println!("{commit:?}"));
//! ui.run()?;
//! assert_eq!(ui.widget::<TextInput>(name).unwrap().text(), "hi");
//! ```

use std::io;

use crate::config::LayoutConfig;
use crate::error::UiError;
use crate::input::{InputEvent, Key, KeySource};
use crate::layout::{LayoutManager, PlacementOptions};
use crate::renderer::{Terminal, to_one_based};
use crate::types::ComponentId;
use crate::widgets::{CommitValue, Component};

// =============================================================================
// TYPES
// =============================================================================

/// Where the event loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Never started.
    #[default]
    Idle,
    Running,
    /// An exit key was pressed.
    Stopped,
}

/// A value committed by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub source: ComponentId,
    pub value: CommitValue,
}

type CommitHandler = Box<dyn FnMut(&Commit)>;

// =============================================================================
// UiManager
// =============================================================================

pub struct UiManager<T, K> {
    layout: LayoutManager,
    components: Vec<Box<dyn Component>>,
    focus: usize,
    state: LoopState,
    terminal: T,
    keys: K,
    on_commit: Option<CommitHandler>,
    /// Placements changed since the last layout pass.
    layout_dirty: bool,
}

impl<T: Terminal, K: KeySource> UiManager<T, K> {
    pub fn new(terminal: T, keys: K) -> Self {
        Self::with_config(terminal, keys, LayoutConfig::default())
    }

    pub fn with_config(terminal: T, keys: K, config: LayoutConfig) -> Self {
        Self {
            layout: LayoutManager::with_config(config),
            components: Vec::new(),
            focus: 0,
            state: LoopState::Idle,
            terminal,
            keys,
            on_commit: None,
            layout_dirty: true,
        }
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Add a component at grid cell `(row, column)`.
    ///
    /// The first component registered receives focus. The next redraw lays
    /// the grid out again, since the new tracks may move other components.
    pub fn register<C>(&mut self, component: C, row: u16, column: u16, options: PlacementOptions) -> ComponentId
    where
        C: Component + 'static,
    {
        let id = ComponentId(self.components.len());
        self.layout.add_placement(id, component.size(), row, column, options);

        let mut component: Box<dyn Component> = Box::new(component);
        component.set_focus(self.components.is_empty());
        tracing::debug!(id = id.index(), kind = ?component.kind(), row, column, "registered component");
        self.components.push(component);
        self.layout_dirty = true;
        id
    }

    /// Receive every [`Commit`]. Replaces any previous handler.
    pub fn on_commit(&mut self, handler: impl FnMut(&Commit) + 'static) {
        self.on_commit = Some(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Move focus to the next component, wrapping around.
    pub fn cycle_focus(&mut self) {
        let len = self.components.len();
        if len >= 2 {
            self.move_focus((self.focus + 1) % len);
        }
    }

    /// Move focus to the previous component, wrapping around.
    pub fn cycle_focus_back(&mut self) {
        let len = self.components.len();
        if len >= 2 {
            self.move_focus((self.focus + len - 1) % len);
        }
    }

    /// Focus `id` directly. Returns false if no such component exists.
    pub fn focus(&mut self, id: ComponentId) -> bool {
        if id.index() >= self.components.len() {
            return false;
        }
        self.move_focus(id.index());
        true
    }

    fn move_focus(&mut self, to: usize) {
        if to == self.focus {
            return;
        }
        self.components[self.focus].set_focus(false);
        self.components[to].set_focus(true);
        tracing::debug!(from = self.focus, to, "focus moved");
        self.focus = to;
    }

    /// The focused component, `None` before anything is registered.
    pub fn focused(&self) -> Option<ComponentId> {
        (!self.components.is_empty()).then_some(ComponentId(self.focus))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Lay everything out and paint a full frame on a cleared screen.
    pub fn initialize(&mut self) -> io::Result<()> {
        self.layout.calculate();
        self.terminal.clear_screen()?;
        for component in &mut self.components {
            component.invalidate();
        }
        self.layout_dirty = false;
        self.paint()
    }

    /// Paint whatever changed, park the caret on the focused component and
    /// flush the frame.
    ///
    /// Falls back to [`initialize`](Self::initialize) when components were
    /// registered since the last layout pass.
    pub fn redraw(&mut self) -> io::Result<()> {
        if self.layout_dirty {
            tracing::debug!("placements changed, relayout");
            return self.initialize();
        }
        self.paint()
    }

    fn paint(&mut self) -> io::Result<()> {
        for (index, component) in self.components.iter_mut().enumerate() {
            let (x, y) = self.layout.position(ComponentId(index));
            if !component.render(&mut self.terminal, x, y)? {
                tracing::trace!(index, "render skipped");
            }
        }
        self.place_caret()?;
        self.terminal.flush()
    }

    fn place_caret(&mut self) -> io::Result<()> {
        let Some(component) = self.components.get(self.focus) else {
            return Ok(());
        };
        let (x, y) = self.layout.position(ComponentId(self.focus));
        let (col, row) = component.cursor_position(x, y);
        self.terminal.move_to(to_one_based(row - 1), to_one_based(col - 1))
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Apply one key and redraw.
    ///
    /// Tab and Shift+Tab move focus, Escape and Ctrl+C stop the loop, and
    /// everything else goes to the focused component. Returns the commit the
    /// key produced, if any.
    pub fn handle_key(&mut self, key: Key) -> Result<Option<Commit>, UiError> {
        let mut commit = None;
        match key {
            Key::Tab => self.cycle_focus(),
            Key::BackTab => self.cycle_focus_back(),
            key if key.is_exit() => {
                self.state = LoopState::Stopped;
                tracing::info!(?key, "exit requested");
                return Ok(None);
            }
            Key::Unknown => tracing::trace!("ignored unknown key"),
            key => commit = self.dispatch(key),
        }
        self.redraw()?;
        Ok(commit)
    }

    /// Apply one input event. A resize repaints everything from scratch.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Option<Commit>, UiError> {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                self.initialize()?;
                Ok(None)
            }
        }
    }

    fn dispatch(&mut self, key: Key) -> Option<Commit> {
        let component = self.components.get_mut(self.focus)?;
        let value = component.handle_key(&key)?;
        let commit = Commit {
            source: ComponentId(self.focus),
            value,
        };
        tracing::info!(source = self.focus, value = %commit.value, "commit");
        if let Some(handler) = self.on_commit.as_mut() {
            handler(&commit);
        }
        Some(commit)
    }

    /// Run the event loop until an exit key is pressed.
    ///
    /// Fails with [`UiError::NoComponents`] when nothing is registered and
    /// with [`UiError::InputClosed`] when the key source runs dry first.
    pub fn run(&mut self) -> Result<(), UiError> {
        if self.components.is_empty() {
            return Err(UiError::NoComponents);
        }
        self.state = LoopState::Running;
        tracing::info!(components = self.components.len(), "event loop started");
        self.initialize()?;

        while self.state == LoopState::Running {
            let event = match self.keys.read_event() {
                Ok(event) => event,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    self.state = LoopState::Stopped;
                    return Err(UiError::InputClosed);
                }
                Err(err) => return Err(err.into()),
            };
            self.handle_event(event)?;
        }

        tracing::info!("event loop stopped");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }

    /// Top-left cell of `id` from the last layout pass.
    pub fn position(&self, id: ComponentId) -> (i32, i32) {
        self.layout.position(id)
    }

    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components.get(id.index()).map(|c| &**c)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        match self.components.get_mut(id.index()) {
            Some(component) => Some(&mut **component),
            None => None,
        }
    }

    /// Typed access to a registered widget.
    pub fn widget<W: Component + 'static>(&self, id: ComponentId) -> Option<&W> {
        self.component(id)?.as_any().downcast_ref()
    }

    pub fn widget_mut<W: Component + 'static>(&mut self, id: ComponentId) -> Option<&mut W> {
        self.component_mut(id)?.as_any_mut().downcast_mut()
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    /// Give back the terminal and key source.
    pub fn into_parts(self) -> (T, K) {
        (self.terminal, self.keys)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedKeys;
    use crate::renderer::OutputBuffer;
    use crate::widgets::{ButtonGroup, SelectableList, TextInput};

    type TestUi = UiManager<OutputBuffer, ScriptedKeys>;

    fn ui() -> TestUi {
        UiManager::new(OutputBuffer::new(), ScriptedKeys::default())
    }

    fn focused_count(ui: &TestUi) -> usize {
        (0..ui.len())
            .filter(|&i| ui.component(ComponentId(i)).unwrap().has_focus())
            .count()
    }

    #[test]
    fn test_first_registered_is_focused() {
        let mut ui = ui();
        assert_eq!(ui.focused(), None);
        let a = ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        let b = ui.register(TextInput::new("B", 10), 1, 0, PlacementOptions::new());
        assert_eq!(ui.focused(), Some(a));
        assert!(!ui.component(b).unwrap().has_focus());
    }

    #[test]
    fn test_cycle_focus_wraps_both_ways() {
        let mut ui = ui();
        let a = ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        let b = ui.register(TextInput::new("B", 10), 1, 0, PlacementOptions::new());
        let c = ui.register(TextInput::new("C", 10), 2, 0, PlacementOptions::new());

        ui.cycle_focus();
        assert_eq!(ui.focused(), Some(b));
        ui.cycle_focus();
        ui.cycle_focus();
        assert_eq!(ui.focused(), Some(a));

        ui.cycle_focus_back();
        assert_eq!(ui.focused(), Some(c));
        assert_eq!(focused_count(&ui), 1);
    }

    #[test]
    fn test_cycle_focus_single_component() {
        let mut ui = ui();
        let a = ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        ui.cycle_focus();
        ui.cycle_focus_back();
        assert_eq!(ui.focused(), Some(a));
        assert!(ui.component(a).unwrap().has_focus());
    }

    #[test]
    fn test_focus_direct() {
        let mut ui = ui();
        ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        let b = ui.register(TextInput::new("B", 10), 1, 0, PlacementOptions::new());
        assert!(ui.focus(b));
        assert_eq!(ui.focused(), Some(b));
        assert!(!ui.focus(ComponentId(7)));
        assert_eq!(focused_count(&ui), 1);
    }

    #[test]
    fn test_keys_go_to_focused_only() {
        let mut ui = ui();
        let a = ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        let b = ui.register(TextInput::new("B", 10), 1, 0, PlacementOptions::new());

        ui.handle_key(Key::Char('x')).unwrap();
        ui.handle_key(Key::Tab).unwrap();
        ui.handle_key(Key::Char('y')).unwrap();

        assert_eq!(ui.widget::<TextInput>(a).unwrap().text(), "x");
        assert_eq!(ui.widget::<TextInput>(b).unwrap().text(), "y");
    }

    #[test]
    fn test_commit_reaches_handler() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut ui = ui();
        let list = ui.register(
            SelectableList::new("L", 10, 6).with_items(["a", "b"]),
            0,
            0,
            PlacementOptions::new(),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        ui.on_commit(move |commit| sink.borrow_mut().push(commit.clone()));

        ui.handle_key(Key::Down).unwrap();
        let commit = ui.handle_key(Key::Enter).unwrap();

        let expected = Commit {
            source: list,
            value: CommitValue::Index(1),
        };
        assert_eq!(commit, Some(expected.clone()));
        assert_eq!(*seen.borrow(), vec![expected]);
    }

    #[test]
    fn test_exit_keys_stop() {
        for key in [Key::Escape, Key::Interrupt] {
            let mut ui = ui();
            ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
            assert_eq!(ui.handle_key(key).unwrap(), None);
            assert_eq!(ui.state(), LoopState::Stopped);
        }
    }

    #[test]
    fn test_redraw_is_quiet_when_unchanged() {
        let mut ui = ui();
        ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        ui.register(ButtonGroup::new("B", ["OK"], 10), 1, 0, PlacementOptions::new());
        ui.initialize().unwrap();
        assert!(ui.terminal().write_count() > 0);

        ui.terminal_mut().clear();
        ui.redraw().unwrap();
        assert_eq!(ui.terminal().write_count(), 0);
        assert_eq!(ui.terminal().ops().last(), Some(&crate::renderer::TermOp::Flush));
    }

    #[test]
    fn test_caret_parked_on_focused_input() {
        let mut ui = ui();
        ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new().padding(0, 0));
        ui.initialize().unwrap();
        ui.handle_key(Key::Char('a')).unwrap();
        // content row 3 (1-based), one cell past the typed char
        assert_eq!(ui.terminal().last_move(), Some((3, 3)));
    }

    #[test]
    fn test_register_after_initialize_relayouts() {
        let mut ui = ui();
        let a = ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new().sticky("nw"));
        ui.initialize().unwrap();
        assert_eq!(ui.position(a), (2, 1));

        let b = ui.register(TextInput::new("B", 10), 0, 1, PlacementOptions::new().sticky("nw"));
        ui.terminal_mut().clear();
        ui.redraw().unwrap();

        // column 0 is 10 wide, then a gap of 2 and padding of 2
        assert_eq!(ui.position(b), (14, 1));
        assert_eq!(ui.terminal().ops().first(), Some(&crate::renderer::TermOp::Clear));
        let screen = ui.terminal().screen();
        assert_eq!(screen[1], format!("  A{}B", " ".repeat(11)));

        // nothing new registered: back to diffed redraws
        ui.terminal_mut().clear();
        ui.redraw().unwrap();
        assert_eq!(ui.terminal().write_count(), 0);
    }

    #[test]
    fn test_run_without_components() {
        let mut ui = ui();
        assert!(matches!(ui.run(), Err(UiError::NoComponents)));
        assert_eq!(ui.state(), LoopState::Idle);
    }

    #[test]
    fn test_run_until_input_closes() {
        let mut ui = UiManager::new(OutputBuffer::new(), ScriptedKeys::typed("ab"));
        ui.register(TextInput::new("A", 10), 0, 0, PlacementOptions::new());
        assert!(matches!(ui.run(), Err(UiError::InputClosed)));
    }
}
