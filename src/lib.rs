//! # teigui
//!
//! Character-grid terminal UI toolkit.
//!
//! Widgets are placed on a declarative grid (row, column, spans, padding,
//! sticky alignment), drawn with box-drawing characters and driven by a
//! single-threaded keyboard loop with Tab focus cycling.
//!
//! ## Architecture
//!
//! ```text
//! KeySource → UiManager → focused Component → Commit handler
//!                 │
//!                 ├─ LayoutManager (measure tracks, offsets, place)
//!                 └─ Component::render → SnapshotCache diff → Terminal
//! ```
//!
//! A widget only touches the terminal when its snapshot differs from the
//! one it drew last, so a loop turn that changes one widget repaints one
//! widget.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Size, ComponentId, Alignment, Style)
//! - [`layout`] - Grid solver and text measurement
//! - [`widgets`] - The [`Component`] trait and the concrete widgets
//! - [`renderer`] - Terminal backends, snapshot diffing, session guard
//! - [`input`] - Logical keys and key sources
//! - [`ui`] - Focus, dispatch and the event loop
//! - [`config`] / [`theme`] - TOML configuration and colours
//! - [`logging`] - File-backed `tracing` subscriber

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod renderer;
pub mod theme;
pub mod types;
pub mod ui;
pub mod widgets;

// Re-export commonly used items
pub use types::*;

pub use config::{LayoutConfig, ThemeConfig, UiConfig};
pub use error::{ConfigError, LoggingError, UiError};
pub use input::{CrosstermKeys, InputEvent, Key, KeySource, ScriptedKeys};
pub use layout::{LayoutGeometry, LayoutManager, Placement, PlacementOptions, string_width};
pub use renderer::{CrosstermTerminal, OutputBuffer, SnapshotCache, TermOp, Terminal, TerminalSession};
pub use theme::Theme;
pub use ui::{Commit, LoopState, UiManager};
pub use widgets::{
    ButtonGroup, CommitValue, Component, ComponentKind, SelectableGrid, SelectableList, TextInput,
    WidgetBase,
};

/// Everything needed to build and run a form.
pub mod prelude {
    pub use crate::input::{CrosstermKeys, InputEvent, Key, KeySource, ScriptedKeys};
    pub use crate::layout::PlacementOptions;
    pub use crate::renderer::{CrosstermTerminal, OutputBuffer, Terminal, TerminalSession};
    pub use crate::types::{Alignment, ComponentId, Size, Style};
    pub use crate::ui::{Commit, LoopState, UiManager};
    pub use crate::widgets::{
        ButtonGroup, CommitValue, Component, SelectableGrid, SelectableList, TextInput,
    };
}
