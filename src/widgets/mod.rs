//! Widgets - the interactive building blocks.
//!
//! Every widget implements [`Component`]:
//! - [`TextInput`] - single-line text entry
//! - [`SelectableList`] - vertical list, single or multi-select, scrolling
//! - [`SelectableGrid`] - 2-D cell picker, single or multi-select
//! - [`ButtonGroup`] - a row of buttons
//!
//! # Rendering
//!
//! Widgets draw in absolute cells. Row 0 of a widget is its title; bordered
//! widgets put the top border on row 1, content on rows `2..height-1` and
//! the bottom border on the last row. Each widget keeps a snapshot of what
//! it drew and skips the frame entirely when nothing visible changed.
//!
//! # Keys
//!
//! `handle_key` mutates local state and returns a [`CommitValue`] only for
//! `Enter`. Focus cycling and exit keys never reach a widget.

mod button_group;
mod component;
mod frame;
mod list;
mod scroll;
mod selectable_grid;
mod text_input;

pub use button_group::{ButtonGroup, ButtonSnapshot};
pub use component::{CommitValue, Component, ComponentKind, WidgetBase};
pub use list::{ListSnapshot, SelectableList};
pub use selectable_grid::{GridSnapshot, SelectableGrid};
pub use text_input::{TextInput, TextInputSnapshot};
