//! The widget contract.

use std::any::Any;
use std::fmt;
use std::io;

use crate::input::Key;
use crate::renderer::Terminal;
use crate::types::Size;

// =============================================================================
// ComponentKind
// =============================================================================

/// Which widget implementation a component is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    TextInput,
    SelectableList,
    SelectableGrid,
    ButtonGroup,
}

// =============================================================================
// CommitValue
// =============================================================================

/// Value a widget hands back when the user confirms with Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitValue {
    /// Current text of a [`TextInput`](super::TextInput).
    Text(String),
    /// Cursor index of a single-select list.
    Index(usize),
    /// Selected indices of a multi-select list, ascending.
    Indices(Vec<usize>),
    /// Cursor cell of a single-select grid.
    Cell { row: usize, col: usize },
    /// Selected cells of a multi-select grid, row-major ascending.
    Cells(Vec<(usize, usize)>),
    /// Label of the chosen button.
    Label(String),
}

impl fmt::Display for CommitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Index(index) => write!(f, "{index}"),
            Self::Indices(indices) => write!(f, "{indices:?}"),
            Self::Cell { row, col } => write!(f, "({row}, {col})"),
            Self::Cells(cells) => write!(f, "{cells:?}"),
            Self::Label(label) => write!(f, "{label}"),
        }
    }
}

// =============================================================================
// WidgetBase
// =============================================================================

/// State every widget carries: title, fixed size, visibility and focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBase {
    pub title: String,
    pub size: Size,
    pub visible: bool,
    pub focused: bool,
}

impl WidgetBase {
    pub fn new(title: impl Into<String>, size: Size) -> Self {
        Self {
            title: title.into(),
            size,
            visible: true,
            focused: false,
        }
    }

    /// Cells between the side borders.
    pub fn inner_width(&self) -> usize {
        usize::from(self.size.width.saturating_sub(2))
    }

    /// Content rows between the title + top border and the bottom border.
    pub fn content_rows(&self) -> usize {
        usize::from(self.size.height.saturating_sub(3))
    }
}

// =============================================================================
// Component
// =============================================================================

/// A widget the [`UiManager`](crate::ui::UiManager) can lay out, focus and
/// route keys to.
pub trait Component {
    fn kind(&self) -> ComponentKind;

    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Draw at the 0-based cell `(x, y)` if anything visible changed.
    ///
    /// Returns `Ok(false)` without touching the terminal when the widget is
    /// hidden or its snapshot equals the one drawn last.
    fn render(&mut self, terminal: &mut dyn Terminal, x: i32, y: i32) -> io::Result<bool>;

    /// Apply one key. Returns a value only when the user commits.
    fn handle_key(&mut self, key: &Key) -> Option<CommitValue>;

    /// Forget the last snapshot so the next render repaints.
    fn invalidate(&mut self);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// 1-based terminal `(column, row)` for the caret while focused.
    ///
    /// Defaults to one cell below the widget origin.
    fn cursor_position(&self, x: i32, y: i32) -> (i32, i32) {
        (x + 1, y + 2)
    }

    fn title(&self) -> &str {
        &self.base().title
    }

    fn size(&self) -> Size {
        self.base().size
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Show or hide. A hidden widget keeps its layout space; the next render
    /// after hiding blanks its cells, and showing it again repaints it.
    fn set_visible(&mut self, visible: bool) {
        if self.base().visible != visible {
            self.base_mut().visible = visible;
            if visible {
                self.invalidate();
            }
        }
    }

    fn has_focus(&self) -> bool {
        self.base().focused
    }

    fn set_focus(&mut self, focused: bool) {
        self.base_mut().focused = focused;
    }
}
