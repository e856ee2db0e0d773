//! Core types shared by the layout engine, widgets and renderer.
//!
//! - [`Size`] - Fixed cell dimensions of a widget
//! - [`ComponentId`] - Handle to a registered widget
//! - [`Alignment`] - Sticky flags for placing a widget inside its grid region
//! - [`Style`] - Named style tokens understood by every [`Terminal`](crate::renderer::Terminal)

// =============================================================================
// Size
// =============================================================================

/// Width and height of a widget in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// ComponentId
// =============================================================================

/// Handle to a component registered with a [`UiManager`](crate::ui::UiManager).
///
/// Ids are handed out in registration order, which is also the tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    /// Registration index of this component.
    pub fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// Alignment (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Where a component sits inside the region spanned by its placement.
    ///
    /// Each axis is resolved independently. `EAST` / `SOUTH` pin to the
    /// trailing edge and win over `WEST` / `NORTH`, which pin to the leading
    /// edge. An axis with no flag centres the component.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Alignment: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const EAST = 1 << 2;
        const WEST = 1 << 3;
    }
}

impl Alignment {
    /// No directional flag: centred on both axes.
    pub const CENTER: Self = Self::empty();
    /// Every directional flag.
    pub const FILL: Self = Self::all();

    /// Parse a Tk-style sticky string such as `"nsew"`, `"w"` or `"se"`.
    ///
    /// `"center"` and `"fill"` are whole words. Unknown letters are ignored.
    pub fn from_sticky(sticky: &str) -> Self {
        let sticky = sticky.trim().to_ascii_lowercase();
        match sticky.as_str() {
            "" | "center" | "centre" => return Self::CENTER,
            "fill" => return Self::FILL,
            _ => {}
        }

        let mut flags = Self::empty();
        for c in sticky.chars() {
            match c {
                'n' => flags |= Self::NORTH,
                's' => flags |= Self::SOUTH,
                'e' => flags |= Self::EAST,
                'w' => flags |= Self::WEST,
                _ => {}
            }
        }
        flags
    }
}

// =============================================================================
// Style tokens
// =============================================================================

/// Style token passed to [`Terminal::write_styled`](crate::renderer::Terminal::write_styled).
///
/// Widgets never emit raw colours. The terminal maps each token through its
/// [`Theme`](crate::theme::Theme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Terminal defaults (reset).
    #[default]
    Plain,
    /// Widget titles.
    Title,
    /// Border and content of the focused widget, and the active button.
    Focus,
    /// Cursor row/cell of a focused list or grid (inverse video).
    Highlight,
    /// Items that are part of a multi-selection.
    Selected,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_letters() {
        assert_eq!(Alignment::from_sticky("nsew"), Alignment::FILL);
        assert_eq!(Alignment::from_sticky("w"), Alignment::WEST);
        assert_eq!(
            Alignment::from_sticky("SE"),
            Alignment::SOUTH | Alignment::EAST
        );
    }

    #[test]
    fn test_sticky_words() {
        // "center" contains 'n' and 'e' but must not read as north-east
        assert_eq!(Alignment::from_sticky("center"), Alignment::CENTER);
        assert_eq!(Alignment::from_sticky("fill"), Alignment::FILL);
        assert_eq!(Alignment::from_sticky(""), Alignment::CENTER);
    }

    #[test]
    fn test_default_style_is_plain() {
        assert_eq!(Style::default(), Style::Plain);
    }
}
