//! Theme - maps [`Style`] tokens to concrete terminal styling.
//!
//! Widgets only know the five [`Style`] tokens. The crossterm backend
//! resolves each token through a [`Theme`] when it writes text, so swapping
//! the palette never touches widget code.
//!
//! # Presets
//!
//! - [`Theme::classic`] - blue titles, black-on-grey focus, blue selection
//! - [`Theme::monochrome`] - attributes only, for terminals without colour
//!
//! # Example
//!
//! ```rust
//! use teigui::theme::Theme;
//! use teigui::Style;
//!
//! let theme = Theme::classic();
//! let focus = theme.content_style(Style::Focus);
//! assert!(focus.background_color.is_some());
//! ```

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

use crate::config::ThemeConfig;
use crate::types::Style;

// =============================================================================
// Theme
// =============================================================================

/// Colour assignments for every [`Style`] token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title_fg: Option<Color>,
    pub focus_fg: Option<Color>,
    pub focus_bg: Option<Color>,
    pub selected_fg: Option<Color>,
    pub selected_bg: Option<Color>,
}

impl Theme {
    /// The default palette.
    pub const fn classic() -> Self {
        Self {
            title_fg: Some(Color::DarkBlue),
            focus_fg: Some(Color::Black),
            focus_bg: Some(Color::Grey),
            selected_fg: None,
            selected_bg: Some(Color::DarkBlue),
        }
    }

    /// No colours at all. Focus and selection fall back to attributes.
    pub const fn monochrome() -> Self {
        Self {
            title_fg: None,
            focus_fg: None,
            focus_bg: None,
            selected_fg: None,
            selected_bg: None,
        }
    }

    /// Resolve a token into a crossterm style.
    pub fn content_style(&self, style: Style) -> ContentStyle {
        let mut content = ContentStyle::new();
        match style {
            Style::Plain => {}
            Style::Title => {
                content.foreground_color = self.title_fg;
                if self.title_fg.is_none() {
                    content.attributes = Attributes::from(Attribute::Bold);
                }
            }
            Style::Focus => {
                content.foreground_color = self.focus_fg;
                content.background_color = self.focus_bg;
                if self.focus_bg.is_none() {
                    content.attributes = Attributes::from(Attribute::Reverse);
                }
            }
            Style::Highlight => {
                content.attributes = Attributes::from(Attribute::Reverse);
            }
            Style::Selected => {
                content.foreground_color = self.selected_fg;
                content.background_color = self.selected_bg;
                if self.selected_bg.is_none() {
                    content.attributes = Attributes::from(Attribute::Underlined);
                }
            }
        }
        content
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            title_fg: config.title_fg,
            focus_fg: config.focus_fg,
            focus_bg: config.focus_bg,
            selected_fg: config.selected_fg,
            selected_bg: config.selected_bg,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_unstyled() {
        let style = Theme::classic().content_style(Style::Plain);
        assert_eq!(style, ContentStyle::new());
    }

    #[test]
    fn test_classic_focus_colors() {
        let style = Theme::classic().content_style(Style::Focus);
        assert_eq!(style.foreground_color, Some(Color::Black));
        assert_eq!(style.background_color, Some(Color::Grey));
    }

    #[test]
    fn test_highlight_is_inverse() {
        let style = Theme::classic().content_style(Style::Highlight);
        assert!(style.attributes.has(Attribute::Reverse));
    }

    #[test]
    fn test_monochrome_falls_back_to_attributes() {
        let theme = Theme::monochrome();
        assert!(theme.content_style(Style::Focus).attributes.has(Attribute::Reverse));
        assert!(theme
            .content_style(Style::Selected)
            .attributes
            .has(Attribute::Underlined));
        assert!(theme.content_style(Style::Title).attributes.has(Attribute::Bold));
    }
}
