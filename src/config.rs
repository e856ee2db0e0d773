//! Configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//!
//! ```toml
//! [layout]
//! column_gap = 2
//! row_gap = 1
//! default_column_width = 10
//! default_row_height = 3
//!
//! [theme]
//! title_fg = "dark_blue"
//! focus_fg = "black"
//! focus_bg = "grey"
//! selected_bg = "dark_blue"
//! ```

use std::fs;
use std::path::Path;

use crossterm::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::Theme;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
}

impl UiConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded ui config");
        Ok(config)
    }

    /// Theme built from the `[theme]` table.
    pub fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }
}

/// Grid solver constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Cells between adjacent columns.
    pub column_gap: u16,
    /// Cells between adjacent rows.
    pub row_gap: u16,
    /// Width of a column no placement contributes to.
    pub default_column_width: u16,
    /// Height of a row no placement contributes to.
    pub default_row_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_gap: 2,
            row_gap: 1,
            default_column_width: 10,
            default_row_height: 3,
        }
    }
}

/// Palette overrides. Colour names follow crossterm (`"dark_blue"`,
/// `"grey"`, `"ansi_(33)"`, `"rgb_(0,95,135)"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub title_fg: Option<Color>,
    pub focus_fg: Option<Color>,
    pub focus_bg: Option<Color>,
    pub selected_fg: Option<Color>,
    pub selected_bg: Option<Color>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let classic = Theme::classic();
        Self {
            title_fg: classic.title_fg,
            focus_fg: classic.focus_fg,
            focus_bg: classic.focus_bg,
            selected_fg: classic.selected_fg,
            selected_bg: classic.selected_bg,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
