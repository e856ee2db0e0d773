//! Layout Module
//!
//! Grid layout for character-cell widgets.
//!
//! # Architecture
//!
//! [`LayoutManager`] holds one [`Placement`] per registered component and
//! solves them into absolute cell positions:
//!
//! 1. Measures column widths / row heights from component sizes
//! 2. Builds cumulative offsets with fixed gaps
//! 3. Resolves padding and sticky alignment inside each spanned region
//!
//! # Example
//!
//! ```ignore
//! use teigui::layout::{LayoutManager, PlacementOptions};
//!
//! let mut layout = LayoutManager::new();
//! layout.add_placement(id, Size::new(30, 4), 0, 0, PlacementOptions::new().sticky("w"));
//! layout.calculate();
//! let (x, y) = layout.position(id);
//! ```

mod grid;
mod text_measure;

pub use grid::*;
pub use text_measure::*;
