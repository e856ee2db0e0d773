//! Grid layout solver.
//!
//! Components are placed on a grid of rows and columns with spans, padding
//! and sticky alignment. Track sizes are derived from the components
//! themselves, so there is nothing to configure beyond the placements.
//!
//! # Algorithm
//!
//! 1. **Measure** - every placement spreads its width evenly over its
//!    spanned columns (floor division); a column is as wide as the widest
//!    share it receives. Rows likewise with heights.
//! 2. **Offset** - prefix sums over track sizes plus a fixed gap.
//! 3. **Place** - start at the cell origin plus padding, then resolve
//!    alignment on each axis within the summed size of the spanned tracks.
//!
//! `calculate()` is a pure function of the placement set: calling it twice
//! yields the same positions.

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::types::{Alignment, ComponentId, Size};

// =============================================================================
// PlacementOptions
// =============================================================================

/// Span, padding and alignment of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOptions {
    pub row_span: u16,
    pub column_span: u16,
    pub pad_x: u16,
    pub pad_y: u16,
    pub alignment: Alignment,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            row_span: 1,
            column_span: 1,
            pad_x: 2,
            pad_y: 1,
            alignment: Alignment::FILL,
        }
    }
}

impl PlacementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_span(mut self, span: u16) -> Self {
        self.row_span = span;
        self
    }

    pub fn column_span(mut self, span: u16) -> Self {
        self.column_span = span;
        self
    }

    pub fn padding(mut self, pad_x: u16, pad_y: u16) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Alignment from a sticky string, see [`Alignment::from_sticky`].
    pub fn sticky(self, sticky: &str) -> Self {
        self.alignment(Alignment::from_sticky(sticky))
    }
}

// =============================================================================
// Placement
// =============================================================================

/// A component bound to a region of the grid.
///
/// The layout refers to the component by id and keeps a copy of its size;
/// it never owns the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub component: ComponentId,
    pub size: Size,
    pub row: u16,
    pub column: u16,
    pub options: PlacementOptions,
}

impl Placement {
    fn row_span(&self) -> usize {
        usize::from(self.options.row_span.max(1))
    }

    fn column_span(&self) -> usize {
        usize::from(self.options.column_span.max(1))
    }

    fn columns(&self) -> std::ops::Range<usize> {
        let start = usize::from(self.column);
        start..start + self.column_span()
    }

    fn rows(&self) -> std::ops::Range<usize> {
        let start = usize::from(self.row);
        start..start + self.row_span()
    }
}

// =============================================================================
// LayoutGeometry
// =============================================================================

/// Track sizes and offsets from the last `calculate()`.
///
/// `column_offsets` has one more entry than `column_widths`: the final entry
/// is the right edge of the last column plus its gap. Same for rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub column_widths: Vec<i32>,
    pub row_heights: Vec<i32>,
    pub column_offsets: Vec<i32>,
    pub row_offsets: Vec<i32>,
}

impl LayoutGeometry {
    pub fn is_empty(&self) -> bool {
        self.column_widths.is_empty() && self.row_heights.is_empty()
    }
}

// =============================================================================
// LayoutManager
// =============================================================================

/// Grid layout manager.
#[derive(Debug, Clone, Default)]
pub struct LayoutManager {
    config: LayoutConfig,
    placements: Vec<Placement>,
    geometry: LayoutGeometry,
    positions: HashMap<ComponentId, (i32, i32)>,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout with custom gaps and default track sizes.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Register a component's region. Overlaps are not checked.
    ///
    /// Takes effect on the next [`calculate`](Self::calculate).
    pub fn add_placement(
        &mut self,
        component: ComponentId,
        size: Size,
        row: u16,
        column: u16,
        options: PlacementOptions,
    ) {
        self.placements.push(Placement {
            component,
            size,
            row,
            column,
            options,
        });
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    /// Cached top-left cell of `component`, `(0, 0)` if it was never placed.
    pub fn position(&self, component: ComponentId) -> (i32, i32) {
        self.positions.get(&component).copied().unwrap_or((0, 0))
    }

    /// Recompute all geometry from scratch.
    pub fn calculate(&mut self) {
        let column_count = self
            .placements
            .iter()
            .map(|p| p.columns().end)
            .max()
            .unwrap_or(0);
        let row_count = self
            .placements
            .iter()
            .map(|p| p.rows().end)
            .max()
            .unwrap_or(0);

        // 1. Measure
        let mut column_widths = vec![0i32; column_count];
        let mut row_heights = vec![0i32; row_count];
        for p in &self.placements {
            let share = i32::from(p.size.width) / p.column_span() as i32;
            for col in p.columns() {
                column_widths[col] = column_widths[col].max(share);
            }
            let share = i32::from(p.size.height) / p.row_span() as i32;
            for row in p.rows() {
                row_heights[row] = row_heights[row].max(share);
            }
        }
        fill_empty(&mut column_widths, i32::from(self.config.default_column_width));
        fill_empty(&mut row_heights, i32::from(self.config.default_row_height));

        // 2. Offset
        let column_offsets = prefix_offsets(&column_widths, i32::from(self.config.column_gap));
        let row_offsets = prefix_offsets(&row_heights, i32::from(self.config.row_gap));

        // 3. Place
        let mut positions = HashMap::with_capacity(self.placements.len());
        for p in &self.placements {
            let span_width: i32 = column_widths[p.columns()].iter().sum();
            let span_height: i32 = row_heights[p.rows()].iter().sum();

            let base_x = column_offsets[usize::from(p.column)] + i32::from(p.options.pad_x);
            let base_y = row_offsets[usize::from(p.row)] + i32::from(p.options.pad_y);

            let x = align_axis(
                base_x,
                span_width,
                i32::from(p.size.width),
                p.options.alignment.contains(Alignment::EAST),
                p.options.alignment.contains(Alignment::WEST),
            );
            let y = align_axis(
                base_y,
                span_height,
                i32::from(p.size.height),
                p.options.alignment.contains(Alignment::SOUTH),
                p.options.alignment.contains(Alignment::NORTH),
            );
            positions.insert(p.component, (x, y));
        }

        tracing::debug!(
            placements = self.placements.len(),
            columns = column_count,
            rows = row_count,
            "layout calculated"
        );

        self.geometry = LayoutGeometry {
            column_widths,
            row_heights,
            column_offsets,
            row_offsets,
        };
        self.positions = positions;
    }
}

/// Tracks nothing contributed to get the default size.
fn fill_empty(sizes: &mut [i32], default: i32) {
    for size in sizes.iter_mut().filter(|s| **s == 0) {
        *size = default;
    }
}

/// `offset[0] = 0`, `offset[n + 1] = offset[n] + size[n] + gap`.
fn prefix_offsets(sizes: &[i32], gap: i32) -> Vec<i32> {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut acc = 0;
    offsets.push(acc);
    for size in sizes {
        acc += size + gap;
        offsets.push(acc);
    }
    offsets
}

/// Resolve one axis: trailing edge, leading edge, or centred.
fn align_axis(base: i32, span: i32, size: i32, trailing: bool, leading: bool) -> i32 {
    if trailing {
        base + span - size
    } else if leading {
        base
    } else {
        base + (span - size).div_euclid(2)
    }
}

// =============================================================================
// Tests
// =============================================================================
