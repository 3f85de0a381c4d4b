//! Core view-state newtypes

/// Viewport size in layout units.
///
/// Changes only through resize notifications from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in layout units.
    pub width: i32,
    /// Height in layout units.
    pub height: i32,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Size of one terminal cell in layout units.
///
/// The terminal is treated as a grid of virtual pixels: one cell is half the
/// base font size wide and one base font size tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    /// Cell width in layout units.
    pub cell_width: i32,
    /// Cell height in layout units.
    pub cell_height: i32,
}

impl CellGrid {
    /// Grid for text drawn at `base_size`.
    pub fn for_font_size(base_size: i32) -> Self {
        Self {
            cell_width: (base_size / 2).max(1),
            cell_height: base_size.max(1),
        }
    }

    /// Viewport covering `columns` x `rows` cells.
    pub fn viewport(&self, columns: u16, rows: u16) -> ViewportDimensions {
        ViewportDimensions::new(
            i32::from(columns) * self.cell_width,
            i32::from(rows) * self.cell_height,
        )
    }

    /// Row containing `y`, rounding to the nearest cell boundary.
    pub fn row_of(&self, y: i32) -> i32 {
        (y + self.cell_height / 2).div_euclid(self.cell_height)
    }

    /// Column containing `x`.
    pub fn column_of(&self, x: i32) -> i32 {
        x.div_euclid(self.cell_width)
    }
}
