#![forbid(unsafe_code)]

//! Row-major cell grid with clipped writes.

use crate::cell::{Cell, CellAttrs};
use hdui_core::geometry::Rect;

/// A 2D grid of [`Cell`]s.
///
/// All writes are clipped to the buffer bounds; out-of-range coordinates are
/// ignored rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell. Ignored when out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Fill a rectangle (clipped) with one cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Write `text` starting at (x, y), one char per cell, stopping at
    /// `max_x` (exclusive) or the buffer edge. Returns the column after the
    /// last written char.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, max_x: u16, attrs: CellAttrs) -> u16 {
        let max_x = max_x.min(self.width);
        let mut col = x;
        for ch in text.chars() {
            if col >= max_x {
                break;
            }
            self.set(col, y, Cell::from_char(ch).with_attrs(attrs));
            col += 1;
        }
        col
    }

    /// Copy `src_rect` of `src` into this buffer with its top-left at
    /// (`dst_x`, `dst_y`). Both sides are clipped.
    pub fn copy_from(&mut self, src: &Buffer, src_rect: Rect, dst_x: u16, dst_y: u16) {
        let src_rect = src_rect.intersection(&src.area());
        for dy in 0..src_rect.height {
            for dx in 0..src_rect.width {
                if let Some(cell) = src.get(src_rect.x + dx, src_rect.y + dy) {
                    self.set(dst_x.saturating_add(dx), dst_y.saturating_add(dy), *cell);
                }
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Characters of row `y`, trailing blanks included. Empty when out of range.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .map(|x| self.get(x, y).map_or(' ', |c| c.ch))
            .collect()
    }
}
