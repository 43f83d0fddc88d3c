#![forbid(unsafe_code)]

//! A single grid cell.

use bitflags::bitflags;

bitflags! {
    /// Text attributes carried by a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellAttrs: u8 {
        const BOLD = 0b0000_0001;
        const DIM = 0b0000_0010;
        const REVERSE = 0b0000_0100;
    }
}

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub attrs: CellAttrs,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// An empty cell.
    pub const BLANK: Cell = Cell {
        ch: ' ',
        attrs: CellAttrs::empty(),
    };

    /// Cell holding `ch` with no attributes.
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            attrs: CellAttrs::empty(),
        }
    }

    /// Add attributes to this cell.
    #[inline]
    #[must_use]
    pub fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Whether this cell is indistinguishable from [`Cell::BLANK`].
    #[inline]
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}
