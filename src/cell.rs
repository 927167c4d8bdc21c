// src/cell.rs

//! Defines the `Cell` type stored at every screen position, and its
//! attribute flags (`CellFlags`).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::DEFAULT_FG;

bitflags! {
    /// Per-cell attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CellFlags: u8 {
        const HIGHLIGHT = 1 << 0;
    }
}

/// A single character cell on the screen.
///
/// Cells are plain values: a screen owns `width * height` independent copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// The character displayed in the cell.
    pub c: char,
    /// Foreground palette index.
    pub fg: u8,
    /// Background palette index.
    pub bg: u8,
    pub flags: CellFlags,
}

/// The zero cell: a blank with palette index 0 for both colors and no flags.
/// `Screen::clear` resets every position to this value.
pub const BLANK_CELL: Cell = Cell {
    c: ' ',
    fg: 0,
    bg: 0,
    flags: CellFlags::empty(),
};

impl Default for Cell {
    fn default() -> Self {
        BLANK_CELL
    }
}

impl Cell {
    /// A cell with the given character and foreground; background and flags
    /// take their zero values.
    pub fn new(c: char, fg: u8) -> Self {
        Cell {
            c,
            fg,
            ..BLANK_CELL
        }
    }

    /// The cell screen setup writes everywhere: `fill` on `bg`, light gray
    /// foreground, no highlight.
    pub fn filled(fill: char, bg: u8) -> Self {
        Cell {
            c: fill,
            fg: DEFAULT_FG,
            bg,
            flags: CellFlags::empty(),
        }
    }

    pub fn with_bg(mut self, bg: u8) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.flags.set(CellFlags::HIGHLIGHT, highlight);
        self
    }

    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(CellFlags::HIGHLIGHT)
    }
}

// Prints only the character, not its attributes.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.c)
    }
}
