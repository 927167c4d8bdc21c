// src/term/snapshot.rs

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::color::ColorMode;

/// An owned copy of a screen's grid at one moment in time.
///
/// Produced by `Screen::snapshot`. Useful to callers that want to restore
/// cells after a partially applied multi-cell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub width: usize,
    pub height: usize,
    pub color_mode: ColorMode,
    /// Row-major cells, `width * height` of them.
    pub cells: Vec<Cell>,
}

impl ScreenSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// The characters of row `y`, or `None` past the last row or when `cells`
    /// is shorter than the dimensions claim.
    pub fn row_text(&self, y: usize) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        let row = self.cells.get(start..start + self.width)?;
        Some(row.iter().map(|cell| cell.c).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero chunk size.
        self.cells.chunks(self.width.max(1))
    }
}
