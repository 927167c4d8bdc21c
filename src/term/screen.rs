// src/term/screen.rs

//! The screen buffer: a fixed-size grid of cells behind a reader/writer lock.
//!
//! Dimensions and color mode are fixed at construction and live outside the
//! lock. Only the cells are guarded. Every coordinate is bounds-checked;
//! out-of-range access is an error, never a clamp.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::trace;

use crate::cell::{Cell, BLANK_CELL};
use crate::color::ColorMode;
use crate::error::{Result, ScreenError};
use crate::term::snapshot::ScreenSnapshot;

/// Represents one screen's cell grid.
///
/// Shared between threads as `Arc<Screen>`. Any number of readers may hold
/// the shared lock together; `set_cell`, `fill` and `clear` take it
/// exclusively for their duration.
#[derive(Debug)]
pub struct Screen {
    width: usize,
    height: usize,
    color_mode: ColorMode,
    /// Row-major: the cell at `(x, y)` lives at `y * width + x`.
    cells: RwLock<Vec<Cell>>,
}

impl Screen {
    /// Allocates a blank screen. Callers outside the crate obtain screens
    /// through `ScreenManager::setup`, which validates the dimensions first.
    pub(crate) fn new(width: usize, height: usize, color_mode: ColorMode) -> Self {
        trace!("Screen::new: {}x{}, mode={}", width, height, color_mode);
        Screen {
            width,
            height,
            color_mode,
            cells: RwLock::new(vec![BLANK_CELL; width * height]),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Reads the cell at `(x, y)` under the shared lock.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<Cell> {
        let idx = self.index(x, y)?;
        Ok(self.read()[idx])
    }

    /// Writes the cell at `(x, y)` under the exclusive lock.
    pub fn set_cell(&self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let idx = self.index(x, y)?;
        self.write()[idx] = cell;
        trace!("set_cell: ({}, {}) = {:?}", x, y, cell);
        Ok(())
    }

    /// Resets every cell to the blank cell.
    pub fn clear(&self) {
        self.fill(BLANK_CELL);
    }

    /// Writes `cell` to every position in a single exclusive section.
    pub fn fill(&self, cell: Cell) {
        self.write().fill(cell);
    }

    /// Copies the whole grid under one shared lock acquisition, so the copy
    /// never mixes cells from before and after a concurrent write.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let cells = self.read().clone();
        ScreenSnapshot {
            width: self.width,
            height: self.height,
            color_mode: self.color_mode,
            cells,
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(ScreenError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    // A writer that panicked mid-write cannot leave a torn cell: each write
    // is a single Copy assignment. The data behind a poisoned lock is sound.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Cell>> {
        self.cells.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Cell>> {
        self.cells.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
