// src/draw.rs

//! Drawing engine: turns parsed draw commands into cell writes.
//!
//! None of these operations is atomic as a whole. Each cell write takes the
//! screen's exclusive lock on its own, so concurrent readers can observe a
//! partially drawn line or text run, and a write that fails bounds-checking
//! leaves the cells written before it in place.

use std::mem::swap;

use log::trace;

use crate::cell::Cell;
use crate::error::Result;
use crate::term::Screen;
use crate::wire::{DrawCharacter, DrawLine, RenderText};

/// Writes a single cell.
///
/// The cell is overwritten, not merged: background and highlight take their
/// zero values regardless of what the previous cell held.
pub fn draw_character(screen: &Screen, cmd: &DrawCharacter) -> Result<()> {
    trace!("draw_character: ({}, {}) {:?} fg={}", cmd.x, cmd.y, cmd.c, cmd.color);
    screen.set_cell(cmd.x as usize, cmd.y as usize, Cell::new(cmd.c, cmd.color))
}

/// Rasterizes a line between two inclusive endpoints.
///
/// Stops at the first out-of-bounds point and returns its error; the cells
/// already written along the line stay written.
pub fn draw_line(screen: &Screen, cmd: &DrawLine) -> Result<()> {
    trace!(
        "draw_line: ({}, {}) -> ({}, {}) {:?} fg={}",
        cmd.x1,
        cmd.y1,
        cmd.x2,
        cmd.y2,
        cmd.c,
        cmd.color
    );
    let cell = Cell::new(cmd.c, cmd.color);
    for (x, y) in line_points(cmd.x1, cmd.y1, cmd.x2, cmd.y2) {
        screen.set_cell(x, y, cell)?;
    }
    Ok(())
}

/// Computes the cells of a line with integer Bresenham stepping.
///
/// Steep lines (|dy| > |dx|) are walked along y by swapping the axes for the
/// duration of the algorithm. Endpoints are ordered so the major axis always
/// steps forward. One point per major-axis step, both endpoints included.
/// The minor axis advances only when the accumulated error strictly exceeds
/// `dx`, so exact half-way ties stay on the current row.
pub fn line_points(x1: u8, y1: u8, x2: u8, y2: u8) -> Vec<(usize, usize)> {
    let (mut ax, mut ay) = (i32::from(x1), i32::from(y1));
    let (mut bx, mut by) = (i32::from(x2), i32::from(y2));

    let steep = (by - ay).abs() > (bx - ax).abs();
    if steep {
        swap(&mut ax, &mut ay);
        swap(&mut bx, &mut by);
    }
    if ax > bx {
        swap(&mut ax, &mut bx);
        swap(&mut ay, &mut by);
    }

    let dx = bx - ax;
    let dy = (by - ay).abs();
    let y_step = if ay < by { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx as usize + 1);
    let mut error = 0;
    let mut y = ay;
    for x in ax..=bx {
        // Both coordinates stay within 0..=255: x walks between the
        // endpoints and y never passes `by`.
        let (px, py) = if steep { (y, x) } else { (x, y) };
        points.push((px as usize, py as usize));

        error += 2 * dy;
        if error > dx {
            y += y_step;
            error -= 2 * dx;
        }
    }
    points
}

/// Writes a run of characters left to right starting at `(x, y)`.
///
/// Columns are computed without wrapping: a character that would land at or
/// past the right edge fails `OutOfBounds`, and the characters before it stay
/// written.
pub fn render_text(screen: &Screen, cmd: &RenderText) -> Result<()> {
    trace!(
        "render_text: ({}, {}) {} chars fg={}",
        cmd.x,
        cmd.y,
        cmd.text.len(),
        cmd.color
    );
    let y = cmd.y as usize;
    for (i, &c) in cmd.text.iter().enumerate() {
        screen.set_cell(cmd.x as usize + i, y, Cell::new(c, cmd.color))?;
    }
    Ok(())
}
