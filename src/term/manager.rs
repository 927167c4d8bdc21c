// src/term/manager.rs

//! Screen creation and lifecycle.
//!
//! The manager owns the one "current" screen reference. Setup builds a new
//! screen and swaps it in; holders of the previous `Arc<Screen>` keep reading
//! the old grid until they fetch `current()` again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::color::{ColorMode, DEFAULT_BG};
use crate::error::{Result, ScreenError};
use crate::term::screen::Screen;
use crate::wire::SCREEN_SETUP_MIN_LEN;

/// Initial contents applied to every cell of a newly set up screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupOptions {
    /// Background palette index for the whole screen.
    pub background: u8,
    /// Character written to every cell.
    pub fill: char,
}

impl Default for SetupOptions {
    fn default() -> Self {
        SetupOptions {
            background: DEFAULT_BG, // Black
            fill: ' ',
        }
    }
}

/// Checks a screen setup payload without allocating anything.
///
/// Payload layout is `[width, height, color_mode, ..]`; bytes past the third
/// are ignored.
pub fn validate_setup(payload: &[u8]) -> Result<(u8, u8, ColorMode)> {
    let [width, height, mode, ..] = *payload else {
        return Err(ScreenError::InsufficientData {
            needed: SCREEN_SETUP_MIN_LEN,
            available: payload.len(),
        });
    };

    if width == 0 || height == 0 {
        return Err(ScreenError::InvalidDimensions { width, height });
    }

    let color_mode = ColorMode::from_byte(mode).ok_or(ScreenError::InvalidColorMode(mode))?;
    Ok((width, height, color_mode))
}

/// Manages screen creation and holds the current screen.
#[derive(Debug, Default)]
pub struct ScreenManager {
    current: Mutex<Option<Arc<Screen>>>,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a screen from a setup payload and makes it current.
    ///
    /// With `options` omitted the screen is filled with spaces on black. On
    /// failure the current screen is left as it was.
    pub fn setup(&self, payload: &[u8], options: Option<&SetupOptions>) -> Result<Arc<Screen>> {
        let (width, height, color_mode) = validate_setup(payload)?;
        let defaults = SetupOptions::default();
        let options = options.unwrap_or(&defaults);

        let screen = Screen::new(width as usize, height as usize, color_mode);
        screen.fill(Cell::filled(options.fill, options.background));
        let screen = Arc::new(screen);

        *self.lock() = Some(Arc::clone(&screen));
        debug!(
            "Screen replaced: {}x{}, mode={}, fill={:?}, bg={}",
            width, height, color_mode, options.fill, options.background
        );
        Ok(screen)
    }

    /// The current screen, or `None` if no setup has succeeded yet.
    pub fn current(&self) -> Option<Arc<Screen>> {
        self.lock().clone()
    }

    // Guards a single Option<Arc>; a panic while holding it leaves either the
    // old or the new pointer, both valid.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<Screen>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
