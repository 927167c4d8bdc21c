//! Test harness for feeding wire bytes to a dispatcher and inspecting the
//! resulting grid.

#![allow(dead_code)]

use std::sync::Arc;

use term_screen::{decode, Dispatcher, Result, ScreenManager, ScreenSnapshot, SetupOptions};

/// Owns a dispatcher over a fresh screen manager.
pub struct StreamHarness {
    pub dispatcher: Dispatcher,
}

impl StreamHarness {
    pub fn new() -> Self {
        Self::with_options(SetupOptions::default())
    }

    pub fn with_options(options: SetupOptions) -> Self {
        let dispatcher = Dispatcher::with_options(Arc::new(ScreenManager::new()), options);
        Self { dispatcher }
    }

    /// Decodes a single frame from `bytes` and dispatches it.
    pub fn send(&self, bytes: &[u8]) -> Result<()> {
        let frame = decode(bytes)?;
        self.dispatcher.handle(&frame)
    }

    /// Sets up a `width` x `height` screen with the given color mode byte.
    pub fn setup(&self, width: u8, height: u8, mode: u8) -> Result<()> {
        self.send(&[0x01, 0x03, width, height, mode])
    }

    /// Snapshot of the current screen, if any.
    pub fn snapshot(&self) -> Option<ScreenSnapshot> {
        self.dispatcher.manager().current().map(|screen| screen.snapshot())
    }

    /// Row `y` of the current screen as a string.
    pub fn row(&self, y: usize) -> String {
        self.snapshot()
            .and_then(|snap| snap.row_text(y))
            .unwrap_or_default()
    }
}
