// src/dispatch.rs

//! Routes decoded commands to the screen manager or the drawing engine.
//!
//! The `Dispatcher` is the entry point external callers use to apply
//! commands. It has no state of its own beyond a shared `ScreenManager` and
//! the options applied to every screen setup, and takes `&self` everywhere,
//! so it can be shared between threads behind an `Arc`.

use std::sync::Arc;

use log::{debug, warn};

use crate::draw;
use crate::error::{Result, ScreenError};
use crate::term::{validate_setup, Screen, ScreenManager, SetupOptions};
use crate::wire::{frames, Command, Frame, Opcode, SetupRequest};

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    manager: Arc<ScreenManager>,
    options: SetupOptions,
}

impl Dispatcher {
    /// Creates a dispatcher over `manager` that sets screens up with the
    /// default options (spaces on black).
    pub fn new(manager: Arc<ScreenManager>) -> Self {
        Self::with_options(manager, SetupOptions::default())
    }

    pub fn with_options(manager: Arc<ScreenManager>, options: SetupOptions) -> Self {
        Dispatcher { manager, options }
    }

    pub fn manager(&self) -> &Arc<ScreenManager> {
        &self.manager
    }

    pub fn options(&self) -> &SetupOptions {
        &self.options
    }

    /// Parses and applies one decoded frame.
    ///
    /// A ScreenSetup frame too short to parse fails as `Setup`, like every
    /// other setup failure.
    pub fn handle(&self, frame: &Frame) -> Result<()> {
        let command = Command::from_frame(frame).map_err(|err| {
            warn!("Rejected frame with opcode 0x{:02X}: {}", frame.opcode, err);
            if frame.opcode == Opcode::ScreenSetup.as_byte() {
                ScreenError::Setup(Box::new(err))
            } else {
                err
            }
        })?;
        self.handle_command(command)
    }

    /// Applies one parsed command.
    pub fn handle_command(&self, command: Command) -> Result<()> {
        let opcode = command.opcode();
        debug!("Dispatching {}", opcode);
        let result = match command {
            Command::ScreenSetup(request) => self.setup(request),
            Command::DrawCharacter(cmd) => {
                self.screen().and_then(|s| draw::draw_character(&s, &cmd))
            }
            Command::DrawLine(cmd) => self.screen().and_then(|s| draw::draw_line(&s, &cmd)),
            Command::RenderText(cmd) => self.screen().and_then(|s| draw::render_text(&s, &cmd)),
            Command::MoveCursor(_)
            | Command::DrawAtCursor(_)
            | Command::ClearScreen(_)
            | Command::EndOfStream(_) => Err(ScreenError::UnsupportedCommand(opcode.as_byte())),
        };
        if let Err(err) = &result {
            warn!("{} failed: {}", opcode, err);
        }
        result
    }

    /// Decodes and applies every command in a stream of concatenated frames.
    ///
    /// An EndOfStream frame ends the run without being dispatched. Returns
    /// the number of commands applied. The first failure aborts the run;
    /// commands applied before it stay applied.
    pub fn run(&self, bytes: &[u8]) -> Result<usize> {
        let mut handled = 0;
        for frame in frames(bytes) {
            let frame = frame?;
            if frame.opcode == Opcode::EndOfStream.as_byte() {
                debug!("End of stream after {} commands", handled);
                break;
            }
            self.handle(&frame)?;
            handled += 1;
        }
        Ok(handled)
    }

    // The manager validates again; this check runs first so a bad request is
    // rejected before any allocation.
    fn setup(&self, request: SetupRequest) -> Result<()> {
        let payload = request.to_payload();
        validate_setup(&payload)
            .and_then(|_| self.manager.setup(&payload, Some(&self.options)))
            .map(|_| ())
            .map_err(|err| ScreenError::Setup(Box::new(err)))
    }

    fn screen(&self) -> Result<Arc<Screen>> {
        self.manager.current().ok_or(ScreenError::NoScreenInitialized)
    }
}
