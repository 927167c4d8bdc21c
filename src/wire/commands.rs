// src/wire/commands.rs

//! Defines the `Opcode` byte values and the typed `Command` enum parsed from
//! a decoded frame.

use std::fmt;

use super::decoder::Frame;
use crate::error::{PayloadSize, Result, ScreenError};

/// Minimum ScreenSetup payload: width, height, color mode.
pub const SCREEN_SETUP_MIN_LEN: usize = 3;
/// DrawCharacter payload: x, y, color, character.
pub const DRAW_CHARACTER_LEN: usize = 4;
/// DrawLine payload: x1, y1, x2, y2, color, character.
pub const DRAW_LINE_LEN: usize = 6;
/// Minimum RenderText payload: x, y, color (text may be empty).
pub const RENDER_TEXT_MIN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    ScreenSetup = 0x01,
    DrawCharacter = 0x02,
    DrawLine = 0x03,
    RenderText = 0x04,
    MoveCursor = 0x05,
    DrawAtCursor = 0x06,
    ClearScreen = 0x07,
    EndOfStream = 0xFF,
}

impl Opcode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Opcode::ScreenSetup),
            0x02 => Some(Opcode::DrawCharacter),
            0x03 => Some(Opcode::DrawLine),
            0x04 => Some(Opcode::RenderText),
            0x05 => Some(Opcode::MoveCursor),
            0x06 => Some(Opcode::DrawAtCursor),
            0x07 => Some(Opcode::ClearScreen),
            0xFF => Some(Opcode::EndOfStream),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Screen setup parameters, unvalidated. Validation belongs to the screen
/// manager, which sees the same three bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupRequest {
    pub width: u8,
    pub height: u8,
    pub color_mode: u8,
}

impl SetupRequest {
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        match payload {
            [width, height, color_mode, ..] => Ok(SetupRequest {
                width: *width,
                height: *height,
                color_mode: *color_mode,
            }),
            _ => Err(ScreenError::InsufficientData {
                needed: SCREEN_SETUP_MIN_LEN,
                available: payload.len(),
            }),
        }
    }

    /// The request in wire payload order.
    pub fn to_payload(self) -> [u8; SCREEN_SETUP_MIN_LEN] {
        [self.width, self.height, self.color_mode]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCharacter {
    pub x: u8,
    pub y: u8,
    pub color: u8,
    pub c: char,
}

impl DrawCharacter {
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        match *payload {
            [x, y, color, c] => Ok(DrawCharacter {
                x,
                y,
                color,
                c: char::from(c),
            }),
            _ => Err(ScreenError::InvalidPayloadLength {
                opcode: Opcode::DrawCharacter,
                expected: PayloadSize::Exactly(DRAW_CHARACTER_LEN),
                actual: payload.len(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawLine {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
    pub color: u8,
    pub c: char,
}

impl DrawLine {
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        match *payload {
            [x1, y1, x2, y2, color, c] => Ok(DrawLine {
                x1,
                y1,
                x2,
                y2,
                color,
                c: char::from(c),
            }),
            _ => Err(ScreenError::InvalidPayloadLength {
                opcode: Opcode::DrawLine,
                expected: PayloadSize::Exactly(DRAW_LINE_LEN),
                actual: payload.len(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderText {
    pub x: u8,
    pub y: u8,
    pub color: u8,
    pub text: Vec<char>,
}

impl RenderText {
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        match payload {
            [x, y, color, text @ ..] => Ok(RenderText {
                x: *x,
                y: *y,
                color: *color,
                text: text.iter().copied().map(char::from).collect(),
            }),
            _ => Err(ScreenError::InvalidPayloadLength {
                opcode: Opcode::RenderText,
                expected: PayloadSize::AtLeast(RENDER_TEXT_MIN_LEN),
                actual: payload.len(),
            }),
        }
    }
}

/// A command with its payload parsed into the shape its opcode requires.
///
/// The last four variants are recognized opcodes that have no handler; they
/// keep their payload untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScreenSetup(SetupRequest),
    DrawCharacter(DrawCharacter),
    DrawLine(DrawLine),
    RenderText(RenderText),
    MoveCursor(Vec<u8>),
    DrawAtCursor(Vec<u8>),
    ClearScreen(Vec<u8>),
    EndOfStream(Vec<u8>),
}

impl Command {
    /// Parses a decoded frame.
    ///
    /// Fails `UnsupportedCommand` for opcode bytes outside the known set, and
    /// with the per-opcode payload error when the payload has the wrong shape.
    pub fn from_frame(frame: &Frame) -> Result<Self> {
        let opcode =
            Opcode::from_byte(frame.opcode).ok_or(ScreenError::UnsupportedCommand(frame.opcode))?;
        let payload = frame.payload.as_slice();
        let command = match opcode {
            Opcode::ScreenSetup => Command::ScreenSetup(SetupRequest::from_payload(payload)?),
            Opcode::DrawCharacter => Command::DrawCharacter(DrawCharacter::from_payload(payload)?),
            Opcode::DrawLine => Command::DrawLine(DrawLine::from_payload(payload)?),
            Opcode::RenderText => Command::RenderText(RenderText::from_payload(payload)?),
            Opcode::MoveCursor => Command::MoveCursor(payload.to_vec()),
            Opcode::DrawAtCursor => Command::DrawAtCursor(payload.to_vec()),
            Opcode::ClearScreen => Command::ClearScreen(payload.to_vec()),
            Opcode::EndOfStream => Command::EndOfStream(payload.to_vec()),
        };
        Ok(command)
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Command::ScreenSetup(_) => Opcode::ScreenSetup,
            Command::DrawCharacter(_) => Opcode::DrawCharacter,
            Command::DrawLine(_) => Opcode::DrawLine,
            Command::RenderText(_) => Opcode::RenderText,
            Command::MoveCursor(_) => Opcode::MoveCursor,
            Command::DrawAtCursor(_) => Opcode::DrawAtCursor,
            Command::ClearScreen(_) => Opcode::ClearScreen,
            Command::EndOfStream(_) => Opcode::EndOfStream,
        }
    }
}
