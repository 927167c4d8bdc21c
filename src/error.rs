// src/error.rs

//! Typed failures surfaced by decoding, screen setup, drawing and dispatch.

use std::fmt;

use crate::wire::Opcode;

pub type Result<T> = std::result::Result<T, ScreenError>;

/// Payload size an opcode requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSize {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for PayloadSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSize::Exactly(n) => write!(f, "exactly {n}"),
            PayloadSize::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Renders an opcode byte by name when it is a known opcode.
fn opcode_name(byte: &u8) -> String {
    match Opcode::from_byte(*byte) {
        Some(op) => format!("{op} (0x{byte:02X})"),
        None => format!("0x{byte:02X}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    #[error("insufficient data: need {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("invalid screen dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("invalid color mode: {0} (must be 0x00, 0x01, or 0x02)")]
    InvalidColorMode(u8),

    #[error("invalid {opcode} payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength {
        opcode: Opcode,
        expected: PayloadSize,
        actual: usize,
    },

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} screen")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unsupported command: {}", opcode_name(.0))]
    UnsupportedCommand(u8),

    #[error("no screen initialized")]
    NoScreenInitialized,

    #[error("screen setup failed: {0}")]
    Setup(Box<ScreenError>),
}

impl ScreenError {
    /// Strips dispatcher context, returning the error that was originally
    /// raised.
    pub fn root_cause(&self) -> &ScreenError {
        match self {
            ScreenError::Setup(inner) => inner.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_command_names_known_opcodes() {
        let err = ScreenError::UnsupportedCommand(0x07);
        assert_eq!(err.to_string(), "unsupported command: ClearScreen (0x07)");
        let err = ScreenError::UnsupportedCommand(0x42);
        assert_eq!(err.to_string(), "unsupported command: 0x42");
    }

    #[test]
    fn payload_length_message() {
        let err = ScreenError::InvalidPayloadLength {
            opcode: Opcode::RenderText,
            expected: PayloadSize::AtLeast(3),
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid RenderText payload length: expected at least 3 bytes, got 2"
        );
    }

    #[test]
    fn root_cause_unwraps_setup_context() {
        let inner = ScreenError::InvalidDimensions { width: 0, height: 24 };
        let err = ScreenError::Setup(Box::new(inner.clone()));
        assert_eq!(err.root_cause(), &inner);
        assert!(err.to_string().starts_with("screen setup failed: "));
        assert_eq!(inner.root_cause(), &inner);
    }
}
