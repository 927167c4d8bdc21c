// src/wire/mod.rs

//! Handles the binary command wire format.
//!
//! Every command on the wire is `[opcode, length, payload[length]]`. The
//! decoder turns bytes into a [`Frame`] without interpreting the opcode; the
//! typed [`Command`] is then parsed from a frame once, checking the payload
//! shape the opcode requires.

mod commands;
mod decoder;

pub use commands::{
    Command, DrawCharacter, DrawLine, Opcode, RenderText, SetupRequest, DRAW_CHARACTER_LEN,
    DRAW_LINE_LEN, RENDER_TEXT_MIN_LEN, SCREEN_SETUP_MIN_LEN,
};
pub use decoder::{decode, frames, Frame, Frames, HEADER_LEN};
