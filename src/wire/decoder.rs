// src/wire/decoder.rs

//! Splits raw bytes into length-validated frames.

use log::trace;

use crate::error::{Result, ScreenError};

/// Opcode byte plus length byte.
pub const HEADER_LEN: usize = 2;

/// One command as found on the wire. The opcode is kept as a raw byte: an
/// unrecognized opcode is the dispatcher's concern, not the decoder's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub opcode: u8,
    /// Declared payload length; always equal to `payload.len()`.
    pub length: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Number of input bytes this frame occupied. The next concatenated frame
    /// starts at this offset.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.length as usize
    }
}

/// Decodes the frame at the start of `bytes`.
///
/// Bytes past the end of the frame are left alone; see [`Frame::encoded_len`]
/// and [`frames`] for walking a stream of concatenated commands.
pub fn decode(bytes: &[u8]) -> Result<Frame> {
    if bytes.len() < HEADER_LEN {
        return Err(ScreenError::InsufficientData {
            needed: HEADER_LEN,
            available: bytes.len(),
        });
    }

    let opcode = bytes[0];
    let length = bytes[1];
    // usize arithmetic: a length of 255 must not wrap the bound.
    let end = HEADER_LEN + length as usize;
    if bytes.len() < end {
        return Err(ScreenError::InsufficientData {
            needed: end,
            available: bytes.len(),
        });
    }

    trace!("decoded frame: opcode=0x{:02X}, length={}", opcode, length);
    Ok(Frame {
        opcode,
        length,
        payload: bytes[HEADER_LEN..end].to_vec(),
    })
}

/// Iterator over concatenated frames in a byte slice.
///
/// Yields each decoded frame in order. A truncated tail produces a single
/// `Err(InsufficientData)`, after which iteration ends.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

/// Iterates over every frame in `bytes`.
pub fn frames(bytes: &[u8]) -> Frames<'_> {
    Frames {
        bytes,
        offset: 0,
        failed: false,
    }
}

impl Frames<'_> {
    /// Offset of the first byte not yet consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Frames<'_> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match decode(&self.bytes[self.offset..]) {
            Ok(frame) => {
                self.offset += frame.encoded_len();
                Some(Ok(frame))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
