// src/color.rs

//! Defines the screen color modes (`ColorMode`) and the named ANSI palette
//! indices (`NamedColor`) used for default cell colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color depth of a screen, as carried in byte 2 of a screen setup payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorMode {
    Monochrome = 0x00,
    Sixteen = 0x01,
    TwoFiftySix = 0x02,
}

impl ColorMode {
    /// Converts a wire byte into a `ColorMode`.
    ///
    /// Returns `None` for anything other than `0x00`, `0x01` or `0x02`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(ColorMode::Monochrome),
            0x01 => Some(ColorMode::Sixteen),
            0x02 => Some(ColorMode::TwoFiftySix),
            _ => None,
        }
    }

    /// The wire byte for this mode.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Number of distinct colors a screen in this mode can show.
    pub fn palette_size(self) -> u16 {
        match self {
            ColorMode::Monochrome => 2,
            ColorMode::Sixteen => 16,
            ColorMode::TwoFiftySix => 256,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Monochrome => "Monochrome",
            ColorMode::Sixteen => "16 Colors",
            ColorMode::TwoFiftySix => "256 Colors",
        };
        f.write_str(name)
    }
}

/// Human-readable name for a raw color mode byte. Unrecognized values map to
/// `"Unknown"`.
pub fn color_mode_name(byte: u8) -> String {
    ColorMode::from_byte(byte)
        .map(|mode| mode.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Standard ANSI named colors (indices 0-15).
/// These are the 8 normal and 8 bright colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,       // Light gray on most terminals
    BrightBlack = 8, // Dark gray
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl NamedColor {
    /// Converts a palette index (0-15) to a `NamedColor`.
    pub fn from_index(idx: u8) -> Option<Self> {
        use NamedColor::*;
        const TABLE: [NamedColor; 16] = [
            Black,
            Red,
            Green,
            Yellow,
            Blue,
            Magenta,
            Cyan,
            White,
            BrightBlack,
            BrightRed,
            BrightGreen,
            BrightYellow,
            BrightBlue,
            BrightMagenta,
            BrightCyan,
            BrightWhite,
        ];
        TABLE.get(idx as usize).copied()
    }

    /// The palette index stored in a cell.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Foreground index written by screen setup (light gray).
pub const DEFAULT_FG: u8 = NamedColor::White.index();

/// Background index used when setup options are omitted (black).
pub const DEFAULT_BG: u8 = NamedColor::Black.index();
