//! term-screen library crate.
//!
//! Decodes a compact binary command stream and applies it to an in-memory
//! terminal screen buffer that many threads may read and write at once.
//!
//! Data flows one way: bytes are decoded into a [`wire::Frame`], parsed into
//! a typed [`wire::Command`], and handed to a [`dispatch::Dispatcher`], which
//! either replaces the current screen through the [`term::ScreenManager`] or
//! draws into it through the [`draw`] engine.
//!
//! ```
//! use std::sync::Arc;
//! use term_screen::{Dispatcher, ScreenManager};
//!
//! let dispatcher = Dispatcher::new(Arc::new(ScreenManager::new()));
//! // 10x2 screen, 16 colors; then "hi" at (0, 1) in red.
//! let bytes = [0x01, 0x03, 10, 2, 0x01, 0x04, 0x05, 0, 1, 1, b'h', b'i'];
//! assert_eq!(dispatcher.run(&bytes).unwrap(), 2);
//!
//! let screen = dispatcher.manager().current().unwrap();
//! assert_eq!(screen.get_cell(1, 1).unwrap().c, 'i');
//! ```

pub mod cell;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod draw;
pub mod error;
pub mod term;
pub mod wire;

pub use cell::{Cell, CellFlags};
pub use color::ColorMode;
pub use config::Config;
pub use dispatch::Dispatcher;
pub use error::{Result, ScreenError};
pub use term::{Screen, ScreenManager, ScreenSnapshot, SetupOptions};
pub use wire::{decode, Command, Frame, Opcode};
