// src/term/mod.rs

//! Screen state: the lock-guarded cell grid (`Screen`), the owner of the
//! current screen (`ScreenManager`), and owned copies of a grid
//! (`ScreenSnapshot`).
//!
//! Two independent locks are involved. Each `Screen` guards its own cells
//! with a reader/writer lock; the `ScreenManager` guards only *which* screen
//! is current. Replacing the current screen never touches the cells of the
//! screen it supersedes.

pub mod manager;
pub mod screen;
pub mod snapshot;

pub use manager::{validate_setup, ScreenManager, SetupOptions};
pub use screen::Screen;
pub use snapshot::ScreenSnapshot;
