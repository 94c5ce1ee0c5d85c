//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard and mouse input, dispatched to the editor
//! - `files`: CSV export and background import
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod files;
mod input;
mod rendering;

pub use files::ImportOutcome;
