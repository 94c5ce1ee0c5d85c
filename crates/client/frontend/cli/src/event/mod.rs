//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator that coordinates user
//! input, completed file reads and UI updates.

mod handlers;
mod r#loop;

pub use handlers::ImportOutcome;
pub use r#loop::EventLoop;
