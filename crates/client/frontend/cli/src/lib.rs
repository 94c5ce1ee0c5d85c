//! Terminal UI frontend for the town builder.
//!
//! This crate provides a terminal-based user interface over a
//! `town_core::Editor` session and implements
//! [`client_frontend_core::FrontendApp`].
//!
//! # Architecture
//!
//! `CliApp` owns one editor session for its lifetime:
//! - Key and mouse events map onto editor operations
//! - Each frame is drawn from a fresh `ViewModel` snapshot
//! - CSV imports are read off-loop and applied when they arrive

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
