//! Cross-frontend primitives for presenting the town editor.
//!
//! Houses the message log, environment config and the render model that both
//! the terminal client and any future graphical client can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::FrontendApp;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::ViewModel;
