//! File-backed content for the town builder.
//!
//! The core crate only ever sees strings and parsed configs; this crate owns
//! the trip to and from disk:
//! - Editor configuration (TOML)
//! - Per-act CSV files (read and written asynchronously)

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ActFile, ConfigLoader, LoadResult};
