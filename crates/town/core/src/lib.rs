//! Editing rules for the town builder, independent of any frontend.
//!
//! `town-core` owns the grid model, the townsfolk catalog, the per-act data,
//! the CSV codec and the play-mode movement rules. All mutation flows through
//! [`editor::Editor`]; frontends translate their input events into calls on
//! it and render from its read accessors. Nothing here performs I/O.
pub mod catalog;
pub mod codec;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod play;
pub mod rng;
pub mod state;

pub use catalog::{CATALOG, EntityType, TypeId};
pub use codec::{CSV_HEADER, DecodeReport, DecodedRow, RowError, SkippedRow, export_file_name};
pub use config::EditorConfig;
pub use editor::{CellOutcome, Editor, ImportSummary, Mode};
pub use error::EditorError;
pub use grid::{CellRect, GRID_HEIGHT, GRID_WIDTH, GridDimensions, GridError, Position};
pub use play::{Dialogue, Direction, PlayerState, StepOutcome};
pub use rng::{PcgRng, RngOracle};
pub use state::{Act, ActData, Acts, EntityId, IdAllocator, PlacedEntity};
