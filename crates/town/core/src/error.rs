//! Editor operation errors.
//!
//! Every failure here is recoverable: frontends treat an `Err` as "nothing
//! happened" and carry on. The variants let callers log what was ignored.
use crate::grid::GridError;
use crate::state::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("only available in build mode")]
    NotInBuildMode,

    #[error("only available in play mode")]
    NotInPlayMode,

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("entity {0} not found in the current act")]
    EntityNotFound(EntityId),

    #[error("no townsfolk type with index {0}")]
    UnknownType(u8),
}

impl EditorError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotInBuildMode => "NOT_IN_BUILD_MODE",
            Self::NotInPlayMode => "NOT_IN_PLAY_MODE",
            Self::Grid(GridError::NotFinite { .. }) => "POINTER_NOT_FINITE",
            Self::Grid(GridError::OutOfBounds { .. }) => "OUT_OF_BOUNDS",
            Self::EntityNotFound(_) => "ENTITY_NOT_FOUND",
            Self::UnknownType(_) => "UNKNOWN_TYPE",
        }
    }
}
