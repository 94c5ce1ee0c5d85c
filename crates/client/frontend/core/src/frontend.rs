//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// Frontend abstraction for UI layers.
///
/// A frontend owns its `Editor` session for its whole lifetime and returns
/// once the user quits.
///
/// # Implementations
///
/// - `CliApp`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait FrontendApp: Send {
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
