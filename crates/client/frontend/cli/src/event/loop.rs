//! Event loop orchestrating user input, file reads and rendering.
//!
//! Everything runs on one task: terminal input is polled once per frame and
//! finished imports arrive over an `mpsc` channel, so editor mutations never
//! interleave.

use std::path::PathBuf;

use anyhow::Result;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};
use town_core::Editor;

use super::ImportOutcome;
use crate::{input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::MessageLog;

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the editor session and all UI state.
pub struct EventLoop {
    pub(crate) editor: Editor,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) messages: MessageLog,
    /// CLI UI configuration
    pub(crate) cli_config: crate::config::CliConfig,
    /// Directory exports are written to and default imports are read from.
    pub(crate) export_dir: PathBuf,
    pub(crate) import_tx: mpsc::Sender<ImportOutcome>,
}

impl EventLoop {
    pub fn new(
        editor: Editor,
        messages: MessageLog,
        cli_config: crate::config::CliConfig,
        export_dir: PathBuf,
        import_tx: mpsc::Sender<ImportOutcome>,
    ) -> Self {
        Self {
            editor,
            input: InputHandler::new(),
            app_state: AppState::new(),
            messages,
            cli_config,
            export_dir,
            import_tx,
        }
    }

    /// Run until the user quits. Returns the final editor session.
    pub async fn run(
        mut self,
        terminal: &mut Tui,
        mut imports: mpsc::Receiver<ImportOutcome>,
    ) -> Result<Editor> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                Some(outcome) = imports.recv() => {
                    self.apply_import(outcome);
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        if self.app_state.pending_imports > 0 {
            tracing::warn!(
                pending = self.app_state.pending_imports,
                "Quitting with imports still in flight"
            );
        }

        Ok(self.editor)
    }
}
