//! Glue code tying the editor session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::config::CliConfig;
use crate::event::{EventLoop, ImportOutcome};
use crate::presentation::terminal;
use client_frontend_core::{FrontendConfig, frontend::FrontendApp, message::MessageLog};
use town_core::{Editor, EditorConfig};

/// Completed reads waiting to be applied. Imports are user-triggered, so a
/// handful is plenty.
const IMPORT_CHANNEL_CAPACITY: usize = 8;

pub struct CliApp {
    editor_config: EditorConfig,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliApp {
    pub fn new(
        editor_config: EditorConfig,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            editor_config,
            frontend_config,
            cli_config,
        }
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let CliApp {
            editor_config,
            frontend_config,
            cli_config,
        } = self;

        let editor = Editor::new(&editor_config);
        tracing::info!(
            act = %editor.current_act(),
            selected = %editor.selected_type(),
            seed = editor_config.seed(),
            "Editor session created"
        );

        let mut messages = MessageLog::new(frontend_config.messages.capacity);
        messages.push_text("Welcome to the town builder. Press m to try your town.");

        let (import_tx, import_rx) = mpsc::channel::<ImportOutcome>(IMPORT_CHANNEL_CAPACITY);
        let event_loop = EventLoop::new(
            editor,
            messages,
            cli_config,
            frontend_config.export_dir.clone(),
            import_tx,
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let editor = event_loop.run(&mut terminal, import_rx).await?;

        tracing::info!(population = editor.population(), "CLI client exiting");

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliApp {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
