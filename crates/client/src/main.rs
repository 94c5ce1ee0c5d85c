//! Town builder client binary.
//!
//! Composition root: loads `.env`, reads configuration from the environment
//! (and an optional TOML file named by `TOWN_CONFIG`), installs logging and
//! hands control to the selected frontend until the user quits.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! TOWN_EXPORT_DIR=./exports cargo run -p town-client
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use town_content::ConfigLoader;
use town_core::EditorConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliApp, CliConfig, FrontendConfig, logging};
    use client_frontend_core::FrontendApp;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&cli_config.session_id)?;

    tracing::info!("Starting town builder");
    tracing::info!("Export directory: {}", frontend_config.export_dir.display());

    // 3. Editor configuration
    let editor_config = load_editor_config()?;

    // 4. Hand over to the frontend
    CliApp::new(editor_config, frontend_config, cli_config)
        .run()
        .await
}

/// Reads `TOWN_CONFIG` if set, and seeds dialogue shuffling from the clock
/// when the file does not pin a seed.
fn load_editor_config() -> Result<EditorConfig> {
    let mut config = match std::env::var_os("TOWN_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading editor config from {}", path.display());
            ConfigLoader::load(&path)?
        }
        None => EditorConfig::default(),
    };

    if config.rng_seed.is_none() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(EditorConfig::DEFAULT_SEED);
        config.rng_seed = Some(seed);
    }

    Ok(config)
}
