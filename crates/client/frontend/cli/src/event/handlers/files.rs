//! CSV export and background import.

use std::path::PathBuf;

use town_content::ActFile;
use town_core::Act;

use super::super::EventLoop;

/// A finished file read, applied to the act that was current when the
/// import was requested.
#[derive(Debug)]
pub struct ImportOutcome {
    pub act: Act,
    pub path: PathBuf,
    pub result: anyhow::Result<String>,
}

impl EventLoop {
    /// Writes the current act to `<export dir>/town-act<N>-dialogue.csv`.
    pub(in crate::event) async fn export_current(&mut self) {
        let act = self.editor.current_act();
        let Some(csv) = self.editor.export_act(act) else {
            self.messages
                .push_warning(format!("{act} has no townsfolk to export"));
            return;
        };

        match ActFile::write(&self.export_dir, act, &csv).await {
            Ok(path) => {
                self.messages
                    .push_text(format!("Exported {act} to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {:#}", e);
                self.messages.push_error(format!("Export failed: {e}"));
            }
        }
    }

    /// Starts reading the current act's default file. The result arrives
    /// later through the import channel.
    pub(in crate::event) fn request_import(&mut self) {
        let act = self.editor.current_act();
        let path = ActFile::default_path(&self.export_dir, act);
        let tx = self.import_tx.clone();

        self.app_state.pending_imports += 1;
        self.messages
            .push_text(format!("Importing {} into {act}...", path.display()));
        tracing::debug!(path = %path.display(), %act, "import requested");

        tokio::spawn(async move {
            let result = ActFile::read(&path).await;
            if tx.send(ImportOutcome { act, path, result }).await.is_err() {
                tracing::warn!("Import channel closed before the read finished");
            }
        });
    }

    pub(in crate::event) fn apply_import(&mut self, outcome: ImportOutcome) {
        self.app_state.pending_imports = self.app_state.pending_imports.saturating_sub(1);

        let ImportOutcome { act, path, result } = outcome;
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Import failed: {:#}", e);
                self.messages.push_error(format!("Import failed: {e}"));
                return;
            }
        };

        let summary = self.editor.import_act(act, &text);
        for skipped in &summary.skipped {
            tracing::warn!(
                path = %path.display(),
                line = skipped.line,
                reason = %skipped.reason,
                "Dropped CSV row"
            );
        }
        tracing::info!(
            %act,
            imported = summary.imported,
            replaced = summary.replaced,
            skipped = summary.skipped.len(),
            "Imported act"
        );

        self.messages.push_text(format!(
            "Imported {} townsfolk into {act}",
            summary.imported
        ));
        if !summary.skipped.is_empty() {
            self.messages.push_warning(format!(
                "Skipped {} unreadable row(s); see log",
                summary.skipped.len()
            ));
        }
        self.app_state.clamp_roster(self.editor.current().len());
    }
}
