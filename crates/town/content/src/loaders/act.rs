//! Per-act CSV files on disk.
//!
//! Parsing lives in `town_core::codec`; this loader only moves text between
//! the editor and the filesystem. Both directions are async so a frontend
//! can run them off its input loop.

use std::path::{Path, PathBuf};

use town_core::{Act, export_file_name};

use crate::loaders::LoadResult;

/// Reads and writes act CSV files.
pub struct ActFile;

impl ActFile {
    /// Where `act` is exported to inside `dir`.
    pub fn default_path(dir: &Path, act: Act) -> PathBuf {
        dir.join(export_file_name(act))
    }

    /// Read a CSV file as text, ready for `Editor::import_act`.
    pub async fn read(path: &Path) -> LoadResult<String> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read act csv");
        Ok(text)
    }

    /// Write `csv` under the export name of `act`, creating `dir` if needed.
    ///
    /// Returns the path written. An existing file is overwritten.
    pub async fn write(dir: &Path, act: Act, csv: &str) -> LoadResult<PathBuf> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", dir.display(), e))?;

        let path = Self::default_path(dir, act);
        tokio::fs::write(&path, csv)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), %act, "exported act");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use town_core::{Editor, EditorConfig, Position, TypeId};

    #[test]
    fn test_default_path_uses_export_name() {
        let path = ActFile::default_path(Path::new("/tmp/town"), Act::Three);
        assert_eq!(path, Path::new("/tmp/town/town-act3-dialogue.csv"));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("exports");

        let path = ActFile::write(&dir, Act::Two, "Type,X,Y,Dialogue\nGuard,1,1,\"Halt\"")
            .await
            .unwrap();

        assert_eq!(path, dir.join("town-act2-dialogue.csv"));
        let text = ActFile::read(&path).await.unwrap();
        assert_eq!(text, "Type,X,Y,Dialogue\nGuard,1,1,\"Halt\"");
    }

    #[tokio::test]
    async fn test_export_import_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = Editor::new(&EditorConfig::new().with_seed(3));
        let (id, _) = editor
            .place_or_replace(Position::new(7, 3), TypeId::from_name("Advisor").unwrap())
            .unwrap();
        editor
            .set_custom_dialogue(id, "Trust, but \"verify\".")
            .unwrap();

        let csv = editor.export_act(Act::One).unwrap();
        let path = ActFile::write(temp_dir.path(), Act::One, &csv).await.unwrap();

        let mut restored = Editor::default();
        let text = ActFile::read(&path).await.unwrap();
        let summary = restored.import_act(Act::One, &text);

        assert_eq!(summary.imported, 1);
        let entity = &restored.current().entities()[0];
        assert_eq!(entity.position, Position::new(7, 3));
        assert_eq!(entity.effective_dialogue(), "Trust, but \"verify\".");
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.csv");

        let err = ActFile::read(&path).await.unwrap_err();
        assert!(err.to_string().contains("nope.csv"));
    }
}
