//! Editor configuration loader.

use std::path::Path;

use town_core::EditorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for editor configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`EditorConfig::default`].
    pub fn load(path: &Path) -> LoadResult<EditorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EditorConfig> {
        let config: EditorConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use town_core::{Act, TypeId};

    #[test]
    fn test_parse_full_config() {
        let config = ConfigLoader::parse(
            "initial_act = 2\n\
             initial_type = 5\n\
             rng_seed = 1234\n",
        )
        .unwrap();

        assert_eq!(config.initial_act, Act::Two);
        assert_eq!(config.initial_type, TypeId::from_name("Queen").unwrap());
        assert_eq!(config.seed(), 1234);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_rejects_unknown_act() {
        let err = ConfigLoader::parse("initial_act = 4").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("town.toml");
        std::fs::write(&path, "initial_type = 8\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.initial_type, TypeId::from_name("Assassin").unwrap());
        assert_eq!(config.initial_act, Act::One);
    }

    #[test]
    fn test_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
