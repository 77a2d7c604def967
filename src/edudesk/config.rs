use crate::error::{EdudeskError, Result};
use crate::model::ContentKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTENT_EXT: &str = ".md";

/// Console configuration, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeskConfig {
    /// File extension for record bodies on disk (e.g., ".md", ".markdown")
    #[serde(default = "default_content_ext")]
    pub content_ext: String,

    /// Which content tab a freshly opened session shows
    #[serde(default = "default_kind")]
    pub default_kind: ContentKind,
}

fn default_content_ext() -> String {
    DEFAULT_CONTENT_EXT.to_string()
}

fn default_kind() -> ContentKind {
    ContentKind::Book
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            content_ext: DEFAULT_CONTENT_EXT.to_string(),
            default_kind: ContentKind::Book,
        }
    }
}

impl DeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(EdudeskError::Io)?;
        let config: DeskConfig =
            serde_json::from_str(&content).map_err(EdudeskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(EdudeskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(EdudeskError::Serialization)?;
        fs::write(config_path, content).map_err(EdudeskError::Io)?;
        Ok(())
    }

    /// Set the content extension (normalizes to start with a dot)
    pub fn set_content_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.content_ext = ext.to_string();
        } else {
            self.content_ext = format!(".{}", ext);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.content_ext, ".md");
        assert_eq!(config.default_kind, ContentKind::Book);
    }

    #[test]
    fn test_set_content_ext_without_dot() {
        let mut config = DeskConfig::default();
        config.set_content_ext("markdown");
        assert_eq!(config.content_ext, ".markdown");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = DeskConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, DeskConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = DeskConfig::default();
        config.default_kind = ContentKind::AiNotes;
        config.save(temp_dir.path()).unwrap();

        let loaded = DeskConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.default_kind, ContentKind::AiNotes);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = DeskConfig {
            content_ext: ".markdown".to_string(),
            default_kind: ContentKind::QuestionBank,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DeskConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
