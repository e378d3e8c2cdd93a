//! Render settings at ~/.mapsnip/config.json.
//!
//! Missing or unreadable files fall back to defaults; every field is optional
//! in the file.

use super::providers::{DEFAULT_CONTAINER_ID, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::types::ProviderKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Provider used when the caller passes an empty key.
    #[serde(default)]
    pub default_provider: ProviderKey,
    /// `id` of the container element the snippet targets.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// CSS width of the container.
    #[serde(default = "default_width")]
    pub width: String,
    /// CSS height of the container.
    #[serde(default = "default_height")]
    pub height: String,
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_width() -> String {
    DEFAULT_WIDTH.to_string()
}

fn default_height() -> String {
    DEFAULT_HEIGHT.to_string()
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            default_provider: ProviderKey::default(),
            container_id: default_container_id(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl EmbedConfig {
    /// Load from the default location (~/.mapsnip/config.json).
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Self {
        match Self::read_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mapsnip")
            .join("config.json")
    }

    fn read_file(path: &Path) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(io::Error::from)
    }

    /// Persist as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::from)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = EmbedConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, EmbedConfig::default());
        assert_eq!(config.default_provider, ProviderKey::Google);
        assert_eq!(config.container_id, "map");
        assert_eq!(config.width, "100%");
        assert_eq!(config.height, "400px");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = EmbedConfig {
            default_provider: ProviderKey::Neshan,
            container_id: "store-map".into(),
            width: "640px".into(),
            height: "50vh".into(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(EmbedConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_provider": "osm", "height": "300px"}"#).unwrap();
        let config = EmbedConfig::load_from(&path);
        assert_eq!(config.default_provider, ProviderKey::Osm);
        assert_eq!(config.container_id, "map");
        assert_eq!(config.width, "100%");
        assert_eq!(config.height, "300px");
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(EmbedConfig::load_from(&path), EmbedConfig::default());
    }

    #[test]
    fn test_unknown_provider_in_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_provider": "here"}"#).unwrap();
        assert_eq!(EmbedConfig::load_from(&path), EmbedConfig::default());
    }
}
