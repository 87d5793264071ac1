//! Configuration file support for mapfit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/mapfit/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
}

/// Map display configuration consumed by the UI shell
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_attribution")]
    pub attribution: String,

    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            default_zoom: default_zoom(),
        }
    }
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".into()
}

fn default_attribution() -> String {
    "© OpenStreetMap contributors".into()
}

fn default_zoom() -> u8 {
    13
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("mapfit").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.map.default_zoom, 13);
        assert!(config.map.tile_url.contains("openstreetmap"));
        assert!(!config.map.attribution.is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.map.tile_url, parsed.map.tile_url);
        assert_eq!(config.map.default_zoom, parsed.map.default_zoom);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[map]
default_zoom = 15
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.map.default_zoom, 15);
        assert!(config.map.tile_url.contains("openstreetmap")); // default
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[map]\ndefault_zoom = 11\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.map.default_zoom, 11);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
