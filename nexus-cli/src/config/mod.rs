//! Persisted user preferences.
//!
//! One TOML file under the user config dir holding the theme mode.
//! Persistence is strictly best-effort: a missing or unreadable store
//! degrades to session-only defaults and never fails the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tui::state::ThemeMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no user config directory on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
}

impl Config {
    /// `<config_dir>/nexus-cli/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("nexus-cli").join("config.toml"))
    }

    /// Load from a path. A missing file is not an error: first launch
    /// starts from defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Load from the default location, degrading to in-memory defaults
    /// when the store is unavailable
    pub fn load_or_default() -> Self {
        match Self::default_path().and_then(|p| Self::load(&p)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config unavailable, continuing session-only: {}", e);
                Self::default()
            }
        }
    }

    /// Write the theme mode to the default location, session-only on failure
    pub fn persist_theme_mode(mode: ThemeMode) -> Result<(), ConfigError> {
        let path = Config::default_path()?;
        let mut config = Config::load(&path).unwrap_or_default();
        config.theme_mode = Some(mode);
        config.save(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.theme_mode.is_none());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            theme_mode: Some(ThemeMode::Dark),
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.theme_mode, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_theme_mode_wire_values() {
        // Stored scalar is one of "light" | "dark" | "system"
        for (mode, wire) in [
            (ThemeMode::Light, "light"),
            (ThemeMode::Dark, "dark"),
            (ThemeMode::System, "system"),
        ] {
            let raw = toml::to_string(&Config {
                theme_mode: Some(mode),
            })
            .unwrap();
            assert_eq!(raw.trim(), format!("theme_mode = \"{}\"", wire));

            let parsed: Config = toml::from_str(&raw).unwrap();
            assert_eq!(parsed.theme_mode, Some(mode));
        }
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme_mode = 42").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
