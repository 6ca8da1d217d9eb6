//! Application configuration.
//!
//! Loaded from `<config dir>/pawtrack/config.json` (or the file named by
//! `PAWTRACK_CONFIG`). Every field has a default, so a partial or missing file
//! is fine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::preference_manager::ThemeOptions;
use crate::stores::JsonFilePreferenceStore;
use crate::theme::ThemeMode;

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "pawtrack";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "PAWTRACK_CONFIG";

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme used when nothing is persisted and the host gives no dark signal.
    pub default_theme: ThemeMode,
    /// Overrides the preference store location.
    pub preferences_path: Option<PathBuf>,
    /// Whether the host's dark-mode signal takes part in initial resolution.
    pub follow_system_theme: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::Light,
            preferences_path: None,
            follow_system_theme: true,
            window_width: 390.0,
            window_height: 844.0,
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads from [`AppConfig::config_path`], logging and falling back to the
    /// defaults when the file cannot be used.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory on this platform, using defaults");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// `$PAWTRACK_CONFIG`, else `<config dir>/pawtrack/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Where theme preferences are persisted, if anywhere.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.preferences_path
            .clone()
            .or_else(JsonFilePreferenceStore::default_path)
    }

    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            default_theme: self.default_theme,
            follow_system_theme: self.follow_system_theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_theme, ThemeMode::Light);
        assert!(config.follow_system_theme);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_theme": "dark", "follow_system_theme": false }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert!(!config.follow_system_theme);
        assert_eq!(config.window_width, 390.0);
    }

    #[test]
    fn test_invalid_theme_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_theme": "sepia" }"#).unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_preferences_path_override() {
        let config = AppConfig {
            preferences_path: Some(PathBuf::from("/tmp/prefs.json")),
            ..AppConfig::default()
        };
        assert_eq!(config.preferences_path(), Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn test_theme_options_mirror_config() {
        let config = AppConfig {
            default_theme: ThemeMode::Dark,
            follow_system_theme: false,
            ..AppConfig::default()
        };
        let options = config.theme_options();
        assert_eq!(options.default_theme, ThemeMode::Dark);
        assert!(!options.follow_system_theme);
    }
}
