//! Application configuration.
//!
//! Read from `config.json` in the platform configuration directory. Every
//! field is optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::routes::Route;
use crate::ui::ThemeMode;

const CONFIG_FILE: &str = "config.json";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path opened at startup when none is given on the command line.
    pub initial_path: String,
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_path: Route::Home.path().to_string(),
            theme: ThemeMode::default(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Location of the configuration file for this platform.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("app", "Cartana", "cartana")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads from the platform configuration file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(path, &contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Loads from `path`, which must exist.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.initial_path, "/");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "initial_path": "/searchpage", "theme": "dark" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.initial_path, "/searchpage");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "theme": "sepia" }"#).unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn required_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load_required(&dir.path().join("typo.json")).unwrap_err();
        match err {
            ConfigError::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn required_file_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "window_width": 1024.0 }"#).unwrap();

        let config = AppConfig::load_required(&path).unwrap();
        assert_eq!(config.window_width, 1024.0);
        assert_eq!(config.initial_path, "/");
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
