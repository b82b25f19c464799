//! TOML settings stored in the app directory.
//!
//! Config keys: `model_path`, `[ui] show_probability`. A missing file yields
//! defaults; the file is never created implicitly.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Artifact path used when the config does not name one.
pub const DEFAULT_MODEL_PATH: &str = "loan_approval_model.json";

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSettings {
    /// Classifier artifact; relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Presentation toggles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UiSettings {
    /// Show the approval probability next to the outcome banner.
    #[serde(default)]
    pub show_probability: bool,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            ui: UiSettings::default(),
        }
    }
}

impl AppSettings {
    /// Model path made absolute against `cwd` when relative.
    pub fn resolved_model_path(&self, cwd: &Path) -> PathBuf {
        if self.model_path.is_absolute() {
            self.model_path.clone()
        } else {
            cwd.join(&self.model_path)
        }
    }
}

/// Resolve the configuration file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_settings_from(&config_path()?)
}

/// Load settings from a specific file, returning defaults if it does not exist.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
