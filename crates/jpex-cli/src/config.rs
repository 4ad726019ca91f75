//! Configuration file handling
//!
//! Settings load from a TOML file, either the path given with `--config` or
//! `jpex/config.toml` under the platform config directory. A missing file
//! means defaults; a file that fails to parse is a startup error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use jpex_core::DEFAULT_INDENT;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`]
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Visual theme selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Palette for dark terminal backgrounds
    #[default]
    Dark,
    /// Palette for light terminal backgrounds
    Light,
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visual theme
    pub theme: Theme,
    /// Indent width for rendered JSON
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jpex").join("config.toml"))
    }
}
