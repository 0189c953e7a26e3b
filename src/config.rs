//! Configuration file handling.
//!
//! Loads render defaults from `asciify.toml` in the working directory, or a
//! custom path given with `--config`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::converter::AsciiOptions;

pub const DEFAULT_CONFIG_FILE: &str = "asciify.toml";

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub invert: Option<bool>,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Fill options from command-line values, falling back to the config
    /// file and then to the built-in defaults.
    pub fn resolve(
        &self,
        width: Option<usize>,
        height: Option<usize>,
        invert: Option<bool>,
    ) -> AsciiOptions {
        let defaults = AsciiOptions::default();
        AsciiOptions {
            width: width.or(self.render.width).unwrap_or(defaults.width),
            height: height.or(self.render.height).unwrap_or(defaults.height),
            invert: invert.or(self.render.invert).unwrap_or(defaults.invert),
        }
    }
}
