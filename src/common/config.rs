//! # Configuration Utilities
//!
//! TOML configuration for the command-line tool. Every field has a default so
//! a missing file or a partial file both work.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Example
/// ```ignore
/// let config: StegConfig = load_config("config/huffsteg.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content =
        fs::read_to_string(path).with_context(|| format!("reading config file {}", path))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("parsing config file {}", path))?;
    Ok(config)
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StegConfig {
    pub logging: LoggingConfig,
    pub codebook: CodebookConfig,
}

/// Logger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level name understood by `log::LevelFilter` (e.g. "info", "debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Where the codebook sidecar goes when `--codebook` is not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodebookConfig {
    /// Extension appended to the output image stem (e.g. `out.codebook.json`)
    pub extension: String,
}

impl Default for CodebookConfig {
    fn default() -> Self {
        Self {
            extension: "codebook.json".to_string(),
        }
    }
}

impl StegConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn from_optional_file(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => load_config(path),
            None => Ok(Self::default()),
        }
    }
}
