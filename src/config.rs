// src/config.rs

//! Defines the configuration structures for the screen service.
//!
//! The configuration is deserialized from a JSON file. Every struct carries
//! `#[serde(default)]`, so a file only needs to name the settings it changes:
//!
//! ```json
//! { "screen": { "background": 4, "fill": "." }, "logging": { "filter": "debug" } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::term::SetupOptions;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "TERM_SCREEN_CONFIG";

/// Represents the complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Contents every newly set up screen is filled with.
    pub screen: SetupOptions,
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// The path named by `TERM_SCREEN_CONFIG`, if set.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
    }

    /// Loads `path`, or returns the defaults when there is none.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the file named by `TERM_SCREEN_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load_or_default(Self::path_from_env().as_deref())
    }
}
