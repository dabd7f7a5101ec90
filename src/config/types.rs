//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CampResult;

use super::loader::{self, ConfigWarning};

/// Where the workspace files live, relative to the workspace directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            output: default_output(),
        }
    }
}

fn default_model() -> String {
    "camp.yml".to_string()
}

fn default_output() -> String {
    "out".to_string()
}

/// Realization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizeConfig {
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for RealizeConfig {
    fn default() -> Self {
        Self {
            atomic_writes: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Full tool configuration (`camp.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub realize: RealizeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CampResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CampResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the workspace config, the user config, or defaults
    pub fn load_or_default(workspace: Option<&Path>) -> CampResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(workspace)
    }

    /// Apply environment variable overrides (CAMP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
