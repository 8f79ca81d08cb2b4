//! Runtime configuration
//!
//! Settings come from an optional TOML file; command line flags are applied
//! on top by the binary.

use crate::todo::RemovalPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the data file
pub const DEFAULT_DATA_FILE: &str = "todo-lists.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the TOML file holding the lists
    pub data_file: PathBuf,
    /// Whether removing a list's last task removes the list
    pub removal_policy: RemovalPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            removal_policy: RemovalPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
