//! Configuration for the Grid Engine adapter.
//!
//! Supports loading configuration from:
//! 1. A YAML file
//! 2. Environment variables (with `ARVAK_GRID_` prefix)
//!
//! Environment variables take precedence over the file, which takes
//! precedence over the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::job::DEFAULT_LOG_FILE_NAME;

/// Default name of the generated submission script.
pub const DEFAULT_SCRIPT_FILE_NAME: &str = ".command.run";

/// Adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Stream the script to `qsub -` instead of submitting a file.
    #[serde(default)]
    pub pipe_launcher: bool,

    /// Log file name inside each task work directory.
    #[serde(default = "default_log_file_name")]
    pub log_file_name: String,

    /// Submission script name inside each task work directory.
    #[serde(default = "default_script_file_name")]
    pub script_file_name: String,

    /// Raw options appended after the generated directives.
    #[serde(default)]
    pub cluster_options: Option<String>,
}

fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE_NAME.to_string()
}

fn default_script_file_name() -> String {
    DEFAULT_SCRIPT_FILE_NAME.to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            pipe_launcher: false,
            log_file_name: default_log_file_name(),
            script_file_name: default_script_file_name(),
            cluster_options: None,
        }
    }
}

impl GridConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: GridConfig = serde_yaml_ng::from_str(&contents)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> GridResult<Self> {
        let config = GridConfig::default().merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file, then apply environment
    /// overrides.
    pub fn load(config_file: Option<&Path>) -> GridResult<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => GridConfig::default(),
        };

        let config = config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ARVAK_GRID_*` environment variables.
    pub fn merge_env(self) -> GridResult<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn merge_vars<F>(mut self, lookup: F) -> GridResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ARVAK_GRID_PIPE_LAUNCHER") {
            self.pipe_launcher = parse_bool("ARVAK_GRID_PIPE_LAUNCHER", &v)?;
        }
        if let Some(v) = lookup("ARVAK_GRID_LOG_FILE") {
            self.log_file_name = v;
        }
        if let Some(v) = lookup("ARVAK_GRID_SCRIPT_FILE") {
            self.script_file_name = v;
        }
        if let Some(v) = lookup("ARVAK_GRID_CLUSTER_OPTIONS") {
            self.cluster_options = Some(v);
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> GridResult<()> {
        if self.log_file_name.trim().is_empty() {
            return Err(GridError::ConfigError(
                "log_file_name must not be empty".to_string(),
            ));
        }

        if self.script_file_name.trim().is_empty() {
            return Err(GridError::ConfigError(
                "script_file_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> GridResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(GridError::ConfigError(format!(
            "{key}: expected a boolean, found '{other}'"
        ))),
    }
}
