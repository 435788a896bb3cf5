use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::geodesy::HemispherePolicy;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sort output rows by identifier instead of directory-listing order.
    pub sort_by_id: bool,
    pub hemisphere: HemispherePolicy,
    /// chrono format string for the `Temps` column.
    pub timestamp_format: String,
    /// Input file suffix, without the dot.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_by_id: false,
            hemisphere: HemispherePolicy::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "csv".to_string()
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid, all-default configuration.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
