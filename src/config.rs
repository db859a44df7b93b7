use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for logger behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub debug: bool,
    pub timestamp_format: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub log_file_name: Option<String>,
    pub use_timestamp: bool,
    pub use_prefix: bool,
    pub frame_width: usize,
    pub color: Option<bool>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            debug: false,           // DEBUG lines stay off the console
            timestamp_format: None, // default timestamp representation
            log_dir: None,          // file sink disabled
            log_file_name: None,    // derived from a timestamp on first write
            use_timestamp: true,
            use_prefix: true,
            frame_width: 80, // header border width
            color: None,     // auto-detect from the terminal
        }
    }
}

impl LoggerConfig {
    /// Load a configuration from a YAML file; absent fields take their defaults
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}
