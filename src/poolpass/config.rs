use crate::error::{PassportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for poolpass, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassportConfig {
    /// Custom catalog file used instead of the built-in pool list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for PassportConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            log_level: default_log_level(),
        }
    }
}

impl PassportConfig {
    pub const KEYS: [&'static str; 2] = ["catalog", "log-level"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PassportError::Io)?;
        let config: PassportConfig =
            serde_json::from_str(&content).map_err(PassportError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PassportError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PassportError::Serialization)?;
        fs::write(config_path, content).map_err(PassportError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
            ),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Set a value by key. An empty catalog path restores the built-in list.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog" => {
                let value = value.trim();
                self.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
                Ok(())
            }
            "log-level" => {
                if value.trim().is_empty() {
                    return Err("log-level cannot be empty".to_string());
                }
                self.log_level = value.trim().to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
