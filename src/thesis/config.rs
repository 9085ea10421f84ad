use crate::error::{Result, ThesisError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "public/data";
const DEFAULT_REPORT: &str = "AAPL_Q2_2025_combined_analysis.json";

pub const KEY_DATA_DIR: &str = "data-dir";
pub const KEY_DEFAULT_REPORT: &str = "default-report";

/// Configuration for thesis, stored in .thesis/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThesisConfig {
    /// Directory holding the generated report documents
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Report shown by `view` when no selection is given
    #[serde(default = "default_report")]
    pub default_report: String,
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_report() -> String {
    DEFAULT_REPORT.to_string()
}

impl Default for ThesisConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_report: default_report(),
        }
    }
}

impl ThesisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ThesisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            KEY_DATA_DIR => Some(&self.data_dir),
            KEY_DEFAULT_REPORT => Some(&self.default_report),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ThesisError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            KEY_DATA_DIR => self.data_dir = value.to_string(),
            KEY_DEFAULT_REPORT => self.default_report = value.to_string(),
            other => return Err(ThesisError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_DATA_DIR, self.data_dir.clone()),
            (KEY_DEFAULT_REPORT, self.default_report.clone()),
        ]
    }
}
