use crate::error::{Result, StockError};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for stockroom, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Slot the product list is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Where `export` writes snapshots (current directory when unset)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            export_dir: None,
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| StockError::Config(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StockError::Config(e.to_string()))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| StockError::Config(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| StockError::Config(e.to_string()))?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)
            .map_err(|e| StockError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(StockError::Config(format!(
                        "Invalid storage key: {:?}",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "export-dir" => {
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => {
                return Err(StockError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["storage-key", "export-dir"]
    }
}
