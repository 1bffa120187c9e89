use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the persisted settings document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON settings document
    pub settings_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from("greyscale-settings.json"),
        }
    }
}
