use super::{ConfigError, LoggingConfig, ServerConfig, StorageConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration, loadable from a TOML file.
/// Every section has working defaults; a missing file means defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub settings_path: Option<PathBuf>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .map_err(|e| ConfigError::Io(p.to_string(), e))?;
                toml::from_str(&raw).map_err(|e| ConfigError::Parse(p.to_string(), e))?
            }
            None => Self::default(),
        };

        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            config.server.web_port = port;
        }
        if let Some(settings_path) = overrides.settings_path {
            config.storage.settings_path = settings_path;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Invalid("web_port cannot be 0".to_string()));
        }
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Invalid(
                "bind_address cannot be empty".to_string(),
            ));
        }
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }
}
