use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Cannot parse config file {0}: {1}")]
    Parse(String, #[source] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
