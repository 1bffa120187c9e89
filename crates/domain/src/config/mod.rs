//! Application configuration, organized by concern:
//! - `root`: top-level config, file loading and CLI overrides
//! - `server`: web server binding
//! - `storage`: settings document location
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod storage;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use storage::StorageConfig;
