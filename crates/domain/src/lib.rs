//! Greyscale Web Domain Layer
pub mod config;
pub mod errors;
pub mod matcher;
pub mod settings;
pub mod site_domain;
pub mod stylesheet;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use matcher::{is_enabled, matches};
pub use settings::{Intensity, Settings, SettingsChange, SiteConfig, SiteEntry};
pub use site_domain::SiteDomain;
pub use stylesheet::{greyscale_css, STYLE_ELEMENT_ID};
