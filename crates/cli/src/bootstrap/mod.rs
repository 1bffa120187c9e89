pub mod config;
pub mod logging;
pub mod settings;

pub use config::load_config;
pub use logging::init_logging;
pub use settings::init_settings_store;
