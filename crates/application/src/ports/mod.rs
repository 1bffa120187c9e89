pub mod settings_repository;
pub mod settings_view;
pub mod tab_host;

pub use settings_repository::SettingsRepository;
pub use settings_view::SettingsView;
pub use tab_host::{TabHost, TabId, TabInfo};
