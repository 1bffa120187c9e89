pub mod mock_repositories;

pub use mock_repositories::{MockSettingsRepository, MockSettingsView, MockTabHost, TabFilter};
