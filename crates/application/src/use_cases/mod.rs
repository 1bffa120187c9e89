pub mod settings;
pub mod sites;
pub mod tabs;

// Re-export use cases
pub use settings::{GetSettingsUseCase, SetIntensityUseCase};
pub use sites::{AddSiteUseCase, BulkToggleUseCase, DeleteSiteUseCase, ToggleSiteUseCase};
pub use tabs::{UpdateAllTabsUseCase, UpdateTabUseCase};
