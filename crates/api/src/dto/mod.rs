pub mod settings;
pub mod sites;
pub mod tabs;

pub use settings::{SetIntensityRequest, SettingsResponse, SiteEntryResponse};
pub use sites::{AddSiteRequest, BulkToggleRequest, BulkToggleResponse, SiteAddedResponse, ToggleSiteRequest};
pub use tabs::{CommandsResponse, StatusResponse, TabEventRequest, UpdateTabRequest};
