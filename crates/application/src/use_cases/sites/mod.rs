pub mod add_site;
pub mod bulk_toggle;
pub mod delete_site;
pub mod toggle_site;

pub use add_site::AddSiteUseCase;
pub use bulk_toggle::BulkToggleUseCase;
pub use delete_site::DeleteSiteUseCase;
pub use toggle_site::ToggleSiteUseCase;
