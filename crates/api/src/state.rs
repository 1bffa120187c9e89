use greyscale_application::use_cases::{
    AddSiteUseCase, BulkToggleUseCase, DeleteSiteUseCase, GetSettingsUseCase, SetIntensityUseCase,
    ToggleSiteUseCase, UpdateAllTabsUseCase, UpdateTabUseCase,
};
use greyscale_infrastructure::{StyleCommand, TabRegistry};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub get_settings: Arc<GetSettingsUseCase>,
    pub add_site: Arc<AddSiteUseCase>,
    pub toggle_site: Arc<ToggleSiteUseCase>,
    pub delete_site: Arc<DeleteSiteUseCase>,
    pub bulk_toggle: Arc<BulkToggleUseCase>,
    pub set_intensity: Arc<SetIntensityUseCase>,
    pub update_tab: Arc<UpdateTabUseCase>,
    pub update_all_tabs: Arc<UpdateAllTabsUseCase>,
    pub tab_registry: Arc<TabRegistry>,
    /// Pending style commands for the shim; drained by `/tabs/commands`.
    pub style_commands: Arc<Mutex<mpsc::UnboundedReceiver<StyleCommand>>>,
}
