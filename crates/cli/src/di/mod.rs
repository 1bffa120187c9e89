//! Dependency wiring: adapters behind ports, ports into use cases.

use greyscale_application::ports::{SettingsRepository, SettingsView, TabHost};
use greyscale_application::use_cases::{
    AddSiteUseCase, BulkToggleUseCase, DeleteSiteUseCase, GetSettingsUseCase, SetIntensityUseCase,
    ToggleSiteUseCase, UpdateAllTabsUseCase, UpdateTabUseCase,
};
use greyscale_infrastructure::{
    BridgeTabHost, FileSettingsStore, SettingsCache, StyleCommand, StyleCommandEmitter, TabRegistry,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct UseCases {
    pub get_settings: Arc<GetSettingsUseCase>,
    pub add_site: Arc<AddSiteUseCase>,
    pub toggle_site: Arc<ToggleSiteUseCase>,
    pub delete_site: Arc<DeleteSiteUseCase>,
    pub bulk_toggle: Arc<BulkToggleUseCase>,
    pub set_intensity: Arc<SetIntensityUseCase>,
    pub update_tab: Arc<UpdateTabUseCase>,
    pub update_all_tabs: Arc<UpdateAllTabsUseCase>,
}

pub struct Container {
    pub store: Arc<FileSettingsStore>,
    pub cache: Arc<SettingsCache>,
    pub registry: Arc<TabRegistry>,
    pub style_commands: mpsc::UnboundedReceiver<StyleCommand>,
    pub use_cases: UseCases,
}

impl Container {
    pub async fn build(store: Arc<FileSettingsStore>) -> anyhow::Result<Self> {
        let repo: Arc<dyn SettingsRepository> = store.clone();
        let cache = Arc::new(SettingsCache::load(repo.clone()).await?);

        let registry = Arc::new(TabRegistry::new());
        let (emitter, style_commands) = StyleCommandEmitter::enabled();
        let tab_host: Arc<dyn TabHost> =
            Arc::new(BridgeTabHost::new(registry.clone(), emitter));

        let view: Arc<dyn SettingsView> = cache.clone();
        let update_tab = Arc::new(UpdateTabUseCase::new(view, tab_host.clone()));
        let update_all_tabs = Arc::new(UpdateAllTabsUseCase::new(
            tab_host.clone(),
            update_tab.clone(),
        ));

        let use_cases = UseCases {
            get_settings: Arc::new(GetSettingsUseCase::new(repo.clone())),
            add_site: Arc::new(AddSiteUseCase::new(repo.clone())),
            toggle_site: Arc::new(ToggleSiteUseCase::new(repo.clone())),
            delete_site: Arc::new(DeleteSiteUseCase::new(repo.clone())),
            bulk_toggle: Arc::new(BulkToggleUseCase::new(repo.clone())),
            set_intensity: Arc::new(SetIntensityUseCase::new(repo)),
            update_tab,
            update_all_tabs,
        };

        Ok(Self {
            store,
            cache,
            registry,
            style_commands,
            use_cases,
        })
    }
}
