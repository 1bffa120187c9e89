//! End-to-end flows over the assembled engine: mutate settings through the
//! use cases, drive the change-propagation steps the server's listener
//! performs, and assert on the style commands the shim would receive.

use greyscale_application::ports::{SettingsRepository, TabHost};
use greyscale_application::use_cases::{
    AddSiteUseCase, BulkToggleUseCase, DeleteSiteUseCase, SetIntensityUseCase,
    UpdateAllTabsUseCase, UpdateTabUseCase,
};
use greyscale_domain::{greyscale_css, Intensity, SettingsChange};
use greyscale_infrastructure::{
    BridgeTabHost, FileSettingsStore, SettingsCache, StyleCommand, StyleCommandEmitter, TabRegistry,
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::{broadcast, mpsc};

struct Engine {
    _dir: TempDir,
    store: Arc<FileSettingsStore>,
    cache: Arc<SettingsCache>,
    registry: Arc<TabRegistry>,
    commands: mpsc::UnboundedReceiver<StyleCommand>,
    changes: broadcast::Receiver<SettingsChange>,
    update_tab: Arc<UpdateTabUseCase>,
    update_all_tabs: UpdateAllTabsUseCase,
}

impl Engine {
    async fn start() -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileSettingsStore::new(dir.path().join("settings.json")));
        store.ensure_initialized().await.unwrap();

        let repo: Arc<dyn SettingsRepository> = store.clone();
        let changes = repo.subscribe();
        let cache = Arc::new(SettingsCache::load(repo).await.unwrap());

        let registry = Arc::new(TabRegistry::new());
        let (emitter, commands) = StyleCommandEmitter::enabled();
        let tab_host: Arc<dyn TabHost> = Arc::new(BridgeTabHost::new(registry.clone(), emitter));

        let update_tab = Arc::new(UpdateTabUseCase::new(cache.clone(), tab_host.clone()));
        let update_all_tabs = UpdateAllTabsUseCase::new(tab_host, update_tab.clone());

        Self {
            _dir: dir,
            store,
            cache,
            registry,
            commands,
            changes,
            update_tab,
            update_all_tabs,
        }
    }

    /// One turn of the server's change listener: consume the notification,
    /// refresh the snapshot, re-evaluate every tab.
    async fn propagate(&mut self) -> SettingsChange {
        let change = self.changes.recv().await.unwrap();
        self.cache.refresh().await.unwrap();
        self.update_all_tabs.execute().await;
        change
    }

    fn drain(&mut self) -> Vec<StyleCommand> {
        let mut drained = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            drained.push(command);
        }
        drained
    }
}

#[tokio::test]
async fn test_add_site_filters_matching_tabs() {
    let mut engine = Engine::start().await;
    engine
        .registry
        .upsert(1, Some("https://www.example.com/news".to_string()));
    engine
        .registry
        .upsert(2, Some("https://other.org/".to_string()));

    AddSiteUseCase::new(engine.store.clone())
        .execute("Example.COM/path")
        .await
        .unwrap();

    let change = engine.propagate().await;
    assert!(change.sites && !change.intensity);

    let commands = engine.drain();
    assert_eq!(commands.len(), 2);
    assert!(commands.contains(&StyleCommand::apply(1, greyscale_css(Intensity::MAX))));
    assert!(commands.contains(&StyleCommand::remove(2)));
}

#[tokio::test]
async fn test_intensity_change_reapplies_filters() {
    let mut engine = Engine::start().await;
    engine
        .registry
        .upsert(1, Some("https://example.com/".to_string()));

    AddSiteUseCase::new(engine.store.clone())
        .execute("example.com")
        .await
        .unwrap();
    engine.propagate().await;
    engine.drain();

    SetIntensityUseCase::new(engine.store.clone())
        .execute(35)
        .await
        .unwrap();
    let change = engine.propagate().await;
    assert!(change.intensity && !change.sites);

    assert_eq!(
        engine.drain(),
        vec![StyleCommand::apply(1, greyscale_css(Intensity::new(35)))]
    );
}

#[tokio::test]
async fn test_bulk_disable_unfilters_everything() {
    let mut engine = Engine::start().await;
    engine
        .registry
        .upsert(1, Some("https://a.com/".to_string()));
    engine
        .registry
        .upsert(2, Some("https://sub.b.org/page".to_string()));

    let add = AddSiteUseCase::new(engine.store.clone());
    add.execute("a.com").await.unwrap();
    engine.propagate().await;
    add.execute("b.org").await.unwrap();
    engine.propagate().await;
    engine.drain();

    BulkToggleUseCase::new(engine.store.clone())
        .execute(false)
        .await
        .unwrap();
    engine.propagate().await;

    let commands = engine.drain();
    assert_eq!(commands.len(), 2);
    assert!(commands.contains(&StyleCommand::remove(1)));
    assert!(commands.contains(&StyleCommand::remove(2)));
}

#[tokio::test]
async fn test_delete_site_unfilters_its_tabs() {
    let mut engine = Engine::start().await;
    engine
        .registry
        .upsert(1, Some("https://www.a.com/".to_string()));

    AddSiteUseCase::new(engine.store.clone())
        .execute("a.com")
        .await
        .unwrap();
    engine.propagate().await;
    engine.drain();

    let removed = DeleteSiteUseCase::new(engine.store.clone())
        .execute(&greyscale_domain::SiteDomain::parse("a.com").unwrap())
        .await
        .unwrap();
    assert!(removed);
    engine.propagate().await;

    assert_eq!(engine.drain(), vec![StyleCommand::remove(1)]);
}

#[tokio::test]
async fn test_navigation_path_is_independent_of_change_path() {
    let mut engine = Engine::start().await;

    AddSiteUseCase::new(engine.store.clone())
        .execute("a.com")
        .await
        .unwrap();
    engine.changes.recv().await.unwrap();
    engine.cache.refresh().await.unwrap();

    // A navigation event arrives for a fresh tab; only the per-tab path runs.
    engine
        .registry
        .upsert(9, Some("https://a.com/landing".to_string()));
    engine.update_tab.execute(9, "https://a.com/landing").await;

    assert_eq!(
        engine.drain(),
        vec![StyleCommand::apply(9, greyscale_css(Intensity::MAX))]
    );
}

#[tokio::test]
async fn test_settings_survive_engine_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    {
        let store = Arc::new(FileSettingsStore::new(&path));
        store.ensure_initialized().await.unwrap();
        AddSiteUseCase::new(store.clone())
            .execute("example.com")
            .await
            .unwrap();
        SetIntensityUseCase::new(store).execute(64).await.unwrap();
    }

    let store = Arc::new(FileSettingsStore::new(&path));
    store.ensure_initialized().await.unwrap();
    let settings = store.load().await.unwrap();
    assert_eq!(settings.sites.len(), 1);
    assert_eq!(settings.intensity.percent(), 64);
}
