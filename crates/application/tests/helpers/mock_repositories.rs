#![allow(dead_code)]

use async_trait::async_trait;
use greyscale_application::ports::{
    SettingsRepository, SettingsView, TabHost, TabId, TabInfo,
};
use greyscale_domain::{DomainError, Intensity, Settings, SettingsChange};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock as StdRwLock};
use tokio::sync::{broadcast, RwLock};

// ============================================================================
// Mock SettingsRepository
// ============================================================================

/// In-memory settings repository that records every save and broadcasts
/// change notifications exactly like the file-backed store.
pub struct MockSettingsRepository {
    settings: RwLock<Settings>,
    save_count: RwLock<usize>,
    changes: broadcast::Sender<SettingsChange>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            settings: RwLock::new(settings),
            save_count: RwLock::new(0),
            changes,
        }
    }

    /// Number of times `save` was called, regardless of whether it changed
    /// anything.
    pub async fn save_count(&self) -> usize {
        *self.save_count.read().await
    }

    pub async fn current(&self) -> Settings {
        self.settings.read().await.clone()
    }
}

impl Default for MockSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn load(&self) -> Result<Settings, DomainError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        let mut current = self.settings.write().await;
        let change = SettingsChange::diff(&current, settings);
        *current = settings.clone();
        *self.save_count.write().await += 1;
        if change.any() {
            let _ = self.changes.send(change);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.changes.subscribe()
    }
}

// ============================================================================
// Mock SettingsView
// ============================================================================

/// Fixed settings snapshot, swappable from tests.
pub struct MockSettingsView {
    current: StdRwLock<Arc<Settings>>,
}

impl MockSettingsView {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: StdRwLock::new(Arc::new(settings)),
        }
    }

    pub fn swap(&self, settings: Settings) {
        *self.current.write().unwrap() = Arc::new(settings);
    }
}

impl SettingsView for MockSettingsView {
    fn current(&self) -> Arc<Settings> {
        self.current.read().unwrap().clone()
    }
}

// ============================================================================
// Mock TabHost
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabFilter {
    None,
    Applied(Intensity),
}

struct MockTab {
    url: Option<String>,
    filter: TabFilter,
    restricted: bool,
    /// Count of apply/remove operations that reached this tab.
    operations: usize,
}

/// In-memory tab host tracking per-tab filter state.
pub struct MockTabHost {
    tabs: RwLock<BTreeMap<TabId, MockTab>>,
}

impl MockTabHost {
    pub fn new() -> Self {
        Self {
            tabs: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn add_tab(&self, id: TabId, url: Option<&str>) {
        self.tabs.write().await.insert(
            id,
            MockTab {
                url: url.map(str::to_string),
                filter: TabFilter::None,
                restricted: false,
                operations: 0,
            },
        );
    }

    /// Mark a tab as restricted: any injection into it fails.
    pub async fn set_restricted(&self, id: TabId) {
        if let Some(tab) = self.tabs.write().await.get_mut(&id) {
            tab.restricted = true;
        }
    }

    pub async fn filter_of(&self, id: TabId) -> Option<TabFilter> {
        self.tabs.read().await.get(&id).map(|tab| tab.filter)
    }

    pub async fn operations(&self, id: TabId) -> usize {
        self.tabs
            .read()
            .await
            .get(&id)
            .map(|tab| tab.operations)
            .unwrap_or(0)
    }
}

impl Default for MockTabHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TabHost for MockTabHost {
    async fn list_tabs(&self) -> Result<Vec<TabInfo>, DomainError> {
        Ok(self
            .tabs
            .read()
            .await
            .iter()
            .map(|(id, tab)| TabInfo {
                id: *id,
                url: tab.url.clone(),
            })
            .collect())
    }

    async fn apply_filter(&self, tab: TabId, intensity: Intensity) -> Result<(), DomainError> {
        let mut tabs = self.tabs.write().await;
        let record = tabs.get_mut(&tab).ok_or(DomainError::TabUnavailable(tab))?;
        if record.restricted {
            return Err(DomainError::TabUnavailable(tab));
        }
        record.filter = TabFilter::Applied(intensity);
        record.operations += 1;
        Ok(())
    }

    async fn remove_filter(&self, tab: TabId) -> Result<(), DomainError> {
        let mut tabs = self.tabs.write().await;
        let record = tabs.get_mut(&tab).ok_or(DomainError::TabUnavailable(tab))?;
        if record.restricted {
            return Err(DomainError::TabUnavailable(tab));
        }
        record.filter = TabFilter::None;
        record.operations += 1;
        Ok(())
    }
}
