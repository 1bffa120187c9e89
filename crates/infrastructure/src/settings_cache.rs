use arc_swap::ArcSwap;
use greyscale_application::ports::{SettingsRepository, SettingsView};
use greyscale_domain::{DomainError, Settings};
use std::sync::Arc;
use tracing::debug;

/// Read-through cache of the settings document for the tab-update path.
///
/// Holds the last loaded document behind an `ArcSwap`. It is refreshed only
/// through [`refresh`], driven by store change notifications — never re-read
/// optimistically mid-operation — so one tab evaluation always works against
/// a single consistent snapshot.
///
/// [`refresh`]: SettingsCache::refresh
pub struct SettingsCache {
    store: Arc<dyn SettingsRepository>,
    current: ArcSwap<Settings>,
}

impl SettingsCache {
    /// Prime the cache with the store's current document.
    pub async fn load(store: Arc<dyn SettingsRepository>) -> Result<Self, DomainError> {
        let initial = store.load().await?;
        Ok(Self {
            store,
            current: ArcSwap::from_pointee(initial),
        })
    }

    /// Re-read the store and atomically swap the snapshot in.
    pub async fn refresh(&self) -> Result<(), DomainError> {
        let fresh = self.store.load().await?;
        self.current.store(Arc::new(fresh));
        debug!("Settings cache refreshed");
        Ok(())
    }
}

impl SettingsView for SettingsCache {
    fn current(&self) -> Arc<Settings> {
        self.current.load_full()
    }
}
