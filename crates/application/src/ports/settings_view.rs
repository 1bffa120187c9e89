use greyscale_domain::Settings;
use std::sync::Arc;

/// Synchronous settings snapshot for the tab-update path.
///
/// Implementations hold the last known document and are refreshed only from
/// store change notifications, never by re-reading mid-operation, so one tab
/// evaluation always sees a single consistent snapshot.
pub trait SettingsView: Send + Sync {
    fn current(&self) -> Arc<Settings>;
}
