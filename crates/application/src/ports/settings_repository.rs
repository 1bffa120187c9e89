use async_trait::async_trait;
use greyscale_domain::{DomainError, Settings, SettingsChange};
use tokio::sync::broadcast;

/// Port over the persisted settings document.
///
/// The underlying persistence may be eventually consistent across execution
/// contexts. Readers must not assume a local write is immediately visible
/// elsewhere; they rely on the change notifications from [`subscribe`]
/// instead of re-reading optimistically.
///
/// [`subscribe`]: SettingsRepository::subscribe
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the current document, falling back to defaults when it is
    /// missing or unreadable. Never fails closed.
    async fn load(&self) -> Result<Settings, DomainError>;

    /// Persist the whole document. Last write wins at document granularity;
    /// a save that changes nothing emits no notification.
    async fn save(&self, settings: &Settings) -> Result<(), DomainError>;

    /// Subscribe to change notifications carrying the changed top-level keys.
    fn subscribe(&self) -> broadcast::Receiver<SettingsChange>;
}
