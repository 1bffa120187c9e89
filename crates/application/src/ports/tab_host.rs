use async_trait::async_trait;
use greyscale_domain::{DomainError, Intensity};

/// Opaque tab identifier assigned by the host runtime.
pub type TabId = i64;

/// A browser tab as reported by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub id: TabId,
    /// Absent for tabs that have not navigated anywhere yet.
    pub url: Option<String>,
}

/// Port over the browser side: tab enumeration and filter injection.
///
/// A tab can only be unfiltered or filtered at some intensity; both
/// transitions are idempotent. Operations on a closed or restricted tab fail
/// with [`DomainError::TabUnavailable`]; callers treat that as a no-op.
#[async_trait]
pub trait TabHost: Send + Sync {
    async fn list_tabs(&self) -> Result<Vec<TabInfo>, DomainError>;

    /// Ensure the single grayscale rule is present at `intensity`, replacing
    /// any prior instance of it.
    async fn apply_filter(&self, tab: TabId, intensity: Intensity) -> Result<(), DomainError>;

    /// Remove the rule; removing an absent rule leaves the tab unchanged.
    async fn remove_filter(&self, tab: TabId) -> Result<(), DomainError>;
}
