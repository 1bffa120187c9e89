use async_trait::async_trait;
use greyscale_application::ports::{TabHost, TabId, TabInfo};
use greyscale_domain::{greyscale_css, DomainError, Intensity};
use std::sync::Arc;

use super::{FilterState, StyleCommand, StyleCommandEmitter, TabRegistry};

/// `TabHost` over the browser bridge.
///
/// Tabs live in the in-memory registry; style operations become commands on
/// the emitter for the shim to execute. A tab the shim has not reported (or
/// has already closed) is unavailable, which callers treat as a no-op.
pub struct BridgeTabHost {
    registry: Arc<TabRegistry>,
    emitter: StyleCommandEmitter,
}

impl BridgeTabHost {
    pub fn new(registry: Arc<TabRegistry>, emitter: StyleCommandEmitter) -> Self {
        Self { registry, emitter }
    }
}

#[async_trait]
impl TabHost for BridgeTabHost {
    async fn list_tabs(&self) -> Result<Vec<TabInfo>, DomainError> {
        Ok(self.registry.snapshot())
    }

    async fn apply_filter(&self, tab: TabId, intensity: Intensity) -> Result<(), DomainError> {
        if !self.registry.set_filter(tab, FilterState::Filtered(intensity)) {
            return Err(DomainError::TabUnavailable(tab));
        }
        self.emitter
            .emit(StyleCommand::apply(tab, greyscale_css(intensity)));
        Ok(())
    }

    async fn remove_filter(&self, tab: TabId) -> Result<(), DomainError> {
        if !self.registry.set_filter(tab, FilterState::NoFilter) {
            return Err(DomainError::TabUnavailable(tab));
        }
        self.emitter.emit(StyleCommand::remove(tab));
        Ok(())
    }
}
