use std::sync::Arc;
use tracing::{debug, instrument};

use super::UpdateTabUseCase;
use crate::ports::TabHost;

pub struct UpdateAllTabsUseCase {
    tab_host: Arc<dyn TabHost>,
    update_tab: Arc<UpdateTabUseCase>,
}

impl UpdateAllTabsUseCase {
    pub fn new(tab_host: Arc<dyn TabHost>, update_tab: Arc<UpdateTabUseCase>) -> Self {
        Self {
            tab_host,
            update_tab,
        }
    }

    /// Re-evaluate every open tab. Tabs without a URL are skipped silently;
    /// per-tab failures never interrupt the sweep.
    #[instrument(skip(self))]
    pub async fn execute(&self) {
        let tabs = match self.tab_host.list_tabs().await {
            Ok(tabs) => tabs,
            Err(e) => {
                debug!(error = %e, "Tab enumeration failed");
                return;
            }
        };

        debug!(count = tabs.len(), "Re-evaluating open tabs");

        for tab in tabs {
            if let Some(url) = tab.url {
                self.update_tab.execute(tab.id, &url).await;
            }
        }
    }
}
