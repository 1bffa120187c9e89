use greyscale_domain::is_enabled;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

use crate::ports::{SettingsView, TabHost, TabId};

pub struct UpdateTabUseCase {
    settings: Arc<dyn SettingsView>,
    tab_host: Arc<dyn TabHost>,
}

impl UpdateTabUseCase {
    pub fn new(settings: Arc<dyn SettingsView>, tab_host: Arc<dyn TabHost>) -> Self {
        Self { settings, tab_host }
    }

    /// Re-evaluate one tab against the current settings snapshot.
    ///
    /// Non-http(s) and unparsable URLs are skipped. Injection failures on
    /// restricted or closed tabs are expected, not exceptional: they are
    /// logged at debug and swallowed. Repeating the call with unchanged
    /// inputs leaves the tab in the same state.
    #[instrument(skip(self))]
    pub async fn execute(&self, tab: TabId, url: &str) {
        let Some(hostname) = fetchable_hostname(url) else {
            return;
        };

        let settings = self.settings.current();
        let result = if is_enabled(&hostname, &settings.sites) {
            self.tab_host.apply_filter(tab, settings.intensity).await
        } else {
            self.tab_host.remove_filter(tab).await
        };

        if let Err(e) = result {
            debug!(tab, error = %e, "Tab update skipped");
        }
    }
}

/// Hostname of `url` when it has a fetchable (http/https) scheme.
fn fetchable_hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed.host_str().map(|host| host.to_ascii_lowercase())
}
