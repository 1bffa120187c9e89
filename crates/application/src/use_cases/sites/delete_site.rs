use greyscale_domain::{DomainError, SiteDomain};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::SettingsRepository;

pub struct DeleteSiteUseCase {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl DeleteSiteUseCase {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Remove a site from the config. Deleting an unknown domain is a
    /// silent no-op; returns whether an entry was removed.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &SiteDomain) -> Result<bool, DomainError> {
        let mut settings = self.settings_repo.load().await?;

        if !settings.sites.remove(domain) {
            debug!(domain = %domain, "Site not configured, nothing to delete");
            return Ok(false);
        }

        self.settings_repo.save(&settings).await?;
        info!(domain = %domain, "Site removed");

        Ok(true)
    }
}
