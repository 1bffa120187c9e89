use greyscale_domain::{DomainError, SiteDomain};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SettingsRepository;

pub struct ToggleSiteUseCase {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl ToggleSiteUseCase {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Set a site's enabled flag, inserting the entry when absent (toggling
    /// the current tab's site on should work even before it is listed).
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: SiteDomain, enabled: bool) -> Result<(), DomainError> {
        let mut settings = self.settings_repo.load().await?;
        settings.sites.set_enabled(domain.clone(), enabled);
        self.settings_repo.save(&settings).await?;

        info!(domain = %domain, enabled, "Site toggled");

        Ok(())
    }
}
