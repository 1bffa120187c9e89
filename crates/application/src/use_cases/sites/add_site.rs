use greyscale_domain::{DomainError, SiteDomain};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SettingsRepository;

pub struct AddSiteUseCase {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl AddSiteUseCase {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Normalize and validate raw user input, then insert it enabled.
    ///
    /// Invalid input and duplicates are rejected before any state change.
    #[instrument(skip(self))]
    pub async fn execute(&self, raw: &str) -> Result<SiteDomain, DomainError> {
        let domain = SiteDomain::parse(raw)?;

        let mut settings = self.settings_repo.load().await?;
        settings.sites.add(domain.clone())?;
        self.settings_repo.save(&settings).await?;

        info!(domain = %domain, "Site added");

        Ok(domain)
    }
}
