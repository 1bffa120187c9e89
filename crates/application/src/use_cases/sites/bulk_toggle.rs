use greyscale_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::SettingsRepository;

pub struct BulkToggleUseCase {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl BulkToggleUseCase {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Set every configured site's flag at once; the key set is unchanged.
    /// An empty config is a no-op and must not fan out a change
    /// notification, so nothing is saved. Returns the number of entries.
    #[instrument(skip(self))]
    pub async fn execute(&self, enabled: bool) -> Result<usize, DomainError> {
        let mut settings = self.settings_repo.load().await?;

        if settings.sites.is_empty() {
            debug!("No sites configured, bulk toggle skipped");
            return Ok(0);
        }

        settings.sites.set_all(enabled);
        self.settings_repo.save(&settings).await?;

        let count = settings.sites.len();
        info!(enabled, count, "All sites toggled");

        Ok(count)
    }
}
