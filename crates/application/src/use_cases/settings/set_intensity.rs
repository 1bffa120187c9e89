use greyscale_domain::{DomainError, Intensity};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SettingsRepository;

pub struct SetIntensityUseCase {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl SetIntensityUseCase {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Persist a new global intensity, clamped to `[0, 100]`.
    #[instrument(skip(self))]
    pub async fn execute(&self, percent: i64) -> Result<Intensity, DomainError> {
        let intensity = Intensity::new(percent);

        let mut settings = self.settings_repo.load().await?;
        settings.intensity = intensity;
        self.settings_repo.save(&settings).await?;

        info!(percent = intensity.percent(), "Intensity updated");

        Ok(intensity)
    }
}
