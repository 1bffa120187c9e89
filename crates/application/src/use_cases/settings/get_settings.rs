use greyscale_domain::{DomainError, Settings};
use std::sync::Arc;

use crate::ports::SettingsRepository;

pub struct GetSettingsUseCase {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl GetSettingsUseCase {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    pub async fn execute(&self) -> Result<Settings, DomainError> {
        self.settings_repo.load().await
    }
}
