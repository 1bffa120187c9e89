use greyscale_domain::Config;
use greyscale_infrastructure::FileSettingsStore;
use std::sync::Arc;
use tracing::info;

/// Open the settings store, seeding the document with defaults on first run.
pub async fn init_settings_store(config: &Config) -> anyhow::Result<Arc<FileSettingsStore>> {
    let store = Arc::new(FileSettingsStore::new(&config.storage.settings_path));
    store.ensure_initialized().await?;

    info!(
        path = %config.storage.settings_path.display(),
        "Settings store ready"
    );

    Ok(store)
}
