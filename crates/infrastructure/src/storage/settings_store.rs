use async_trait::async_trait;
use greyscale_application::ports::SettingsRepository;
use greyscale_domain::{DomainError, Settings, SettingsChange};
use std::path::PathBuf;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

/// JSON-document settings store.
///
/// The whole document is written on every save (temp file + rename, so a
/// crash never leaves a half-written document behind) and a notification
/// carrying the changed top-level keys is broadcast to subscribers. Loads
/// fall back to defaults when the document is missing or unreadable — the
/// system always has a usable settings value.
pub struct FileSettingsStore {
    path: PathBuf,
    changes: broadcast::Sender<SettingsChange>,
    /// Last document this store observed, used to diff saves into changed
    /// keys without re-reading the file.
    last_seen: Mutex<Option<Settings>>,
}

impl FileSettingsStore {
    const CHANNEL_CAPACITY: usize = 16;

    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (changes, _) = broadcast::channel(Self::CHANNEL_CAPACITY);
        Self {
            path: path.into(),
            changes,
            last_seen: Mutex::new(None),
        }
    }

    /// First-run seeding: create the document with defaults when it does not
    /// exist yet. An existing document is left untouched.
    pub async fn ensure_initialized(&self) -> Result<(), DomainError> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => return Err(DomainError::IoError(e.to_string())),
        }
        self.write_document(&Settings::default()).await?;
        debug!(path = %self.path.display(), "Settings document created with defaults");
        Ok(())
    }

    async fn read_document(&self) -> Settings {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Settings document unreadable, using defaults"
                    );
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Settings document inaccessible, using defaults"
                );
                Settings::default()
            }
        }
    }

    async fn write_document(&self, settings: &Settings) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(settings)
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsStore {
    async fn load(&self) -> Result<Settings, DomainError> {
        let settings = self.read_document().await;
        *self.last_seen.lock().await = Some(settings.clone());
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        // Hold the diff lock across the write so interleaved saves cannot
        // produce notifications against a stale baseline.
        let mut last_seen = self.last_seen.lock().await;
        let previous = match last_seen.as_ref() {
            Some(settings) => settings.clone(),
            None => self.read_document().await,
        };

        self.write_document(settings).await?;
        *last_seen = Some(settings.clone());

        let change = SettingsChange::diff(&previous, settings);
        if change.any() {
            // Nobody subscribed yet is fine; notification is best-effort.
            let _ = self.changes.send(change);
        }

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.changes.subscribe()
    }
}
