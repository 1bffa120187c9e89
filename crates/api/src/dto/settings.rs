use greyscale_domain::Settings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct SiteEntryResponse {
    pub enabled: bool,
}

/// Settings as the popup consumes them; same wire names as the persisted
/// document.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    #[serde(rename = "greyscaleSites")]
    pub sites: BTreeMap<String, SiteEntryResponse>,
    pub intensity: u8,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            sites: settings
                .sites
                .iter()
                .map(|(domain, entry)| {
                    (
                        domain.to_string(),
                        SiteEntryResponse {
                            enabled: entry.enabled,
                        },
                    )
                })
                .collect(),
            intensity: settings.intensity.percent(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetIntensityRequest {
    /// Raw percentage; out-of-range values are clamped.
    pub intensity: i64,
}
