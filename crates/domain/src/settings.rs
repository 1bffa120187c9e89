use crate::errors::DomainError;
use crate::site_domain::SiteDomain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-site flag stored under each domain key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub enabled: bool,
}

/// Grayscale strength as an integer percentage.
///
/// Out-of-range values are clamped to `[0, 100]` rather than rejected, both
/// at construction and when deserializing a persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MAX: Intensity = Intensity(100);

    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<i64> for Intensity {
    fn from(percent: i64) -> Self {
        Self::new(percent)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

/// Persisted mapping of domain -> per-site flag.
///
/// Iteration order is sorted by domain; insertion order is irrelevant to
/// matching and is not preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteConfig(BTreeMap<SiteDomain, SiteEntry>);

impl SiteConfig {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, domain: &SiteDomain) -> bool {
        self.0.contains_key(domain)
    }

    /// Explicit optional lookup; a missing key is an ordinary absent value.
    pub fn get(&self, domain: &SiteDomain) -> Option<SiteEntry> {
        self.0.get(domain).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SiteDomain, &SiteEntry)> {
        self.0.iter()
    }

    /// Insert a new site, enabled. Duplicate keys are rejected with no
    /// state change.
    pub fn add(&mut self, domain: SiteDomain) -> Result<(), DomainError> {
        if self.0.contains_key(&domain) {
            return Err(DomainError::DuplicateDomain(domain.to_string()));
        }
        self.0.insert(domain, SiteEntry { enabled: true });
        Ok(())
    }

    /// Returns true when an entry was actually removed; removing an absent
    /// key is a no-op.
    pub fn remove(&mut self, domain: &SiteDomain) -> bool {
        self.0.remove(domain).is_some()
    }

    /// Set a site's flag, inserting the entry when absent.
    pub fn set_enabled(&mut self, domain: SiteDomain, enabled: bool) {
        self.0.insert(domain, SiteEntry { enabled });
    }

    /// Flip every existing entry's flag; the key set is unchanged.
    pub fn set_all(&mut self, enabled: bool) {
        for entry in self.0.values_mut() {
            entry.enabled = enabled;
        }
    }
}

/// The whole persisted settings document.
///
/// Wire shape (field names fixed by the storage schema):
/// `{ "greyscaleSites": { "<domain>": { "enabled": bool } }, "intensity": 0-100 }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "greyscaleSites", default)]
    pub sites: SiteConfig,
    #[serde(default)]
    pub intensity: Intensity,
}

/// Which top-level keys of the document changed in a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsChange {
    pub sites: bool,
    pub intensity: bool,
}

impl SettingsChange {
    pub fn diff(old: &Settings, new: &Settings) -> Self {
        Self {
            sites: old.sites != new.sites,
            intensity: old.intensity != new.intensity,
        }
    }

    pub fn any(self) -> bool {
        self.sites || self.intensity
    }
}
