use dashmap::DashMap;
use greyscale_application::ports::{TabId, TabInfo};
use greyscale_domain::Intensity;

/// Filter state of a single tab. These are the only two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    NoFilter,
    Filtered(Intensity),
}

#[derive(Debug, Clone)]
struct TabRecord {
    url: Option<String>,
    filter: FilterState,
}

/// In-memory registry of the tabs the browser shim has reported.
///
/// Fed by navigation events; a tab disappears when the shim reports it
/// closed. Navigation events are at-least-once, so every write here must be
/// safe to repeat.
#[derive(Default)]
pub struct TabRegistry {
    tabs: DashMap<TabId, TabRecord>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a navigation; a tab seen for the first time starts unfiltered.
    pub fn upsert(&self, tab: TabId, url: Option<String>) {
        self.tabs
            .entry(tab)
            .and_modify(|record| record.url = url.clone())
            .or_insert(TabRecord {
                url,
                filter: FilterState::NoFilter,
            });
    }

    pub fn remove(&self, tab: TabId) {
        self.tabs.remove(&tab);
    }

    /// Record a filter transition; false when the tab is unknown.
    pub fn set_filter(&self, tab: TabId, filter: FilterState) -> bool {
        match self.tabs.get_mut(&tab) {
            Some(mut record) => {
                record.filter = filter;
                true
            }
            None => false,
        }
    }

    pub fn filter_state(&self, tab: TabId) -> Option<FilterState> {
        self.tabs.get(&tab).map(|record| record.filter)
    }

    pub fn snapshot(&self) -> Vec<TabInfo> {
        self.tabs
            .iter()
            .map(|entry| TabInfo {
                id: *entry.key(),
                url: entry.value().url.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
