//! Greyscale Web Infrastructure Layer
pub mod settings_cache;
pub mod storage;
pub mod tabs;

pub use settings_cache::SettingsCache;
pub use storage::FileSettingsStore;
pub use tabs::{BridgeTabHost, FilterState, StyleCommand, StyleCommandEmitter, TabRegistry};
