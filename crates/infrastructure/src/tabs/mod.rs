//! Browser-bridge tab adapters: the in-memory tab registry, the style
//! command channel to the shim, and the `TabHost` port implementation.

pub mod bridge_host;
pub mod command_emitter;
pub mod registry;

pub use bridge_host::BridgeTabHost;
pub use command_emitter::{StyleCommand, StyleCommandEmitter};
pub use registry::{FilterState, TabRegistry};
