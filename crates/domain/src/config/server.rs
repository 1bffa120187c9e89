use serde::{Deserialize, Serialize};

/// Web server binding for the messaging surface.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (default: loopback only; the shim runs on the same host)
    pub bind_address: String,

    /// Web server port (default: 8780)
    pub web_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            web_port: 8780,
        }
    }
}
