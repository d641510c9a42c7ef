use serde::{Deserialize, Serialize};

const DEFAULT_PORT: u16 = 4320;
const DEFAULT_LOG_LEVEL: &str = "info";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Runtime configuration for the task service.
///
/// Built from CLI flags / environment variables in `main.rs`; every field
/// falls back to a local-only default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access).
    pub bind_address: String,
    /// Log filter (trace, debug, info, warn, error — or a full EnvFilter directive).
    pub log_level: String,
}

impl ServerConfig {
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        Self {
            port: port.unwrap_or(DEFAULT_PORT),
            bind_address: bind_address.unwrap_or_else(default_bind_address),
            log_level: log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
