pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// Authoritative in-memory task collection. Single source of
    /// validation truth — handlers never validate task fields themselves.
    pub store: Arc<TaskStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(TaskStore::new()),
            started_at: std::time::Instant::now(),
        }
    }
}
