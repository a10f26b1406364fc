use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted and the config is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Content store connection pool.
    pub pool: duas_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Whether admin writes are disabled for this deployment.
    pub fn read_only(&self) -> bool {
        self.config.database.read_only
    }
}
