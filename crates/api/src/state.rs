use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened and validated before the server starts.
    pub pool: blogpad_db::DbPool,
    /// Immutable server configuration.
    pub config: Arc<ServerConfig>,
}
