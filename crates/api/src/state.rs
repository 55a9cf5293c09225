use std::sync::Arc;

use maya_core::storage::MediaStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maya_db::DbPool,
    /// Server configuration (JWT settings, bootstrap admin, CORS).
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded media.
    pub storage: Arc<dyn MediaStore>,
}
