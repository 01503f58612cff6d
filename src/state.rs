use crate::config::AppConfig;
use crate::services::catalog::RoomCatalog;

/// Shared, read-only per-process state. Nothing here changes between turns.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Box<dyn RoomCatalog>,
}
